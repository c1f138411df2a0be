pub mod state;

use contracts::domain::a003_inventory::aggregate::{Catalog, InventoryProduct};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::catalog_editor::CatalogEditor;
use super::wizard::ProductWizard;
use crate::domain::a003_inventory::model;
use crate::domain::a003_inventory::rules::{CATALOGS_CACHE_KEY, PRODUCTS_CACHE_KEY};
use crate::shared::components::{EmptyState, FilterPanel, PaginationControls, SearchInput};
use crate::shared::data::{delete_needs_refetch, use_query_cache};
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use state::{create_catalog_state, create_state};

#[derive(Clone, Copy, PartialEq, Eq)]
enum InventoryTab {
    Products,
    Catalogs,
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let (tab, set_tab) = signal(InventoryTab::Products);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Inventory"</h1>
                    <div class="header__tabs">
                        <button
                            class=move || if tab.get() == InventoryTab::Products { "tab tab--active" } else { "tab" }
                            on:click=move |_| set_tab.set(InventoryTab::Products)
                        >
                            "Products"
                        </button>
                        <button
                            class=move || if tab.get() == InventoryTab::Catalogs { "tab tab--active" } else { "tab" }
                            on:click=move |_| set_tab.set(InventoryTab::Catalogs)
                        >
                            "Catalogs"
                        </button>
                    </div>
                </div>
            </div>

            <Show
                when=move || tab.get() == InventoryTab::Products
                fallback=|| view! { <CatalogTable /> }
            >
                <ProductTable />
            </Show>
        </div>
    }
}

#[component]
fn ProductTable() -> impl IntoView {
    let state = create_state();
    let cache = use_query_cache();
    let modal_stack = use_modal_stack();
    let filter_expanded = RwSignal::new(false);

    let fetch = move || {
        let token = state.try_update(|s| s.begin_request()).unwrap_or(0);
        let query = state.with_untracked(|s| s.query_string());
        spawn_local(async move {
            match model::fetch_page(&query).await {
                Ok(page) => {
                    let _ = state.try_update(|s| s.apply_page(token, page));
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.apply_error(token, e));
                }
            }
        });
    };

    Effect::new(move |_| {
        cache.epoch(PRODUCTS_CACHE_KEY);
        fetch();
    });

    let on_search = Callback::new(move |q: String| {
        state.update(|s| s.set_search(q));
        fetch();
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
        fetch();
    });

    let open_wizard = move |existing: Option<InventoryProduct>| {
        modal_stack.push_framed(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_id: String| handle.close()
                });
                let on_cancel = Callback::new({
                    let handle = handle.clone();
                    move |_: ()| handle.close()
                });
                view! {
                    <ProductWizard existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_product = move |id: String| {
        state.update(|s| s.items.retain(|p| p.id != id));
        spawn_local(async move {
            let outcome = model::delete(&id).await;
            if delete_needs_refetch(&outcome) {
                cache.invalidate(PRODUCTS_CACHE_KEY);
            }
        });
    };

    view! {
        <div class="header__actions header__actions--inline">
            <button class="button button--primary" on:click=move |_| open_wizard(None)>
                {icon("plus")}
                "New product"
            </button>
            <button class="button button--secondary" on:click=move |_| fetch()>
                {icon("refresh")}
                "Refresh"
            </button>
        </div>

        <FilterPanel
            is_expanded=filter_expanded
            active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
            pagination_controls=move || view! {
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    on_page_change=on_page_change
                />
            }.into_any()
            filter_content=move || view! {
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=on_search
                    placeholder="Search by name or SKU..."
                />
            }.into_any()
        />

        {move || state.with(|s| s.error.clone()).map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}

        <Show
            when=move || !state.with(|s| s.is_empty_state())
            fallback=|| view! {
                <EmptyState
                    title="No products in stock"
                    hint="Add a product to start tracking inventory"
                />
            }
        >
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"SKU"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|product| {
                            let id_for_delete = product.id.clone();
                            let product_for_edit = product.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| {
                                    open_wizard(Some(product_for_edit.clone()));
                                }>
                                    <td class="table__cell">{product.name.clone()}</td>
                                    <td class="table__cell">{product.sku.clone()}</td>
                                    <td class="table__cell">{product.category.clone()}</td>
                                    <td class="table__cell">{format!("{:.2}", product.price)}</td>
                                    <td class="table__cell">{product.quantity}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_product(id_for_delete.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
fn CatalogTable() -> impl IntoView {
    let state = create_catalog_state();
    let cache = use_query_cache();
    let modal_stack = use_modal_stack();

    let fetch = move || {
        let token = state.try_update(|s| s.begin_request()).unwrap_or(0);
        let query = state.with_untracked(|s| s.query_string());
        spawn_local(async move {
            match model::fetch_catalogs(&query).await {
                Ok(page) => {
                    let _ = state.try_update(|s| s.apply_page(token, page));
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.apply_error(token, e));
                }
            }
        });
    };

    Effect::new(move |_| {
        cache.epoch(CATALOGS_CACHE_KEY);
        fetch();
    });

    let open_editor = move |existing: Option<Catalog>| {
        modal_stack.push_framed(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_: ()| handle.close()
                });
                let on_cancel = Callback::new({
                    let handle = handle.clone();
                    move |_: ()| handle.close()
                });
                view! {
                    <CatalogEditor existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_catalog = move |id: String| {
        state.update(|s| s.items.retain(|c| c.id != id));
        spawn_local(async move {
            let outcome = model::delete_catalog(&id).await;
            if delete_needs_refetch(&outcome) {
                cache.invalidate(CATALOGS_CACHE_KEY);
            }
        });
    };

    view! {
        <div class="header__actions header__actions--inline">
            <button class="button button--primary" on:click=move |_| open_editor(None)>
                {icon("plus")}
                "New catalog"
            </button>
            <button class="button button--secondary" on:click=move |_| fetch()>
                {icon("refresh")}
                "Refresh"
            </button>
        </div>

        <Show
            when=move || !state.with(|s| s.is_empty_state())
            fallback=|| view! {
                <EmptyState
                    title="No catalogs"
                    hint="Group products into catalogs with categories and tags"
                />
            }
        >
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Categories"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|catalog| {
                            let id_for_delete = catalog.id.clone();
                            let catalog_for_edit = catalog.clone();
                            let summary = catalog
                                .categories
                                .iter()
                                .map(|c| c.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <tr class="table__row" on:click=move |_| {
                                    open_editor(Some(catalog_for_edit.clone()));
                                }>
                                    <td class="table__cell">{catalog.name.clone()}</td>
                                    <td class="table__cell">{summary}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_catalog(id_for_delete.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
