pub mod state;

use contracts::domain::a002_menu_item::aggregate::MenuItem;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::wizard::MenuItemWizard;
use crate::domain::a002_menu_item::model;
use crate::domain::a002_menu_item::rules::CACHE_KEY;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::components::{EmptyState, FilterPanel, PaginationControls, SearchInput};
use crate::shared::data::{delete_needs_refetch, use_query_cache};
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use state::create_state;

#[component]
pub fn MenuItemList() -> impl IntoView {
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
        cache.epoch(CACHE_KEY);
        fetch();
    });

    let on_search = Callback::new(move |q: String| {
        state.update(|s| s.set_search(q));
        fetch();
    });

    let on_category_filter = Callback::new(move |category: String| {
        state.update(|s| s.set_filter("category", category));
        fetch();
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
        fetch();
    });

    let open_wizard = move |existing: Option<MenuItem>| {
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
                    <MenuItemWizard existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_item = move |id: String| {
        state.update(|s| s.items.retain(|m| m.id != id));
        spawn_local(async move {
            let outcome = model::delete(&id).await;
            if delete_needs_refetch(&outcome) {
                cache.invalidate(CACHE_KEY);
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Menu"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_wizard(None)>
                        {icon("plus")}
                        "New item"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
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
                        placeholder="Search menu items..."
                    />
                    <Select
                        label="Category"
                        value=Signal::derive(move || {
                            state.with(|s| s.filters.get("category").cloned().unwrap_or_default())
                        })
                        on_change=on_category_filter
                        options=Signal::derive(|| vec![
                            ("mains".to_string(), "Mains".to_string()),
                            ("starters".to_string(), "Starters".to_string()),
                            ("drinks".to_string(), "Drinks".to_string()),
                            ("desserts".to_string(), "Desserts".to_string()),
                        ])
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
                        title="Your menu is empty"
                        hint="Add your first item so customers can order"
                    />
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Category"</th>
                                <th class="table__header-cell">"Price"</th>
                                <th class="table__header-cell">"Tags"</th>
                                <th class="table__header-cell">"Available"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|item| {
                                let id_for_delete = item.id.clone();
                                let item_for_edit = item.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| {
                                        open_wizard(Some(item_for_edit.clone()));
                                    }>
                                        <td class="table__cell">{item.name.clone()}</td>
                                        <td class="table__cell">{item.category.clone()}</td>
                                        <td class="table__cell">{format!("{:.2}", item.price)}</td>
                                        <td class="table__cell">{item.tags.join(", ")}</td>
                                        <td class="table__cell">
                                            {if item.available {
                                                view! { <Badge variant="success">"Available"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge variant="neutral">"Hidden"</Badge> }.into_any()
                                            }}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost"
                                                title="Delete"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    delete_item(id_for_delete.clone());
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
        </div>
    }
}
