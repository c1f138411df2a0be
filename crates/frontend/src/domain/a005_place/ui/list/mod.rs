pub mod state;

use contracts::domain::a005_place::aggregate::Place;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::claim::ClaimFlow;
use super::wizard::PlaceWizard;
use crate::domain::a005_place::model;
use crate::domain::a005_place::rules::CACHE_KEY;
use crate::shared::components::ui::Badge;
use crate::shared::components::{EmptyState, FilterPanel, PaginationControls, SearchInput};
use crate::shared::data::{delete_needs_refetch, use_query_cache};
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use state::create_state;

#[component]
pub fn PlaceList() -> impl IntoView {
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

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
        fetch();
    });

    let open_wizard = move |existing: Option<Place>| {
        modal_stack.push_framed(
            Some("max-width: min(860px, 95vw); width: min(860px, 95vw);".to_string()),
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
                    <PlaceWizard existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let open_claim_flow = move || {
        modal_stack.push_framed(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            None,
            move |handle| {
                let on_done = Callback::new({
                    let handle = handle.clone();
                    move |_: ()| handle.close()
                });
                view! { <ClaimFlow on_done=on_done /> }.into_any()
            },
        );
    };

    let delete_place = move |id: String| {
        state.update(|s| s.items.retain(|p| p.id != id));
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
                    <h1 class="header__title">"Places"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_wizard(None)>
                        {icon("plus")}
                        "New place"
                    </button>
                    <button class="button button--secondary" on:click=move |_| open_claim_flow()>
                        {icon("places")}
                        "Find & claim"
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
                        placeholder="Search places..."
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
                        title="No places yet"
                        hint="Add your venue, or claim one that already exists"
                    />
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Address"</th>
                                <th class="table__header-cell">"Type"</th>
                                <th class="table__header-cell">"Claimed"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|place| {
                                let id_for_delete = place.id.clone();
                                let place_for_edit = place.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| {
                                        open_wizard(Some(place_for_edit.clone()));
                                    }>
                                        <td class="table__cell">{place.name.clone()}</td>
                                        <td class="table__cell">{place.address.clone()}</td>
                                        <td class="table__cell">{place.place_type.clone()}</td>
                                        <td class="table__cell">
                                            {if place.claimed {
                                                view! { <Badge variant="success">"Claimed"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge variant="neutral">"Unclaimed"</Badge> }.into_any()
                                            }}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost"
                                                title="Delete"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    delete_place(id_for_delete.clone());
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
