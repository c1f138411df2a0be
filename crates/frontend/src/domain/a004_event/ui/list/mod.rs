pub mod state;

use contracts::domain::a004_event::aggregate::{Event, EventStats};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::wizard::EventWizard;
use crate::domain::a004_event::model;
use crate::domain::a004_event::rules::CACHE_KEY;
use crate::shared::components::{EmptyState, FilterPanel, PaginationControls, SearchInput};
use crate::shared::data::{delete_needs_refetch, use_query_cache};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use state::create_state;

#[component]
pub fn EventList() -> impl IntoView {
    let state = create_state();
    let cache = use_query_cache();
    let modal_stack = use_modal_stack();
    let filter_expanded = RwSignal::new(false);
    let (stats, set_stats) = signal(EventStats::default());

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

    let fetch_stats = move || {
        spawn_local(async move {
            // Stats are decorative; a failure leaves the zeros in place
            if let Ok(fresh) = model::fetch_stats().await {
                let _ = set_stats.try_set(fresh);
            }
        });
    };

    Effect::new(move |_| {
        cache.epoch(CACHE_KEY);
        fetch();
        fetch_stats();
    });

    let on_search = Callback::new(move |q: String| {
        state.update(|s| s.set_search(q));
        fetch();
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
        fetch();
    });

    let open_wizard = move |existing: Option<Event>| {
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
                    <EventWizard existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_event = move |id: String| {
        state.update(|s| s.items.retain(|e| e.id != id));
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
                    <h1 class="header__title">"Events"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_wizard(None)>
                        {icon("plus")}
                        "Plan event"
                    </button>
                    <button class="button button--secondary" on:click=move |_| { fetch(); fetch_stats(); }>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats.get().total_events}</span>
                    <span class="stat-card__label">"Total events"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats.get().upcoming}</span>
                    <span class="stat-card__label">"Upcoming"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats.get().tickets_sold}</span>
                    <span class="stat-card__label">"Tickets sold"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{move || format!("{:.2}", stats.get().revenue)}</span>
                    <span class="stat-card__label">"Revenue"</span>
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
                        placeholder="Search events..."
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
                        title="No events planned"
                        hint="Plan your first event and start selling tickets"
                    />
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Title"</th>
                                <th class="table__header-cell">"Venue"</th>
                                <th class="table__header-cell">"Starts"</th>
                                <th class="table__header-cell">"Tiers"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|event| {
                                let id_for_delete = event.id.clone();
                                let event_for_edit = event.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| {
                                        open_wizard(Some(event_for_edit.clone()));
                                    }>
                                        <td class="table__cell">{event.title.clone()}</td>
                                        <td class="table__cell">{event.venue.clone()}</td>
                                        <td class="table__cell">{format_datetime(&event.starts_at)}</td>
                                        <td class="table__cell">{event.ticket_tiers.len()}</td>
                                        <td class="table__cell">{event.status.clone()}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost"
                                                title="Delete"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    delete_event(id_for_delete.clone());
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
