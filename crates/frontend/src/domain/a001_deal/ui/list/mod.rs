pub mod state;

use contracts::domain::a001_deal::aggregate::{Deal, DealStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::wizard::DealWizard;
use crate::domain::a001_deal::model;
use crate::domain::a001_deal::rules::CACHE_KEY;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::components::{EmptyState, FilterPanel, PaginationControls, SearchInput};
use crate::shared::data::{delete_needs_refetch, use_query_cache};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::toast::use_toast;
use state::{create_campaign_state, create_state};

fn status_badge(status: DealStatus) -> &'static str {
    match status {
        DealStatus::Active => "success",
        DealStatus::Paused => "warning",
        DealStatus::Archived => "neutral",
        DealStatus::Draft => "primary",
    }
}

fn format_timestamp(dt: Option<chrono::DateTime<chrono::Utc>>) -> String {
    dt.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum DealTab {
    Deals,
    Campaigns,
}

#[component]
pub fn DealList() -> impl IntoView {
    let state = create_state();
    let cache = use_query_cache();
    let toast = use_toast();
    let modal_stack = use_modal_stack();
    let filter_expanded = RwSignal::new(false);
    let (tab, set_tab) = signal(DealTab::Deals);

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

    // Refetch whenever the deals cache key is invalidated (submit
    // completion, optimistic-delete reconciliation).
    Effect::new(move |_| {
        cache.epoch(CACHE_KEY);
        fetch();
    });

    let on_search = Callback::new(move |q: String| {
        state.update(|s| s.set_search(q));
        fetch();
    });

    let on_status_filter = Callback::new(move |status: String| {
        state.update(|s| s.set_filter("status", status));
        fetch();
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
        fetch();
    });

    let open_wizard = move |existing: Option<Deal>| {
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
                    <DealWizard existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_deal = move |id: String| {
        // Optimistic removal; a failed request reconciles via invalidation.
        state.update(|s| s.items.retain(|d| d.id != id));
        spawn_local(async move {
            let outcome = model::delete(&id).await;
            if delete_needs_refetch(&outcome) {
                cache.invalidate(CACHE_KEY);
            }
        });
    };

    let request_status = move |id: String, status: DealStatus| {
        spawn_local(async move {
            match model::patch_status(&id, status).await {
                Ok(_) => cache.invalidate(CACHE_KEY),
                Err(e) => toast.error(format!("Could not update deal: {}", e)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Deals"</h1>
                    <div class="header__tabs">
                        <button
                            class=move || if tab.get() == DealTab::Deals { "tab tab--active" } else { "tab" }
                            on:click=move |_| set_tab.set(DealTab::Deals)
                        >
                            "Deals"
                        </button>
                        <button
                            class=move || if tab.get() == DealTab::Campaigns { "tab tab--active" } else { "tab" }
                            on:click=move |_| set_tab.set(DealTab::Campaigns)
                        >
                            "Campaigns"
                        </button>
                    </div>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_wizard(None)>
                        {icon("plus")}
                        "New deal"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || tab.get() == DealTab::Deals fallback=|| view! { <CampaignTable /> }>
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
                            placeholder="Search deals..."
                        />
                        <Select
                            label="Status"
                            value=Signal::derive(move || {
                                state.with(|s| s.filters.get("status").cloned().unwrap_or_default())
                            })
                            on_change=on_status_filter
                            options=Signal::derive(|| vec![
                                ("active".to_string(), "Active".to_string()),
                                ("draft".to_string(), "Draft".to_string()),
                                ("paused".to_string(), "Paused".to_string()),
                                ("archived".to_string(), "Archived".to_string()),
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
                    fallback=move || view! {
                        <EmptyState
                            title="No deals yet"
                            hint="Create your first deal to start attracting customers"
                        />
                    }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Title"</th>
                                    <th class="table__header-cell">"Type"</th>
                                    <th class="table__header-cell">"Discount"</th>
                                    <th class="table__header-cell">"Runs"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Created"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || state.with(|s| s.items.clone()).into_iter().map(|deal| {
                                    let id_for_delete = deal.id.clone();
                                    let id_for_status = deal.id.clone();
                                    let deal_for_edit = deal.clone();
                                    let status = deal.status;
                                    let (toggle_label, toggle_to) = match status {
                                        DealStatus::Active => ("Pause", DealStatus::Paused),
                                        _ => ("Activate", DealStatus::Active),
                                    };
                                    view! {
                                        <tr class="table__row" on:click=move |_| {
                                            open_wizard(Some(deal_for_edit.clone()));
                                        }>
                                            <td class="table__cell">{deal.title.clone()}</td>
                                            <td class="table__cell">{deal.deal_type.clone()}</td>
                                            <td class="table__cell">{format!("{}%", deal.discount_percentage)}</td>
                                            <td class="table__cell">
                                                {format!("{} — {}", format_date(&deal.start_date), format_date(&deal.end_date))}
                                            </td>
                                            <td class="table__cell">
                                                <Badge variant=status_badge(status)>{status.label()}</Badge>
                                            </td>
                                            <td class="table__cell">{format_timestamp(deal.metadata.created_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        request_status(id_for_status.clone(), toggle_to);
                                                    }
                                                >
                                                    {toggle_label}
                                                </button>
                                                <button
                                                    class="button button--ghost"
                                                    title="Delete"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        delete_deal(id_for_delete.clone());
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
            </Show>
        </div>
    }
}

/// Read-only campaign listing under `/deals/campaigns`.
#[component]
fn CampaignTable() -> impl IntoView {
    let state = create_campaign_state();

    let fetch = move || {
        let token = state.try_update(|s| s.begin_request()).unwrap_or(0);
        let query = state.with_untracked(|s| s.query_string());
        spawn_local(async move {
            match model::fetch_campaigns(&query).await {
                Ok(page) => {
                    let _ = state.try_update(|s| s.apply_page(token, page));
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.apply_error(token, e));
                }
            }
        });
    };

    Effect::new(move |_| fetch());

    view! {
        <Show
            when=move || !state.with(|s| s.is_empty_state())
            fallback=|| view! {
                <EmptyState
                    title="No campaigns"
                    hint="Campaigns group several deals into one promotion"
                />
            }
        >
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Deals"</th>
                            <th class="table__header-cell">"Runs"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|campaign| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{campaign.name.clone()}</td>
                                    <td class="table__cell">{campaign.deal_ids.len()}</td>
                                    <td class="table__cell">
                                        {format!("{} — {}", format_date(&campaign.starts_at), format_date(&campaign.ends_at))}
                                    </td>
                                    <td class="table__cell">{campaign.status.clone()}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
