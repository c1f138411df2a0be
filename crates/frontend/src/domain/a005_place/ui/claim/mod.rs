use contracts::domain::a005_place::aggregate::Place;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a005_place::model;
use crate::domain::a005_place::rules::{self, ClaimDraft};
use crate::shared::components::ui::Textarea;
use crate::shared::components::{SearchInput, Stepper};
use crate::shared::data::use_query_cache;
use crate::shared::toast::use_toast;
use crate::shared::wizard::{use_wizard, SubmitCtx, WizardController};

/// Find & claim: the jump-enabled wizard variant. Picking a search result
/// fills the selection and jumps straight to the claim step.
#[component]
pub fn ClaimFlow(on_done: Callback<()>) -> impl IntoView {
    let ctrl = WizardController::new_with_jumps(rules::claim_schema(), rules::CACHE_KEY);
    ctrl.provide();

    let ctx = SubmitCtx {
        cache: use_query_cache(),
        toast: use_toast(),
    };

    let cancel = move |_| on_done.run(());
    let on_saved = Callback::new(move |_id: String| on_done.run(()));

    let handle_submit = move |_| {
        ctrl.submit(
            ctx,
            "Claim request sent",
            // Nothing to upload in a claim
            |record: ClaimDraft| async move { (record, None) },
            |record: ClaimDraft| async move {
                model::claim(&record.place_id, record.merchant_note).await
            },
            on_saved,
        );
    };

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">"Claim a place"</h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <Stepper labels=ctrl.step_labels() current=Signal::derive(move || ctrl.step()) />

            <div class="wizard__body">
                {move || match ctrl.step() {
                    1 => view! { <StepFind /> }.into_any(),
                    _ => view! { <StepClaim /> }.into_any(),
                }}
            </div>

            <div class="wizard__footer">
                <Show when=move || !ctrl.is_first_step()>
                    <button class="button button--secondary" on:click=move |_| ctrl.previous()>
                        "Back to search"
                    </button>
                </Show>
                <Show when=move || ctrl.is_last_step()>
                    <button
                        class="button button--primary"
                        disabled=move || ctrl.submitting()
                        on:click=handle_submit
                    >
                        {move || if ctrl.submitting() { "Sending..." } else { "Send claim" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepFind() -> impl IntoView {
    let ctrl = use_wizard::<ClaimDraft>();
    let (results, set_results) = signal(Vec::<Place>::new());
    let (searched, set_searched) = signal(false);
    let (search, set_search) = signal(String::new());

    let run_search = move |q: String| {
        set_search.set(q.clone());
        spawn_local(async move {
            let query = format!("?page=1&claimed=false&search={}", urlencoding::encode(&q));
            match model::fetch_page(&query).await {
                Ok(page) => {
                    let _ = set_results.try_set(page.data);
                    let _ = set_searched.try_set(true);
                }
                Err(e) => {
                    log::warn!("place search failed: {}", e);
                }
            }
        });
    };

    view! {
        <div class="claim-search">
            <SearchInput
                value=search
                on_change=Callback::new(run_search)
                placeholder="Search unclaimed places..."
            />
            {move || ctrl.error("placeId").map(|e| view! {
                <span class="form__error">{e}</span>
            })}
            <div class="claim-search__results">
                {move || {
                    let places = results.get();
                    if places.is_empty() && searched.get() {
                        view! {
                            <p class="claim-search__empty">"No unclaimed places match that search."</p>
                        }.into_any()
                    } else {
                        places.into_iter().map(|place| {
                            let id = place.id.clone();
                            let name = place.name.clone();
                            view! {
                                <div class="claim-search__row">
                                    <div>
                                        <div class="claim-search__name">{place.name.clone()}</div>
                                        <div class="claim-search__address">{place.address.clone()}</div>
                                    </div>
                                    <button
                                        class="button button--primary"
                                        on:click=move |_| {
                                            let id = id.clone();
                                            let name = name.clone();
                                            ctrl.set_field("placeId", move |d| {
                                                d.place_id = id;
                                                d.place_name = name;
                                            });
                                            // Selection skips straight to the claim step
                                            ctrl.jump(2);
                                        }
                                    >
                                        "Claim"
                                    </button>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn StepClaim() -> impl IntoView {
    let ctrl = use_wizard::<ClaimDraft>();

    view! {
        <p class="claim-summary">
            {move || {
                let name = ctrl.with_draft(|d| d.place_name.clone());
                format!("You are claiming: {}", name)
            }}
        </p>
        <Textarea
            label="Note for the reviewer"
            rows=5
            placeholder="Tell us why this place is yours"
            value=Signal::derive(move || ctrl.with_draft(|d| d.merchant_note.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("merchantNote", |d| d.merchant_note = v))
            error=Signal::derive(move || ctrl.error("merchantNote"))
        />
    }
}
