use contracts::domain::a004_event::aggregate::{Event, EventDto};
use leptos::prelude::*;

use crate::domain::a004_event::model;
use crate::domain::a004_event::rules::{self, flush_tier, TierDraft};
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::{FilePicker, Stepper};
use crate::shared::data::use_query_cache;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::shared::upload::{self, UploadPurpose};
use crate::shared::wizard::{use_wizard, SubmitCtx, WizardController};

#[component]
pub fn EventWizard(
    existing: Option<Event>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctrl = WizardController::new(rules::event_schema(), rules::CACHE_KEY);
    ctrl.provide();
    let is_edit = existing.is_some();
    if let Some(event) = existing {
        ctrl.load(EventDto::from(event));
    }

    let pending_images: RwSignal<Vec<web_sys::File>, LocalStorage> =
        RwSignal::new_local(Vec::new());

    let ctx = SubmitCtx {
        cache: use_query_cache(),
        toast: use_toast(),
    };

    let handle_submit = move |_| {
        ctrl.submit(
            ctx,
            "Event saved",
            move |mut record: EventDto| async move {
                let files = pending_images.get_untracked();
                match upload::upload_files(UploadPurpose::ProductMedia, &files).await {
                    Ok(urls) => {
                        record.image_urls.extend(urls);
                        (record, None)
                    }
                    Err(e) => (
                        record,
                        Some(format!("Event saved, but images failed to upload: {}", e)),
                    ),
                }
            },
            |record: EventDto| async move { model::save(&record).await },
            on_saved,
        );
    };

    let cancel = move |_| on_cancel.run(());

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">
                    {if is_edit { "Edit event" } else { "Plan event" }}
                </h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <Stepper labels=ctrl.step_labels() current=Signal::derive(move || ctrl.step()) />

            <div class="wizard__body">
                {move || match ctrl.step() {
                    1 => view! { <StepDetails /> }.into_any(),
                    2 => view! { <StepVenue /> }.into_any(),
                    3 => view! {
                        <FilePicker
                            label="Event images"
                            accept="image/*"
                            multiple=true
                            files=pending_images
                        />
                    }.into_any(),
                    _ => view! { <StepTickets /> }.into_any(),
                }}
            </div>

            <div class="wizard__footer">
                <Show when=move || !ctrl.is_first_step()>
                    <button class="button button--secondary" on:click=move |_| ctrl.previous()>
                        "Previous"
                    </button>
                </Show>
                <Show when=move || !ctrl.is_last_step()>
                    <button class="button button--primary" on:click=move |_| { ctrl.next(); }>
                        "Next"
                    </button>
                </Show>
                <Show when=move || ctrl.is_last_step()>
                    <button
                        class="button button--primary"
                        disabled=move || ctrl.submitting()
                        on:click=handle_submit
                    >
                        {move || if ctrl.submitting() { "Saving..." } else { "Save event" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepDetails() -> impl IntoView {
    let ctrl = use_wizard::<EventDto>();

    view! {
        <Input
            label="Title"
            value=Signal::derive(move || ctrl.with_draft(|d| d.title.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("title", |d| d.title = v))
            error=Signal::derive(move || ctrl.error("title"))
        />
        <Textarea
            label="Description"
            value=Signal::derive(move || ctrl.with_draft(|d| d.description.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("description", |d| d.description = v))
            error=Signal::derive(move || ctrl.error("description"))
        />
        <Input
            label="Contact email"
            input_type="email"
            value=Signal::derive(move || ctrl.with_draft(|d| d.contact_email.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("contactEmail", |d| d.contact_email = v))
            error=Signal::derive(move || ctrl.error("contactEmail"))
        />
    }
}

#[component]
fn StepVenue() -> impl IntoView {
    let ctrl = use_wizard::<EventDto>();

    view! {
        <Input
            label="Venue"
            value=Signal::derive(move || ctrl.with_draft(|d| d.venue.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("venue", |d| d.venue = v))
            error=Signal::derive(move || ctrl.error("venue"))
        />
        <Input
            label="Starts at"
            input_type="datetime-local"
            value=Signal::derive(move || ctrl.with_draft(|d| d.starts_at.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("startsAt", |d| d.starts_at = v))
            error=Signal::derive(move || ctrl.error("startsAt"))
        />
        <Input
            label="Ends at"
            input_type="datetime-local"
            value=Signal::derive(move || ctrl.with_draft(|d| d.ends_at.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("endsAt", |d| d.ends_at = v))
            error=Signal::derive(move || ctrl.error("endsAt"))
        />
    }
}

/// Terminal step: committed tiers plus one staged draft row. The draft is
/// registered with the flush registry, so hitting "Save event" with a
/// half-typed tier still commits it before validation.
#[component]
fn StepTickets() -> impl IntoView {
    let ctrl = use_wizard::<EventDto>();
    let draft = RwSignal::new(TierDraft::default());

    let flush_id = ctrl.register_flush(move |dto| {
        let staged = draft.try_get_untracked().unwrap_or_default();
        flush_tier(&staged, dto);
    });
    on_cleanup(move || ctrl.unregister_flush(flush_id));

    let add_tier = move || {
        let staged = draft.get_untracked();
        ctrl.set_field("ticketTiers", move |d| flush_tier(&staged, d));
        draft.set(TierDraft::default());
    };

    view! {
        <div class="form__group">
            <label class="form__label">"Ticket tiers"</label>

            <div class="tier-list">
                {move || ctrl.with_draft(|d| d.ticket_tiers.clone()).into_iter().enumerate().map(|(index, tier)| {
                    view! {
                        <div class="tier-list__row">
                            <span class="tier-list__name">{tier.name.clone()}</span>
                            <span>{format!("{:.2}", tier.price)}</span>
                            <span>{format!("x{}", tier.quantity)}</span>
                            <button
                                class="button button--ghost"
                                title="Remove tier"
                                on:click=move |_| {
                                    ctrl.set_field("ticketTiers", move |d| {
                                        if index < d.ticket_tiers.len() {
                                            d.ticket_tiers.remove(index);
                                        }
                                    });
                                }
                            >
                                {icon("delete")}
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="tier-draft">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Tier name (e.g. VIP)"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        draft.update(|d| d.name = v);
                    }
                />
                <input
                    type="number"
                    class="form__input"
                    placeholder="Price"
                    prop:value=move || draft.with(|d| d.price.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        draft.update(|d| d.price = v);
                    }
                />
                <input
                    type="number"
                    class="form__input"
                    placeholder="Quantity"
                    prop:value=move || draft.with(|d| d.quantity.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        draft.update(|d| d.quantity = v);
                    }
                />
                <button class="button button--secondary" on:click=move |_| add_tier()>
                    {icon("plus")}
                    "Add tier"
                </button>
            </div>

            {move || ctrl.error("ticketTiers").map(|e| view! {
                <span class="form__error">{e}</span>
            })}
        </div>
    }
}
