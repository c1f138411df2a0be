use contracts::domain::a005_place::aggregate::{Facility, Place, PlaceDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a005_place::model;
use crate::domain::a005_place::rules;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::{FilePicker, Stepper};
use crate::shared::data::use_query_cache;
use crate::shared::toast::use_toast;
use crate::shared::upload::{self, UploadPurpose};
use crate::shared::wizard::{use_wizard, SubmitCtx, WizardController};

#[component]
pub fn PlaceWizard(
    existing: Option<Place>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctrl = WizardController::new(rules::place_schema(), rules::CACHE_KEY);
    ctrl.provide();
    let is_edit = existing.is_some();
    if let Some(place) = existing {
        ctrl.load(PlaceDto::from(place));
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
            "Place saved",
            move |mut record: PlaceDto| async move {
                let files = pending_images.get_untracked();
                match upload::upload_files(UploadPurpose::FacilityImages, &files).await {
                    Ok(urls) => {
                        record.image_urls.extend(urls);
                        (record, None)
                    }
                    Err(e) => (
                        record,
                        Some(format!("Place saved, but images failed to upload: {}", e)),
                    ),
                }
            },
            |record: PlaceDto| async move { model::save(&record).await },
            on_saved,
        );
    };

    let cancel = move |_| on_cancel.run(());

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">
                    {if is_edit { "Edit place" } else { "New place" }}
                </h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <Stepper labels=ctrl.step_labels() current=Signal::derive(move || ctrl.step()) />

            <div class="wizard__body">
                {move || match ctrl.step() {
                    1 => view! { <StepBasics /> }.into_any(),
                    2 => view! { <StepDetails /> }.into_any(),
                    3 => view! { <StepFacilities /> }.into_any(),
                    _ => view! {
                        <FilePicker
                            label="Place images"
                            accept="image/*"
                            multiple=true
                            files=pending_images
                        />
                    }.into_any(),
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
                        {move || if ctrl.submitting() { "Saving..." } else { "Save place" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepBasics() -> impl IntoView {
    let ctrl = use_wizard::<PlaceDto>();

    view! {
        <Input
            label="Name"
            value=Signal::derive(move || ctrl.with_draft(|d| d.name.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("name", |d| d.name = v))
            error=Signal::derive(move || ctrl.error("name"))
        />
        <Input
            label="Address"
            value=Signal::derive(move || ctrl.with_draft(|d| d.address.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("address", |d| d.address = v))
            error=Signal::derive(move || ctrl.error("address"))
        />
        <Select
            label="Place type"
            value=Signal::derive(move || ctrl.with_draft(|d| d.place_type.clone()))
            on_change=Callback::new(move |v: String| ctrl.set_field("placeType", |d| d.place_type = v))
            options=Signal::derive(|| vec![
                ("restaurant".to_string(), "Restaurant".to_string()),
                ("bar".to_string(), "Bar".to_string()),
                ("lounge".to_string(), "Lounge".to_string()),
                ("event-hall".to_string(), "Event hall".to_string()),
            ])
            error=Signal::derive(move || ctrl.error("placeType"))
        />
    }
}

#[component]
fn StepDetails() -> impl IntoView {
    let ctrl = use_wizard::<PlaceDto>();

    view! {
        <Textarea
            label="Description"
            rows=6
            value=Signal::derive(move || ctrl.with_draft(|d| d.description.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("description", |d| d.description = v))
            error=Signal::derive(move || ctrl.error("description"))
        />
    }
}

#[component]
fn StepFacilities() -> impl IntoView {
    let ctrl = use_wizard::<PlaceDto>();
    let (facilities, set_facilities) = signal(Vec::<Facility>::new());
    let (load_error, set_load_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match model::fetch_facilities().await {
                Ok(list) => {
                    let _ = set_facilities.try_set(list);
                }
                Err(e) => {
                    let _ = set_load_error.try_set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="wizard__picker">
            <label class="form__label">"Facilities"</label>
            {move || load_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            <div class="wizard__picker-list">
                {move || facilities.get().into_iter().map(|facility| {
                    let id = facility.id.clone();
                    let id_for_toggle = id.clone();
                    let checked = move || ctrl.with_draft(|d| d.facility_ids.contains(&id));
                    view! {
                        <label class="wizard__picker-item">
                            <input
                                type="checkbox"
                                checked=checked
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    let id = id_for_toggle.clone();
                                    ctrl.set_field("facilityIds", move |d| {
                                        if on {
                                            if !d.facility_ids.contains(&id) {
                                                d.facility_ids.push(id);
                                            }
                                        } else {
                                            d.facility_ids.retain(|f| f != &id);
                                        }
                                    });
                                }
                            />
                            <span>{facility.name.clone()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
