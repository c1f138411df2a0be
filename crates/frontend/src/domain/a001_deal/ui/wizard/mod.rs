use contracts::domain::a001_deal::aggregate::{Deal, DealDto};
use contracts::domain::a003_inventory::aggregate::InventoryProduct;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_deal::model;
use crate::domain::a001_deal::rules;
use crate::domain::a003_inventory::model as inventory_model;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::{FilePicker, Stepper};
use crate::shared::data::use_query_cache;
use crate::shared::toast::use_toast;
use crate::shared::upload::{self, UploadPurpose};
use crate::shared::wizard::{use_wizard, SubmitCtx, WizardController};

#[component]
pub fn DealWizard(
    existing: Option<Deal>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctrl = WizardController::new(rules::deal_schema(), rules::CACHE_KEY);
    ctrl.provide();
    let is_edit = existing.is_some();
    if let Some(deal) = existing {
        ctrl.load(DealDto::from(deal));
    }

    // Files are transient UI state, merged into the record during upload
    let pending_images: RwSignal<Vec<web_sys::File>, LocalStorage> =
        RwSignal::new_local(Vec::new());

    let ctx = SubmitCtx {
        cache: use_query_cache(),
        toast: use_toast(),
    };

    let handle_submit = move |_| {
        ctrl.submit(
            ctx,
            "Deal saved",
            move |mut record: DealDto| async move {
                let files = pending_images.get_untracked();
                match upload::upload_files(UploadPurpose::ProductMedia, &files).await {
                    Ok(urls) => {
                        record.image_urls.extend(urls);
                        (record, None)
                    }
                    Err(e) => {
                        // Soft failure: the deal is still persisted
                        (record, Some(format!("Deal saved, but images failed to upload: {}", e)))
                    }
                }
            },
            |record: DealDto| async move { model::save(&record).await },
            on_saved,
        );
    };

    let cancel = move |_| on_cancel.run(());

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">
                    {if is_edit { "Edit deal" } else { "New deal" }}
                </h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <Stepper labels=ctrl.step_labels() current=Signal::derive(move || ctrl.step()) />

            <div class="wizard__body">
                {move || match ctrl.step() {
                    1 => view! { <StepBasics /> }.into_any(),
                    2 => view! { <StepSchedule /> }.into_any(),
                    3 => view! { <StepProducts /> }.into_any(),
                    _ => view! { <StepMedia pending_images=pending_images /> }.into_any(),
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
                        {move || if ctrl.submitting() { "Saving..." } else { "Save deal" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepBasics() -> impl IntoView {
    let ctrl = use_wizard::<DealDto>();

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
        <Select
            label="Deal type"
            value=Signal::derive(move || ctrl.with_draft(|d| d.deal_type.clone()))
            on_change=Callback::new(move |v: String| ctrl.set_field("dealType", |d| d.deal_type = v))
            options=Signal::derive(|| vec![
                ("discount".to_string(), "Percentage discount".to_string()),
                ("bogo".to_string(), "Buy one get one".to_string()),
                ("bundle".to_string(), "Bundle price".to_string()),
            ])
            error=Signal::derive(move || ctrl.error("dealType"))
        />
    }
}

#[component]
fn StepSchedule() -> impl IntoView {
    let ctrl = use_wizard::<DealDto>();

    view! {
        <Input
            label="Discount percentage"
            input_type="number"
            value=Signal::derive(move || {
                ctrl.with_draft(|d| d.discount_percentage.map(|p| p.to_string()).unwrap_or_default())
            })
            on_input=Callback::new(move |v: String| {
                ctrl.set_field("discountPercentage", |d| d.discount_percentage = v.parse().ok())
            })
            error=Signal::derive(move || ctrl.error("discountPercentage"))
        />
        <Input
            label="Start date"
            input_type="date"
            value=Signal::derive(move || ctrl.with_draft(|d| d.start_date.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("startDate", |d| d.start_date = v))
            error=Signal::derive(move || ctrl.error("startDate"))
        />
        <Input
            label="End date"
            input_type="date"
            value=Signal::derive(move || ctrl.with_draft(|d| d.end_date.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("endDate", |d| d.end_date = v))
            error=Signal::derive(move || ctrl.error("endDate"))
        />
    }
}

#[component]
fn StepProducts() -> impl IntoView {
    let ctrl = use_wizard::<DealDto>();
    let (products, set_products) = signal(Vec::<InventoryProduct>::new());
    let (load_error, set_load_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match inventory_model::fetch_page("?page=1").await {
                Ok(page) => {
                    let _ = set_products.try_set(page.data);
                }
                Err(e) => {
                    let _ = set_load_error.try_set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="wizard__picker">
            <label class="form__label">"Products in this deal"</label>
            {move || load_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            <div class="wizard__picker-list">
                {move || products.get().into_iter().map(|product| {
                    let id = product.id.clone();
                    let id_for_toggle = id.clone();
                    let checked = move || ctrl.with_draft(|d| d.product_ids.contains(&id));
                    view! {
                        <label class="wizard__picker-item">
                            <input
                                type="checkbox"
                                checked=checked
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    let id = id_for_toggle.clone();
                                    ctrl.set_field("productIds", move |d| {
                                        if on {
                                            if !d.product_ids.contains(&id) {
                                                d.product_ids.push(id);
                                            }
                                        } else {
                                            d.product_ids.retain(|p| p != &id);
                                        }
                                    });
                                }
                            />
                            <span>{product.name.clone()}</span>
                            <span class="wizard__picker-sku">{product.sku.clone()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
            {move || ctrl.error("productIds").map(|e| view! {
                <span class="form__error">{e}</span>
            })}
        </div>
    }
}

#[component]
fn StepMedia(pending_images: RwSignal<Vec<web_sys::File>, LocalStorage>) -> impl IntoView {
    let ctrl = use_wizard::<DealDto>();
    let toast = use_toast();

    let remove_url = move |url: String| {
        spawn_local(async move {
            match upload::delete_media(UploadPurpose::ProductMedia, &[url.clone()]).await {
                Ok(()) => {
                    ctrl.set_field("imageUrls", |d| d.image_urls.retain(|u| u != &url));
                }
                Err(e) => toast.error(format!("Could not remove image: {}", e)),
            }
        });
    };

    view! {
        <FilePicker
            label="Deal images"
            accept="image/*"
            multiple=true
            files=pending_images
        />
        {move || {
            let urls = ctrl.with_draft(|d| d.image_urls.clone());
            if urls.is_empty() {
                view! { <></> }.into_any()
            } else {
                view! {
                    <ul class="wizard__media-list">
                        {urls.into_iter().map(|url| {
                            let url_for_remove = url.clone();
                            view! {
                                <li>
                                    <span class="wizard__media-url">{url.clone()}</span>
                                    <button
                                        class="button button--ghost"
                                        on:click=move |_| remove_url(url_for_remove.clone())
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any()
            }
        }}
    }
}
