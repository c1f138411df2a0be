use contracts::domain::a003_inventory::aggregate::{InventoryProduct, InventoryProductDto};
use leptos::prelude::*;

use crate::domain::a003_inventory::model;
use crate::domain::a003_inventory::rules;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::{FilePicker, Stepper};
use crate::shared::data::use_query_cache;
use crate::shared::toast::use_toast;
use crate::shared::upload::{self, UploadPurpose};
use crate::shared::wizard::{use_wizard, SubmitCtx, WizardController};

#[component]
pub fn ProductWizard(
    existing: Option<InventoryProduct>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctrl = WizardController::new(rules::product_schema(), rules::PRODUCTS_CACHE_KEY);
    ctrl.provide();
    let is_edit = existing.is_some();
    if let Some(product) = existing {
        ctrl.load(InventoryProductDto::from(product));
    }

    let pending_media: RwSignal<Vec<web_sys::File>, LocalStorage> = RwSignal::new_local(Vec::new());

    let ctx = SubmitCtx {
        cache: use_query_cache(),
        toast: use_toast(),
    };

    let handle_submit = move |_| {
        ctrl.submit(
            ctx,
            "Product saved",
            move |mut record: InventoryProductDto| async move {
                let files = pending_media.get_untracked();
                match upload::upload_files(UploadPurpose::ProductMedia, &files).await {
                    Ok(urls) => {
                        record.media_urls.extend(urls);
                        (record, None)
                    }
                    Err(e) => (
                        record,
                        Some(format!("Product saved, but media failed to upload: {}", e)),
                    ),
                }
            },
            |record: InventoryProductDto| async move { model::save(&record).await },
            on_saved,
        );
    };

    let cancel = move |_| on_cancel.run(());

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">
                    {if is_edit { "Edit product" } else { "New product" }}
                </h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <Stepper labels=ctrl.step_labels() current=Signal::derive(move || ctrl.step()) />

            <div class="wizard__body">
                {move || match ctrl.step() {
                    1 => view! { <StepProduct /> }.into_any(),
                    2 => view! { <StepStock /> }.into_any(),
                    _ => view! {
                        <FilePicker
                            label="Product media"
                            accept="image/*"
                            multiple=true
                            files=pending_media
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
                        {move || if ctrl.submitting() { "Saving..." } else { "Save product" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepProduct() -> impl IntoView {
    let ctrl = use_wizard::<InventoryProductDto>();

    view! {
        <Input
            label="Name"
            value=Signal::derive(move || ctrl.with_draft(|d| d.name.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("name", |d| d.name = v))
            error=Signal::derive(move || ctrl.error("name"))
        />
        <Input
            label="SKU"
            value=Signal::derive(move || ctrl.with_draft(|d| d.sku.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("sku", |d| d.sku = v))
            error=Signal::derive(move || ctrl.error("sku"))
        />
        <Select
            label="Category"
            value=Signal::derive(move || ctrl.with_draft(|d| d.category.clone()))
            on_change=Callback::new(move |v: String| ctrl.set_field("category", |d| d.category = v))
            options=Signal::derive(|| vec![
                ("food".to_string(), "Food".to_string()),
                ("drinks".to_string(), "Drinks".to_string()),
                ("supplies".to_string(), "Supplies".to_string()),
                ("other".to_string(), "Other".to_string()),
            ])
            error=Signal::derive(move || ctrl.error("category"))
        />
    }
}

#[component]
fn StepStock() -> impl IntoView {
    let ctrl = use_wizard::<InventoryProductDto>();

    view! {
        <Input
            label="Price"
            input_type="number"
            value=Signal::derive(move || {
                ctrl.with_draft(|d| d.price.map(|p| p.to_string()).unwrap_or_default())
            })
            on_input=Callback::new(move |v: String| {
                ctrl.set_field("price", |d| d.price = v.parse().ok())
            })
            error=Signal::derive(move || ctrl.error("price"))
        />
        <Input
            label="Quantity in stock"
            input_type="number"
            value=Signal::derive(move || {
                ctrl.with_draft(|d| d.quantity.map(|q| q.to_string()).unwrap_or_default())
            })
            on_input=Callback::new(move |v: String| {
                ctrl.set_field("quantity", |d| d.quantity = v.parse().ok())
            })
            error=Signal::derive(move || ctrl.error("quantity"))
        />
    }
}
