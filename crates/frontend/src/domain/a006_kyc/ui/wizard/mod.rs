use contracts::domain::a006_kyc::aggregate::{BusinessCategory, KycMerchant, KycMerchantDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a006_kyc::model;
use crate::domain::a006_kyc::rules;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::{FilePicker, Stepper};
use crate::shared::data::use_query_cache;
use crate::shared::toast::use_toast;
use crate::shared::upload::{self, UploadPurpose};
use crate::shared::wizard::{use_wizard, SubmitCtx, WizardController};

#[component]
pub fn KycWizard(
    existing: Option<KycMerchant>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctrl = WizardController::new(rules::kyc_schema(), rules::CACHE_KEY);
    ctrl.provide();
    let is_edit = existing.is_some();
    if let Some(kyc) = existing {
        ctrl.load(KycMerchantDto::from(kyc));
    }

    let pending_documents: RwSignal<Vec<web_sys::File>, LocalStorage> =
        RwSignal::new_local(Vec::new());

    let ctx = SubmitCtx {
        cache: use_query_cache(),
        toast: use_toast(),
    };

    let handle_submit = move |_| {
        ctrl.submit(
            ctx,
            "KYC submitted for review",
            move |mut record: KycMerchantDto| async move {
                let files = pending_documents.get_untracked();
                match upload::upload_files(UploadPurpose::KycDocuments, &files).await {
                    Ok(urls) => {
                        record.document_urls.extend(urls);
                        (record, None)
                    }
                    Err(e) => (
                        record,
                        Some(format!(
                            "Submission saved, but documents failed to upload: {}",
                            e
                        )),
                    ),
                }
            },
            |record: KycMerchantDto| async move { model::save(&record).await },
            on_saved,
        );
    };

    let cancel = move |_| on_cancel.run(());

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">
                    {if is_edit { "Update KYC submission" } else { "Business verification" }}
                </h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <Stepper labels=ctrl.step_labels() current=Signal::derive(move || ctrl.step()) />

            <div class="wizard__body">
                {move || match ctrl.step() {
                    1 => view! { <StepBusiness /> }.into_any(),
                    2 => view! { <StepIdentity /> }.into_any(),
                    _ => view! {
                        <FilePicker
                            label="Supporting documents"
                            accept="image/*,.pdf"
                            multiple=true
                            files=pending_documents
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
                        {move || if ctrl.submitting() { "Submitting..." } else { "Submit for review" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepBusiness() -> impl IntoView {
    let ctrl = use_wizard::<KycMerchantDto>();
    let (categories, set_categories) = signal(Vec::<BusinessCategory>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match model::fetch_business_categories().await {
                Ok(list) => {
                    let _ = set_categories.try_set(list);
                }
                Err(e) => log::warn!("business categories failed to load: {}", e),
            }
        });
    });

    view! {
        <Input
            label="Registered business name"
            value=Signal::derive(move || ctrl.with_draft(|d| d.business_name.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("businessName", |d| d.business_name = v))
            error=Signal::derive(move || ctrl.error("businessName"))
        />
        <Select
            label="Business category"
            value=Signal::derive(move || ctrl.with_draft(|d| d.business_category.clone()))
            on_change=Callback::new(move |v: String| {
                ctrl.set_field("businessCategory", |d| d.business_category = v)
            })
            options=Signal::derive(move || {
                categories.get().into_iter().map(|c| (c.id, c.name)).collect::<Vec<_>>()
            })
            error=Signal::derive(move || ctrl.error("businessCategory"))
        />
        <Input
            label="RC number"
            value=Signal::derive(move || ctrl.with_draft(|d| d.rc_number.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("rcNumber", |d| d.rc_number = v))
            error=Signal::derive(move || ctrl.error("rcNumber"))
        />
    }
}

#[component]
fn StepIdentity() -> impl IntoView {
    let ctrl = use_wizard::<KycMerchantDto>();

    view! {
        <Input
            label="BVN"
            value=Signal::derive(move || ctrl.with_draft(|d| d.identity_metadata.bvn.clone()))
            on_input=Callback::new(move |v: String| {
                ctrl.set_field("identityMetadata.bvn", |d| d.identity_metadata.bvn = v)
            })
            error=Signal::derive(move || ctrl.error("identityMetadata.bvn"))
        />
        <Select
            label="ID type"
            value=Signal::derive(move || ctrl.with_draft(|d| d.identity_metadata.id_type.clone()))
            on_change=Callback::new(move |v: String| {
                ctrl.set_field("identityMetadata.idType", |d| d.identity_metadata.id_type = v)
            })
            options=Signal::derive(|| vec![
                ("nin".to_string(), "National ID (NIN)".to_string()),
                ("passport".to_string(), "International passport".to_string()),
                ("drivers-license".to_string(), "Driver's license".to_string()),
            ])
            error=Signal::derive(move || ctrl.error("identityMetadata.idType"))
        />
        <Input
            label="ID number"
            value=Signal::derive(move || ctrl.with_draft(|d| d.identity_metadata.id_number.clone()))
            on_input=Callback::new(move |v: String| {
                ctrl.set_field("identityMetadata.idNumber", |d| d.identity_metadata.id_number = v)
            })
            error=Signal::derive(move || ctrl.error("identityMetadata.idNumber"))
        />
    }
}
