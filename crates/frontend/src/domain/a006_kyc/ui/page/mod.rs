use contracts::domain::a006_kyc::aggregate::{KycMerchant, KycStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::wizard::KycWizard;
use crate::domain::a006_kyc::model;
use crate::domain::a006_kyc::rules::CACHE_KEY;
use crate::shared::components::ui::Badge;
use crate::shared::components::EmptyState;
use crate::shared::data::use_query_cache;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;

fn status_badge(status: KycStatus) -> &'static str {
    match status {
        KycStatus::Verified => "success",
        KycStatus::Pending => "warning",
        KycStatus::Rejected => "error",
    }
}

/// Compliance onboarding: shows the current submission's server-owned
/// verification state, or launches the KYC wizard when nothing exists yet.
#[component]
pub fn CompliancePage() -> impl IntoView {
    let (current, set_current) = signal(None::<KycMerchant>);
    let (is_loaded, set_is_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let cache = use_query_cache();
    let modal_stack = use_modal_stack();

    let fetch = move || {
        spawn_local(async move {
            match model::fetch_current().await {
                Ok(kyc) => {
                    let _ = set_current.try_set(kyc);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_is_loaded.try_set(true);
        });
    };

    Effect::new(move |_| {
        cache.epoch(CACHE_KEY);
        fetch();
    });

    let open_wizard = move |existing: Option<KycMerchant>| {
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
                    <KycWizard existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Compliance"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh status"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || {
                if !is_loaded.get() {
                    return view! { <p class="page__loading">"Loading..."</p> }.into_any();
                }
                match current.get() {
                    None => view! {
                        <EmptyState
                            title="KYC not submitted"
                            hint="Verify your business to unlock payouts and deals"
                            action=view! {
                                <button class="button button--primary" on:click=move |_| open_wizard(None)>
                                    {icon("plus")}
                                    "Start verification"
                                </button>
                            }.into_any()
                        />
                    }.into_any(),
                    Some(kyc) => {
                        let can_resubmit = kyc.status != KycStatus::Verified;
                        let resubmit = can_resubmit.then(|| {
                            let kyc_for_edit = kyc.clone();
                            view! {
                                <div class="kyc-card__actions">
                                    <button
                                        class="button button--primary"
                                        on:click=move |_| open_wizard(Some(kyc_for_edit.clone()))
                                    >
                                        "Update submission"
                                    </button>
                                </div>
                            }
                        });
                        view! {
                            <div class="kyc-card">
                                <div class="kyc-card__row">
                                    <span class="kyc-card__label">"Status"</span>
                                    <Badge variant=status_badge(kyc.status)>{kyc.status.label()}</Badge>
                                </div>
                                <div class="kyc-card__row">
                                    <span class="kyc-card__label">"Business"</span>
                                    <span>{kyc.business_name.clone()}</span>
                                </div>
                                <div class="kyc-card__row">
                                    <span class="kyc-card__label">"Category"</span>
                                    <span>{kyc.business_category.clone()}</span>
                                </div>
                                <div class="kyc-card__row">
                                    <span class="kyc-card__label">"RC number"</span>
                                    <span>{kyc.rc_number.clone()}</span>
                                </div>
                                <div class="kyc-card__row">
                                    <span class="kyc-card__label">"Documents"</span>
                                    <span>{format!("{} uploaded", kyc.document_urls.len())}</span>
                                </div>
                                {resubmit}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
