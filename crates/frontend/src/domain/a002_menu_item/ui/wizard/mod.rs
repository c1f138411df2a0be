use contracts::domain::a002_menu_item::aggregate::{MenuItem, MenuItemDto};
use leptos::prelude::*;

use crate::domain::a002_menu_item::model;
use crate::domain::a002_menu_item::rules::{self, flush_tag};
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::components::{FilePicker, Stepper};
use crate::shared::data::use_query_cache;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::shared::upload::{self, UploadPurpose};
use crate::shared::wizard::{use_wizard, SubmitCtx, WizardController};

#[component]
pub fn MenuItemWizard(
    existing: Option<MenuItem>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctrl = WizardController::new(rules::menu_item_schema(), rules::CACHE_KEY);
    ctrl.provide();
    let is_edit = existing.is_some();
    if let Some(item) = existing {
        ctrl.load(MenuItemDto::from(item));
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
            "Menu item saved",
            move |mut record: MenuItemDto| async move {
                let files = pending_images.get_untracked();
                match upload::upload_files(UploadPurpose::ProductMedia, &files).await {
                    Ok(mut urls) => {
                        if record.image_url.is_none() {
                            record.image_url = urls.drain(..).next();
                        }
                        (record, None)
                    }
                    Err(e) => (
                        record,
                        Some(format!("Item saved, but the image failed to upload: {}", e)),
                    ),
                }
            },
            |record: MenuItemDto| async move { model::save(&record).await },
            on_saved,
        );
    };

    let cancel = move |_| on_cancel.run(());

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">
                    {if is_edit { "Edit menu item" } else { "New menu item" }}
                </h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <Stepper labels=ctrl.step_labels() current=Signal::derive(move || ctrl.step()) />

            <div class="wizard__body">
                {move || match ctrl.step() {
                    1 => view! { <StepItem /> }.into_any(),
                    2 => view! { <StepMedia pending_images=pending_images /> }.into_any(),
                    _ => view! { <StepPricing /> }.into_any(),
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
                        {move || if ctrl.submitting() { "Saving..." } else { "Save item" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StepItem() -> impl IntoView {
    let ctrl = use_wizard::<MenuItemDto>();

    view! {
        <Input
            label="Name"
            value=Signal::derive(move || ctrl.with_draft(|d| d.name.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("name", |d| d.name = v))
            error=Signal::derive(move || ctrl.error("name"))
        />
        <Textarea
            label="Description"
            value=Signal::derive(move || ctrl.with_draft(|d| d.description.clone()))
            on_input=Callback::new(move |v: String| ctrl.set_field("description", |d| d.description = v))
            error=Signal::derive(move || ctrl.error("description"))
        />
        <Select
            label="Category"
            value=Signal::derive(move || ctrl.with_draft(|d| d.category.clone()))
            on_change=Callback::new(move |v: String| ctrl.set_field("category", |d| d.category = v))
            options=Signal::derive(|| vec![
                ("mains".to_string(), "Mains".to_string()),
                ("starters".to_string(), "Starters".to_string()),
                ("drinks".to_string(), "Drinks".to_string()),
                ("desserts".to_string(), "Desserts".to_string()),
            ])
            error=Signal::derive(move || ctrl.error("category"))
        />
        <Checkbox
            label="Available for ordering"
            checked=Signal::derive(move || ctrl.with_draft(|d| d.available))
            on_change=Callback::new(move |on: bool| ctrl.set_field("available", move |d| d.available = on))
        />
    }
}

#[component]
fn StepMedia(pending_images: RwSignal<Vec<web_sys::File>, LocalStorage>) -> impl IntoView {
    let ctrl = use_wizard::<MenuItemDto>();

    view! {
        <FilePicker
            label="Item photo"
            accept="image/*"
            files=pending_images
        />
        {move || ctrl.with_draft(|d| d.image_url.clone()).map(|url| view! {
            <div class="wizard__media-current">
                <span class="wizard__media-url">{url}</span>
                <button
                    class="button button--ghost"
                    on:click=move |_| ctrl.set_field("imageUrl", |d| d.image_url = None)
                >
                    "Replace"
                </button>
            </div>
        })}
    }
}

#[component]
fn StepPricing() -> impl IntoView {
    let ctrl = use_wizard::<MenuItemDto>();

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
        <TagInput />
    }
}

/// Staged tag input: the draft only joins the record on the add action or
/// when the submit coordinator force-flushes it.
#[component]
fn TagInput() -> impl IntoView {
    let ctrl = use_wizard::<MenuItemDto>();
    let (draft, set_draft) = signal(String::new());

    let flush_id = ctrl.register_flush(move |dto| {
        let staged = draft.try_get_untracked().unwrap_or_default();
        flush_tag(&staged, dto);
    });
    on_cleanup(move || ctrl.unregister_flush(flush_id));

    let add_tag = move || {
        let staged = draft.get_untracked();
        ctrl.set_field("tags", move |d| flush_tag(&staged, d));
        set_draft.set(String::new());
    };

    view! {
        <div class="form__group">
            <label class="form__label">"Tags"</label>
            <div class="tag-input">
                <input
                    type="text"
                    class="form__input"
                    placeholder="e.g. spicy"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_tag();
                        }
                    }
                />
                <button class="button button--secondary" on:click=move |_| add_tag()>
                    {icon("plus")}
                    "Add"
                </button>
            </div>
            <div class="tag-input__tags">
                {move || ctrl.with_draft(|d| d.tags.clone()).into_iter().map(|tag| {
                    let tag_for_remove = tag.clone();
                    view! {
                        <span class="badge badge--primary tag-input__tag">
                            {tag.clone()}
                            <button
                                class="tag-input__remove"
                                on:click=move |_| {
                                    let tag = tag_for_remove.clone();
                                    ctrl.set_field("tags", move |d| d.tags.retain(|t| t != &tag));
                                }
                            >
                                {icon("x")}
                            </button>
                        </span>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
