use contracts::domain::a003_inventory::aggregate::{Catalog, CatalogCategory, CatalogDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_inventory::model;
use crate::domain::a003_inventory::rules::{validate_catalog, CATALOGS_CACHE_KEY};
use crate::shared::data::{use_query_cache, QueryCache};
use crate::shared::icons::icon;
use crate::shared::toast::{use_toast, ToastService};
use crate::shared::validate::FieldErrors;

/// ViewModel for the catalog editor form (a single-screen editor, not a
/// wizard: catalogs are one nested structure edited in place).
#[derive(Clone, Copy)]
pub struct CatalogEditorViewModel {
    pub form: RwSignal<CatalogDto>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
}

impl CatalogEditorViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CatalogDto::default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.with(|e| e.get(field).cloned())
    }

    /// Save the form; violations (indexed by `categories.N.*` paths) abort
    /// locally and never issue a request.
    pub fn save_command(&self, cache: QueryCache, toast: ToastService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        let violations = validate_catalog(&current);
        if !violations.is_empty() {
            self.errors.set(violations);
            return;
        }
        self.errors.set(FieldErrors::new());
        self.saving.set(true);

        let vm = *self;
        spawn_local(async move {
            match model::save_catalog(&current).await {
                Ok(_id) => {
                    cache.invalidate(CATALOGS_CACHE_KEY);
                    toast.success("Catalog saved");
                    let _ = vm.saving.try_set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    let _ = vm.saving.try_set(false);
                    toast.error(format!("Could not save catalog: {}", e));
                }
            }
        });
    }
}

#[component]
pub fn CatalogEditor(
    existing: Option<Catalog>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CatalogEditorViewModel::new();
    let is_edit = existing.is_some();
    if let Some(catalog) = existing {
        vm.form.set(CatalogDto::from(catalog));
    }

    let cache = use_query_cache();
    let toast = use_toast();

    let handle_save = move |_| {
        vm.save_command(cache, toast, on_saved);
    };

    let cancel = move |_| on_cancel.run(());

    let add_category = move |_| {
        vm.form.update(|f| f.categories.push(CatalogCategory::default()));
        vm.errors.update(|e| {
            e.remove("categories");
        });
    };

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <h2 class="wizard__title">
                    {if is_edit { "Edit catalog" } else { "New catalog" }}
                </h2>
                <button class="button button--ghost" on:click=cancel>"Cancel"</button>
            </div>

            <div class="wizard__body">
                <div class="form__group">
                    <label class="form__label">"Catalog name"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            vm.form.update(|f| f.name = v);
                            vm.errors.update(|e| { e.remove("name"); });
                        }
                    />
                    {move || vm.error("name").map(|e| view! { <span class="form__error">{e}</span> })}
                </div>

                <div class="form__group">
                    <div class="form__group-header">
                        <label class="form__label">"Categories"</label>
                        <button class="button button--secondary" on:click=add_category>
                            {icon("plus")}
                            "Add category"
                        </button>
                    </div>
                    {move || vm.error("categories").map(|e| view! { <span class="form__error">{e}</span> })}

                    {move || {
                        let count = vm.form.with(|f| f.categories.len());
                        (0..count).map(|index| view! {
                            <CategoryRow vm=vm index=index />
                        }).collect_view()
                    }}
                </div>
            </div>

            <div class="wizard__footer">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=handle_save
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save catalog" }}
                </button>
            </div>
        </div>
    }
}

/// One nested category row; its violations surface under the indexed paths
/// `categories.{index}.name` and `categories.{index}.tags`.
#[component]
fn CategoryRow(vm: CatalogEditorViewModel, index: usize) -> impl IntoView {
    let (tag_draft, set_tag_draft) = signal(String::new());

    let name_path = format!("categories.{}.name", index);
    let tags_path = format!("categories.{}.tags", index);
    let name_path_for_error = name_path.clone();
    let tags_path_for_error = tags_path.clone();

    let add_tag = move || {
        let tag = tag_draft.get_untracked().trim().to_string();
        if tag.is_empty() {
            return;
        }
        vm.form.update(|f| {
            if let Some(category) = f.categories.get_mut(index) {
                if !category.tags.contains(&tag) {
                    category.tags.push(tag);
                }
            }
        });
        let path = format!("categories.{}.tags", index);
        vm.errors.update(|e| {
            e.remove(&path);
        });
        set_tag_draft.set(String::new());
    };

    view! {
        <div class="catalog-category">
            <div class="catalog-category__row">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Category name"
                    prop:value=move || {
                        vm.form.with(|f| {
                            f.categories.get(index).map(|c| c.name.clone()).unwrap_or_default()
                        })
                    }
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        vm.form.update(|f| {
                            if let Some(category) = f.categories.get_mut(index) {
                                category.name = v;
                            }
                        });
                        let path = format!("categories.{}.name", index);
                        vm.errors.update(|e| { e.remove(&path); });
                    }
                />
                <button
                    class="button button--ghost"
                    title="Remove category"
                    on:click=move |_| {
                        vm.form.update(|f| {
                            if index < f.categories.len() {
                                f.categories.remove(index);
                            }
                        });
                        vm.errors.set(FieldErrors::new());
                    }
                >
                    {icon("delete")}
                </button>
            </div>
            {move || vm.error(&name_path_for_error).map(|e| view! { <span class="form__error">{e}</span> })}

            <div class="tag-input">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Add tag"
                    prop:value=move || tag_draft.get()
                    on:input=move |ev| set_tag_draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add_tag();
                        }
                    }
                />
                <button class="button button--secondary" on:click=move |_| add_tag()>
                    "Add"
                </button>
            </div>
            <div class="tag-input__tags">
                {move || {
                    vm.form.with(|f| {
                        f.categories.get(index).map(|c| c.tags.clone()).unwrap_or_default()
                    }).into_iter().map(|tag| {
                        let tag_for_remove = tag.clone();
                        view! {
                            <span class="badge badge--primary tag-input__tag">
                                {tag.clone()}
                                <button
                                    class="tag-input__remove"
                                    on:click=move |_| {
                                        let tag = tag_for_remove.clone();
                                        vm.form.update(|f| {
                                            if let Some(category) = f.categories.get_mut(index) {
                                                category.tags.retain(|t| t != &tag);
                                            }
                                        });
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }).collect_view()
                }}
            </div>
            {move || vm.error(&tags_path_for_error).map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
