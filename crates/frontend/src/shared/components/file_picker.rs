use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// File input for pending uploads.
///
/// Selected files are transient UI state: they live outside the draft record
/// and only turn into URLs during the submit coordinator's upload phase.
#[component]
pub fn FilePicker(
    /// Field label, e.g. "Deal images"
    #[prop(into)]
    label: String,
    /// Accept attribute, e.g. "image/*"
    #[prop(optional, into)]
    accept: String,
    /// Allow multiple files
    #[prop(optional)]
    multiple: bool,
    /// Currently selected files (reactive, non-Send JS handles)
    files: RwSignal<Vec<web_sys::File>, LocalStorage>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let mut selected = Vec::new();
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    selected.push(file);
                }
            }
        }
        files.set(selected);
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <label class="file-picker">
                {icon("upload")}
                <span>
                    {move || {
                        let count = files.with(|f| f.len());
                        if count == 0 {
                            "Choose files...".to_string()
                        } else {
                            format!("{} file(s) selected", count)
                        }
                    }}
                </span>
                <input
                    type="file"
                    class="file-picker__input"
                    accept=accept
                    multiple=multiple
                    on:change=on_change
                />
            </label>
            {move || {
                let names = files.with(|f| f.iter().map(|file| file.name()).collect::<Vec<_>>());
                if names.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <ul class="file-picker__list">
                            {names.into_iter().map(|n| view! { <li>{n}</li> }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
