use leptos::prelude::*;

/// Textarea component with label and inline validation error support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation error to render under the field (reactive)
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Number of visible rows
    #[prop(optional)]
    rows: Option<u32>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=move || {
                    if has_error() {
                        "form__textarea form__textarea--invalid"
                    } else {
                        "form__textarea"
                    }
                }
                rows=rows.unwrap_or(4)
                prop:value=move || value.get()
                placeholder=textarea_placeholder
                disabled=disabled
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! {
                <span class="form__error">{e}</span>
            })}
        </div>
    }
}
