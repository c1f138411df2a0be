use crate::shared::icons::icon;
use leptos::prelude::*;

/// Step indicator rendered above every wizard body.
#[component]
pub fn Stepper(
    /// Ordered step labels
    labels: Vec<&'static str>,
    /// Current step (1-based, reactive)
    #[prop(into)]
    current: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="stepper">
            {labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    let step_no = i + 1;
                    let state_class = move || {
                        let active = current.get();
                        if step_no < active {
                            "stepper__step stepper__step--done"
                        } else if step_no == active {
                            "stepper__step stepper__step--active"
                        } else {
                            "stepper__step"
                        }
                    };
                    view! {
                        <div class=state_class>
                            <span class="stepper__bullet">
                                {move || {
                                    if step_no < current.get() {
                                        icon("check")
                                    } else {
                                        view! { <span>{step_no}</span> }.into_any()
                                    }
                                }}
                            </span>
                            <span class="stepper__label">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
