use leptos::prelude::*;

/// Empty-state affordance for list views: a zero-row page is a designed
/// outcome, not an error.
#[component]
pub fn EmptyState(
    /// Headline, e.g. "No deals yet"
    #[prop(into)]
    title: String,
    /// Supporting hint, e.g. "Create your first deal to get started"
    #[prop(optional, into)]
    hint: Option<String>,
    /// Optional action slot (usually a create button)
    #[prop(optional)]
    action: Option<AnyView>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__title">{title}</div>
            {hint.map(|h| view! { <div class="empty-state__hint">{h}</div> })}
            {action.map(|a| view! { <div class="empty-state__action">{a}</div> })}
        </div>
    }
}
