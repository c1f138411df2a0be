use leptos::prelude::*;

use super::shell::Section;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Sidebar(active: RwSignal<Section>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let business_name = move || {
        auth_state
            .get()
            .user_info
            .and_then(|u| u.business_name)
            .unwrap_or_else(|| "My business".to_string())
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__brand-title">"Merchant Suite"</span>
                <span class="sidebar__brand-sub">{business_name}</span>
            </div>
            <nav class="sidebar__nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let is_active = move || active.get() == section;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| active.set(section)
                            >
                                {icon(section.icon_name())}
                                <span>{section.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <button class="sidebar__item" on:click=move |_| do_logout(set_auth_state)>
                    {icon("logout")}
                    <span>"Sign out"</span>
                </button>
            </div>
        </aside>
    }
}
