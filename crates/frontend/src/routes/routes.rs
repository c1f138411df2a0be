use leptos::prelude::*;

use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::{AuthScreen, LoginPage};
use crate::system::pages::register::RegisterPage;
use crate::system::pages::verify_email::VerifyEmailPage;

#[component]
fn AuthScreens() -> impl IntoView {
    let screen = RwSignal::new(AuthScreen::Login);
    // Email carried from registration into the verification screen
    let pending_email = RwSignal::new(String::new());

    view! {
        {move || match screen.get() {
            AuthScreen::Login => view! { <LoginPage screen=screen /> }.into_any(),
            AuthScreen::Register => {
                view! { <RegisterPage screen=screen pending_email=pending_email /> }.into_any()
            }
            AuthScreen::VerifyEmail => {
                view! { <VerifyEmailPage screen=screen pending_email=pending_email /> }.into_any()
            }
        }}
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <AuthScreens /> }
        >
            <Shell />
        </Show>
    }
}
