use leptos::prelude::*;
use leptos::task::spawn_local;

use super::login::AuthScreen;
use crate::system::auth::api;

#[component]
pub fn VerifyEmailPage(
    screen: RwSignal<AuthScreen>,
    pending_email: RwSignal<String>,
) -> impl IntoView {
    let (code, set_code) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email = pending_email.get();
        let code_val = code.get();
        if code_val.trim().is_empty() {
            set_error_message.set(Some("Enter the code from your inbox".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::verify_email(email, code_val).await {
                Ok(()) => {
                    screen.set(AuthScreen::Login);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Verification failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Merchant Suite"</h1>
                <h2>"Verify your email"</h2>
                <p class="login-hint">
                    {move || format!("We sent a code to {}", pending_email.get())}
                </p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="verify-code">"Verification code"</label>
                        <input
                            type="text"
                            id="verify-code"
                            prop:value=move || code.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            screen.set(AuthScreen::Login);
                        }>
                            "Back to sign in"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
