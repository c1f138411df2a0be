use contracts::system::users::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::login::AuthScreen;
use crate::shared::validate::{self, FieldErrors, RuleSet};

/// Client-side rules for the registration form. Violations stay local: the
/// request is only issued once this set passes.
pub fn register_rules() -> RuleSet<RegisterRequest> {
    RuleSet::new(vec![
        validate::email("email", "Email", |r: &RegisterRequest| &r.email),
        validate::required("businessName", "Business name", |r: &RegisterRequest| {
            &r.business_name
        }),
        validate::min_len("password", "Password", 8, |r: &RegisterRequest| &r.password),
        validate::matches_field(
            "confirmPassword",
            "Passwords do not match",
            |r: &RegisterRequest| &r.confirm_password,
            |r: &RegisterRequest| &r.password,
        ),
    ])
}

#[component]
pub fn RegisterPage(screen: RwSignal<AuthScreen>, pending_email: RwSignal<String>) -> impl IntoView {
    let form = RwSignal::new(RegisterRequest::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (server_error, set_server_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let field_error = move |field: &'static str| errors.with(|e| e.get(field).cloned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = form.get();
        let violations = register_rules().validate_all(&request);
        if !violations.is_empty() {
            errors.set(violations);
            return;
        }
        errors.set(FieldErrors::new());
        set_is_loading.set(true);
        set_server_error.set(None);

        spawn_local(async move {
            match crate::system::auth::api::register(&request).await {
                Ok(user) => {
                    pending_email.set(user.email);
                    screen.set(AuthScreen::VerifyEmail);
                }
                Err(e) => {
                    set_server_error.set(Some(format!("Registration failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    let set_field = move |field: &'static str, mutate: fn(&mut RegisterRequest, String), value: String| {
        form.update(|f| mutate(f, value));
        errors.update(|e| {
            e.remove(field);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Merchant Suite"</h1>
                <h2>"Create your account"</h2>

                <Show when=move || server_error.get().is_some()>
                    <div class="error-message">
                        {move || server_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="reg-email">"Email"</label>
                        <input
                            type="email"
                            id="reg-email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| set_field("email", |f, v| f.email = v, event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || field_error("email").map(|e| view! { <span class="form__error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="reg-business">"Business name"</label>
                        <input
                            type="text"
                            id="reg-business"
                            prop:value=move || form.with(|f| f.business_name.clone())
                            on:input=move |ev| set_field("businessName", |f, v| f.business_name = v, event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || field_error("businessName").map(|e| view! { <span class="form__error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="reg-password">"Password"</label>
                        <input
                            type="password"
                            id="reg-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| set_field("password", |f, v| f.password = v, event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || field_error("password").map(|e| view! { <span class="form__error">{e}</span> })}
                    </div>

                    <div class="form-group">
                        <label for="reg-confirm">"Confirm password"</label>
                        <input
                            type="password"
                            id="reg-confirm"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| set_field("confirmPassword", |f, v| f.confirm_password = v, event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || field_error("confirmPassword").map(|e| view! { <span class="form__error">{e}</span> })}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating..." } else { "Create account" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Already registered? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            screen.set(AuthScreen::Login);
                        }>
                            "Sign in"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "ada@suya.ng".into(),
            password: "abcdefgh".into(),
            confirm_password: "abcdefgh".into(),
            business_name: "Suya Spot".into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(register_rules().validate_all(&request()).is_empty());
    }

    #[test]
    fn mismatched_confirmation_fails_on_confirm_field() {
        let mut r = request();
        r.confirm_password = "abcdefgi".into();
        let errors = register_rules().validate_all(&r);
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Passwords do not match")
        );
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn short_password_fails() {
        let mut r = request();
        r.password = "abc".into();
        r.confirm_password = "abc".into();
        let errors = register_rules().validate_all(&r);
        assert!(errors.contains_key("password"));
    }
}
