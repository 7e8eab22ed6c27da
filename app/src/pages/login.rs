//! Login screen with sign-in/sign-up tabs and a guest path.
//!
//! Credentials are collected into local state and handed to the session
//! unverified — there is no authentication backend in this prototype.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let sign_up = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = if sign_up.get() {
            validate_sign_up(&name.get(), &email.get(), &password.get())
        } else {
            validate_sign_in(&email.get(), &password.get())
        };
        match result {
            Ok(account_email) => session.update(|s| s.sign_in(account_email)),
            Err(message) => info.set(message.to_owned()),
        }
    };

    let on_guest = move |_| session.update(|s| s.sign_in_guest());

    view! {
        <div class="login-page">
            <div class="login-page__branding">
                <span class="login-page__badge">"AI-Powered OCR Technology"</span>
                <h1 class="login-page__headline">"Welcome to CogniScan AI"</h1>
                <p class="login-page__tagline">
                    "Transform handwritten notes, receipts, and documents into intelligent, searchable data with cutting-edge AI."
                </p>
                <div class="login-page__features">
                    <div class="feature-card">
                        <h3>"Smart OCR"</h3>
                        <p>"Extract text from any document with 99% accuracy"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Real-time AR"</h3>
                        <p>"Translate signs instantly with your camera"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"AI Learning"</h3>
                        <p>"Generate flashcards from your notes automatically"</p>
                    </div>
                </div>
                <div class="login-page__stats">
                    <div class="login-page__stat">
                        <span class="login-page__stat-value">"99%"</span>
                        <span class="login-page__stat-label">"Accuracy Rate"</span>
                    </div>
                    <div class="login-page__stat">
                        <span class="login-page__stat-value">"50+"</span>
                        <span class="login-page__stat-label">"Languages"</span>
                    </div>
                    <div class="login-page__stat">
                        <span class="login-page__stat-value">"24/7"</span>
                        <span class="login-page__stat-label">"Available"</span>
                    </div>
                </div>
            </div>

            <div class="login-card">
                <div class="login-card__logo">"CS"</div>
                <h2 class="login-card__heading">
                    {move || if sign_up.get() { "Create Account" } else { "Welcome Back" }}
                </h2>

                <div class="login-card__tabs">
                    <button
                        class="login-card__tab"
                        class:login-card__tab--active=move || !sign_up.get()
                        on:click=move |_| sign_up.set(false)
                    >
                        "Sign In"
                    </button>
                    <button
                        class="login-card__tab"
                        class:login-card__tab--active=move || sign_up.get()
                        on:click=move |_| sign_up.set(true)
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || sign_up.get()>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        {move || if sign_up.get() { "Create Account" } else { "Sign In" }}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>

                <div class="login-divider"></div>
                <p class="login-card__subtitle">"or continue with"</p>
                <button class="login-button login-button--guest" on:click=on_guest>
                    "Continue as Guest"
                </button>

                <Show when=move || sign_up.get()>
                    <p class="login-card__terms">
                        "By signing up, you agree to our Terms of Service and Privacy Policy"
                    </p>
                </Show>
            </div>
        </div>
    }
}

/// No verification happens beyond requiring both fields; the email becomes
/// the session identity.
fn validate_sign_in(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(email.to_owned())
}

fn validate_sign_up(name: &str, email: &str, password: &str) -> Result<String, &'static str> {
    if name.trim().is_empty() {
        return Err("Enter your full name first.");
    }
    validate_sign_in(email, password).map_err(|_| "Enter both email and password.")
}
