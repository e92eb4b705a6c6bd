//! Login page: username/password form posting to `POST /api/auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the sole writer into the credential store. On success it
//! persists the token + user pair, refreshes the auth context, and navigates
//! home. All user-visible auth error messaging lives here; the session layer
//! itself only ever reports derived state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;
use crate::auth::guards::use_redirect_if_authenticated;

/// Trim and require both fields before hitting the network.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login page. Public-only: visiting with a live session redirects home.
#[component]
pub fn LoginPage() -> impl IntoView {
    use_redirect_if_authenticated();

    let auth = use_auth();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(resp) => {
                        log::info!("login succeeded for {}", resp.user.username);
                        auth.store().set_session(&resp.access_token, &resp.user);
                        auth.refresh();
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, &auth, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Courtside"</h1>
                <p class="login-card__subtitle">"Sports statistics dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
