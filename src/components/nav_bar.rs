//! Top navigation bar with auth-aware chrome.
//!
//! Shows the section links, the signed-in username (with an advisory admin
//! badge), and the logout button. Logout clears the persisted session and
//! navigates to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_auth;
use crate::auth::guards::LOGIN_ROUTE;

/// Shared page header for the authenticated sections.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let state = auth.state;

    let username = move || {
        state
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let is_admin = move || state.get().is_admin();

    let on_logout = move |_| {
        auth.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Courtside"
            </a>
            <nav class="nav-bar__links">
                <a href="/">"Scores"</a>
                <a href="/players">"Players"</a>
                <a href="/stadiums">"Stadiums"</a>
            </nav>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__self">
                {username}
                <Show when=is_admin>
                    <span class="nav-bar__role-badge">"admin"</span>
                </Show>
            </span>
            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
