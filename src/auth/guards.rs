//! Route guard hooks for protected and public-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Side-effect-only hooks: they render nothing and issue a client-side
//! navigation once mounted if the session does not match the page's
//! requirement. Guards read the credential store directly rather than the
//! auth context snapshot; both derive from the same storage so they converge,
//! but a single render pass may transiently observe them disagreeing.
//!
//! There is no redirect-loop protection beyond the convention that the
//! target page does not install the same guard.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::store::CredentialStore;

/// Default target for unauthenticated visitors to protected pages.
pub const LOGIN_ROUTE: &str = "/login";
/// Default target for authenticated visitors to public-only pages.
pub const HOME_ROUTE: &str = "/";

/// Redirect to the login page when no session is present.
pub fn use_require_auth() {
    use_require_auth_to(LOGIN_ROUTE);
}

/// [`use_require_auth`] with an explicit redirect target.
pub fn use_require_auth_to(redirect_to: &'static str) {
    let store = CredentialStore::browser();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = protected_redirect(&store, redirect_to) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Redirect home when a session is already present. For public-only pages
/// such as login.
pub fn use_redirect_if_authenticated() {
    use_redirect_if_authenticated_to(HOME_ROUTE);
}

/// [`use_redirect_if_authenticated`] with an explicit redirect target.
pub fn use_redirect_if_authenticated_to(redirect_to: &'static str) {
    let store = CredentialStore::browser();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = public_only_redirect(&store, redirect_to) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Where a protected page should send the visitor, if anywhere.
fn protected_redirect(store: &CredentialStore, redirect_to: &'static str) -> Option<&'static str> {
    (!store.is_authenticated()).then_some(redirect_to)
}

/// Where a public-only page should send the visitor, if anywhere.
fn public_only_redirect(store: &CredentialStore, redirect_to: &'static str) -> Option<&'static str> {
    store.is_authenticated().then_some(redirect_to)
}
