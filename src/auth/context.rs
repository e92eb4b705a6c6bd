//! Reactive auth context: one session snapshot shared by the whole UI tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` is mounted once at the application root. It owns the
//! credential store and a reactive [`AuthState`] snapshot, refreshed
//! synchronously at mount and again on every explicit `refresh()`/`logout()`
//! and on cross-tab `storage` events touching the session keys. Login or
//! logout in a sibling tab therefore shows up here without a reload, as soon
//! as the browser delivers the event.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::auth::store::CredentialStore;
#[cfg(any(test, feature = "hydrate"))]
use crate::auth::store::{ACCESS_TOKEN_KEY, USER_KEY};
use crate::state::auth::AuthState;

/// Shared auth handle provided to the UI tree.
#[derive(Clone)]
pub struct AuthContext {
    store: CredentialStore,
    /// Reactive session snapshot; components track it with `state.get()`.
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    /// New context in the initializing (loading) state. Call [`refresh`]
    /// to reach the ready state.
    ///
    /// [`refresh`]: AuthContext::refresh
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store,
            state: RwSignal::new(AuthState::initializing()),
        }
    }

    /// Current snapshot, read without reactive tracking.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Recompute the snapshot from the credential store.
    pub fn refresh(&self) {
        self.state.set(AuthState::from_store(&self.store));
    }

    /// Clear the persisted session, then refresh to the signed-out state.
    pub fn logout(&self) {
        self.store.clear_session();
        self.refresh();
    }

    /// The credential store this context refreshes from.
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}

/// The auth context for the current UI tree.
///
/// # Panics
///
/// Panics when called outside a mounted [`AuthProvider`]. That is a wiring
/// mistake, not a runtime condition, so it fails immediately instead of
/// returning a signed-out default.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Root provider: owns the auth context and the cross-tab storage listener.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = AuthContext::new(CredentialStore::browser());
    ctx.refresh();
    provide_context(ctx.clone());

    #[cfg(feature = "hydrate")]
    {
        attach_storage_listener(&ctx);
        on_cleanup(detach_storage_listener);
    }

    children()
}

/// Whether a `storage` event concerns the session. A `None` key means the
/// whole store was cleared, which also invalidates the session.
#[cfg(any(test, feature = "hydrate"))]
fn is_session_key(key: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == ACCESS_TOKEN_KEY || key == USER_KEY,
    }
}

// The provider is mounted once per app, so a single slot holds the live
// listener closure between attach and detach.
#[cfg(feature = "hydrate")]
thread_local! {
    static STORAGE_LISTENER: std::cell::RefCell<
        Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>>,
    > = const { std::cell::RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn attach_storage_listener(ctx: &AuthContext) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let ctx = ctx.clone();
    let closure =
        Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if is_session_key(ev.key().as_deref()) {
                log::debug!("session storage changed in another tab; refreshing auth");
                ctx.refresh();
            }
        });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    }
    STORAGE_LISTENER.with(|slot| *slot.borrow_mut() = Some(closure));
}

#[cfg(feature = "hydrate")]
fn detach_storage_listener() {
    use wasm_bindgen::JsCast as _;

    STORAGE_LISTENER.with(|slot| {
        if let Some(closure) = slot.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
            }
        }
    });
}
