//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! An ephemeral view recomputed from the credential store on every refresh.
//! Route guards and user-aware components read it (via the auth context) to
//! coordinate login redirects and identity-dependent rendering. It is never
//! persisted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::store::CredentialStore;
use crate::net::types::{Role, User};

/// Snapshot of the persisted session at the last refresh.
///
/// `authenticated` tracks token presence and `user` the stored record; the
/// two agree whenever the store's pair invariant holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// The pre-refresh state the provider starts in at mount.
    pub fn initializing() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }

    /// Recompute the snapshot from the credential store.
    pub fn from_store(store: &CredentialStore) -> Self {
        Self {
            user: store.user(),
            authenticated: store.is_authenticated(),
            loading: false,
        }
    }

    /// True when the snapshot user carries the admin role (advisory only;
    /// the server enforces authorization).
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == Role::Admin)
    }
}
