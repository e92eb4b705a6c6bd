//! Credential store: the session token and user record in browser storage.
//!
//! DESIGN
//! ======
//! The store is a value over an injected `SessionStorage` backend instead of
//! free functions over `window.localStorage`, so tests (and any future
//! non-browser host) can run against an in-memory backend. Every accessor
//! re-reads storage on each call; there is no in-memory cache, which keeps
//! sibling tabs observing fresh state at the cost of repeated (cheap, O(1))
//! storage reads.
//!
//! INVARIANT
//! =========
//! Token and user record are written and removed as a pair. A token without a
//! user record (or the reverse) only arises if a raw storage write fails
//! mid-operation, which the storage substrate does not let us detect.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use crate::net::types::{Role, User};

/// localStorage key holding the raw bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// localStorage key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// String key/value storage substrate behind the credential store.
pub trait SessionStorage: Send + Sync {
    /// Read the value for `key`, or `None` when missing or unavailable.
    fn read(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`; silently skipped when unavailable.
    fn write(&self, key: &str, value: &str);
    /// Remove `key`; removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// `window.localStorage` backend. Outside a browser (SSR, native tests) every
/// read returns `None` and writes are skipped, never an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Read/write access to the persisted session (token + user record).
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn SessionStorage>,
}

impl CredentialStore {
    /// Store over the browser's localStorage.
    pub fn browser() -> Self {
        Self::with_backend(BrowserStorage)
    }

    /// Store over an explicit backend (tests inject an in-memory one).
    pub fn with_backend(backend: impl SessionStorage + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// The raw session token, or `None` when absent or storage is unavailable.
    pub fn token(&self) -> Option<String> {
        self.backend.read(ACCESS_TOKEN_KEY)
    }

    /// The stored user record. Missing keys and malformed JSON both read as
    /// "no user" rather than an error.
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.read(USER_KEY)?;
        parse_user(&raw)
    }

    /// Persist a token and its matching user record as a pair.
    pub fn set_session(&self, token: &str, user: &User) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.backend.write(ACCESS_TOKEN_KEY, token);
        self.backend.write(USER_KEY, &raw);
    }

    /// Remove both session keys. Idempotent.
    pub fn clear_session(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    /// True when a session token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// True when the stored user record carries the admin role.
    ///
    /// Advisory only: the role comes from client-controlled storage; the
    /// server makes the real authorization decision.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.role == Role::Admin)
    }
}

fn parse_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::SessionStorage;

    /// In-memory `SessionStorage` backend for native tests.
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        items: Mutex<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl SessionStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.items.lock().unwrap().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.items.lock().unwrap().insert(key.to_owned(), value.to_owned());
        }

        fn remove(&self, key: &str) {
            self.items.lock().unwrap().remove(key);
        }
    }
}
