use super::*;
use crate::auth::store::testing::MemoryStorage;
use crate::net::types::{Role, User};

fn signed_in_store() -> CredentialStore {
    let store = CredentialStore::with_backend(MemoryStorage::new());
    let user = User {
        id: 2,
        username: "user".to_owned(),
        role: Role::User,
    };
    store.set_session("xyz", &user);
    store
}

fn signed_out_store() -> CredentialStore {
    CredentialStore::with_backend(MemoryStorage::new())
}

#[test]
fn protected_page_redirects_without_session() {
    assert_eq!(
        protected_redirect(&signed_out_store(), LOGIN_ROUTE),
        Some("/login")
    );
}

#[test]
fn protected_page_stays_put_with_session() {
    assert_eq!(protected_redirect(&signed_in_store(), LOGIN_ROUTE), None);
}

#[test]
fn public_only_page_redirects_with_session() {
    assert_eq!(
        public_only_redirect(&signed_in_store(), HOME_ROUTE),
        Some("/")
    );
}

#[test]
fn public_only_page_stays_put_without_session() {
    assert_eq!(public_only_redirect(&signed_out_store(), HOME_ROUTE), None);
}

#[test]
fn guards_honor_custom_targets() {
    assert_eq!(
        protected_redirect(&signed_out_store(), "/welcome"),
        Some("/welcome")
    );
    assert_eq!(
        public_only_redirect(&signed_in_store(), "/scores"),
        Some("/scores")
    );
}
