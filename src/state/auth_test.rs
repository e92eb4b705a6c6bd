use super::*;
use crate::auth::store::testing::MemoryStorage;

fn user(role: Role) -> User {
    User {
        id: 1,
        username: "admin".to_owned(),
        role,
    }
}

#[test]
fn default_state_is_signed_out_and_ready() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
    assert!(!state.loading);
}

#[test]
fn initializing_state_is_loading() {
    let state = AuthState::initializing();
    assert!(state.loading);
    assert!(!state.authenticated);
}

#[test]
fn from_store_reflects_stored_session() {
    let store = CredentialStore::with_backend(MemoryStorage::new());
    store.set_session("abc123", &user(Role::Admin));
    let state = AuthState::from_store(&store);
    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
    assert!(state.is_admin());
}

#[test]
fn from_store_on_empty_store_is_signed_out() {
    let store = CredentialStore::with_backend(MemoryStorage::new());
    let state = AuthState::from_store(&store);
    assert!(!state.authenticated);
    assert_eq!(state.user, None);
    assert!(!state.is_admin());
}

#[test]
fn non_admin_user_is_not_admin() {
    let store = CredentialStore::with_backend(MemoryStorage::new());
    store.set_session("xyz", &user(Role::User));
    assert!(!AuthState::from_store(&store).is_admin());
}
