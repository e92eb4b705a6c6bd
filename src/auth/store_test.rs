use super::testing::MemoryStorage;
use super::*;

fn admin_user() -> User {
    User {
        id: 1,
        username: "admin".to_owned(),
        role: Role::Admin,
    }
}

fn memory_store() -> CredentialStore {
    CredentialStore::with_backend(MemoryStorage::new())
}

#[test]
fn set_session_round_trips_token_and_user() {
    let store = memory_store();
    let user = admin_user();
    store.set_session("abc123", &user);
    assert_eq!(store.token().as_deref(), Some("abc123"));
    assert_eq!(store.user(), Some(user));
}

#[test]
fn fresh_store_has_no_session() {
    let store = memory_store();
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
}

#[test]
fn clear_session_removes_both_keys() {
    let store = memory_store();
    store.set_session("abc123", &admin_user());
    store.clear_session();
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn clear_session_is_idempotent() {
    let store = memory_store();
    store.set_session("abc123", &admin_user());
    store.clear_session();
    store.clear_session();
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
}

#[test]
fn admin_session_is_authenticated_and_admin() {
    let store = memory_store();
    store.set_session("abc123", &admin_user());
    assert!(store.is_authenticated());
    assert!(store.is_admin());
}

#[test]
fn non_admin_role_is_not_admin() {
    let store = memory_store();
    let user = User {
        id: 2,
        username: "user".to_owned(),
        role: Role::User,
    };
    store.set_session("xyz", &user);
    assert!(store.is_authenticated());
    assert!(!store.is_admin());
}

#[test]
fn malformed_stored_user_reads_as_absent() {
    let backend = MemoryStorage::new();
    backend.write(USER_KEY, "not-json{");
    backend.write(ACCESS_TOKEN_KEY, "abc123");
    let store = CredentialStore::with_backend(backend);
    assert_eq!(store.user(), None);
    // The token is its own key; a corrupt user record does not hide it.
    assert!(store.is_authenticated());
    assert!(!store.is_admin());
}

#[test]
fn browser_store_is_empty_outside_the_browser() {
    // Without a browser environment every read is absent and writes are
    // skipped, never an error.
    let store = CredentialStore::browser();
    store.set_session("abc123", &admin_user());
    assert_eq!(store.token(), None);
    assert!(!store.is_authenticated());
}
