use super::*;
use crate::auth::store::testing::MemoryStorage;
use crate::net::types::{Role, User};

fn context_over_memory() -> (AuthContext, CredentialStore) {
    let store = CredentialStore::with_backend(MemoryStorage::new());
    let ctx = AuthContext::new(store.clone());
    (ctx, store)
}

fn admin_user() -> User {
    User {
        id: 1,
        username: "admin".to_owned(),
        role: Role::Admin,
    }
}

#[test]
fn new_context_starts_loading() {
    let (ctx, _) = context_over_memory();
    let state = ctx.snapshot();
    assert!(state.loading);
    assert!(!state.authenticated);
}

#[test]
fn first_refresh_reaches_ready() {
    let (ctx, _) = context_over_memory();
    ctx.refresh();
    assert!(!ctx.snapshot().loading);
}

#[test]
fn refresh_picks_up_stored_session() {
    let (ctx, store) = context_over_memory();
    ctx.refresh();
    assert!(!ctx.snapshot().authenticated);

    store.set_session("abc123", &admin_user());
    ctx.refresh();
    let state = ctx.snapshot();
    assert!(state.authenticated);
    assert_eq!(state.user.map(|u| u.username), Some("admin".to_owned()));
}

#[test]
fn logout_clears_store_and_snapshot() {
    let (ctx, store) = context_over_memory();
    store.set_session("abc123", &admin_user());
    ctx.refresh();
    assert!(ctx.snapshot().authenticated);

    ctx.logout();
    let state = ctx.snapshot();
    assert!(!state.authenticated);
    assert_eq!(state.user, None);
    assert_eq!(store.token(), None);

    // A later refresh stays signed out.
    ctx.refresh();
    assert!(!ctx.snapshot().authenticated);
}

#[test]
fn session_key_filter_matches_both_keys_and_store_clear() {
    assert!(is_session_key(Some(ACCESS_TOKEN_KEY)));
    assert!(is_session_key(Some(USER_KEY)));
    assert!(is_session_key(None));
}

#[test]
fn session_key_filter_ignores_unrelated_keys() {
    assert!(!is_session_key(Some("theme")));
    assert!(!is_session_key(Some("access_token2")));
}
