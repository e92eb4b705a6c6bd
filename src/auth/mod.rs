//! Client-side authentication and session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` persists the session (token + user record) in browser storage,
//! `context` exposes it reactively to the UI tree, and `guards` apply
//! redirect-on-mount behavior for protected and public-only routes. The
//! login page is the only writer into the store; everything else reads.

pub mod context;
pub mod guards;
pub mod store;
