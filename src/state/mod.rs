//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Page data (scores, roster, stadiums) lives in per-page resources; only
//! state with cross-page consumers earns a module here.

pub mod auth;
