//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational pieces only: they render data handed down from pages and
//! read shared auth state from the context provider.

pub mod nav_bar;
pub mod score_card;
pub mod stadium_card;
