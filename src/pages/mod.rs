//! Top-level page modules, one per route.

pub mod login;
pub mod players;
pub mod scores;
pub mod stadiums;
