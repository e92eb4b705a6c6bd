//! Utility helpers shared across UI modules.

pub mod score;
