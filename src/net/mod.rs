//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` decorates outgoing requests with the session headers, `api`
//! wraps the REST endpoints, and `types` defines the shared wire schema.

pub mod api;
pub mod request;
pub mod types;
