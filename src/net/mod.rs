//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls, `session_client` manages the token lifecycle,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod session_client;
pub mod types;
