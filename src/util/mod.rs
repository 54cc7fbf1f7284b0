//! Shared helpers: route guards, JWT payload decoding, token persistence.

pub mod auth;
pub mod jwt;
pub mod storage;
