//! Unverified JWT payload decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never verifies token signatures; that is the backend's job.
//! Tokens are trusted only because they are set exclusively from successful
//! token-endpoint responses, so decoding here extracts display identity and
//! nothing more.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::User;
use crate::state::session::AuthError;

/// Claims the backend stuffs into the access token payload.
#[derive(Debug, Deserialize)]
struct AccessClaims {
    username: String,
}

/// Decode the identity carried in an access token's payload segment.
///
/// # Errors
///
/// Returns [`AuthError::MalformedToken`] when the token is not a three-part
/// JWT, the payload is not valid base64url, or the `username` claim is
/// missing.
pub fn decode_identity(access: &str) -> Result<User, AuthError> {
    let payload = access
        .split('.')
        .nth(1)
        .ok_or(AuthError::MalformedToken)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    let claims: AccessClaims =
        serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedToken)?;
    Ok(User {
        username: claims.username,
    })
}
