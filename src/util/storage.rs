//! Persisted token slot in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One string-keyed slot holds the JSON-serialized token pair; its absence
//! means no session. The slot is re-read at the start of every session
//! operation so a concurrent logout is never papered over by a value cached
//! across an await point. Requires a browser environment; on the server all
//! reads come back empty.

use crate::net::types::TokenPair;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "bazaar_auth_tokens";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted token pair, if the slot exists and parses.
pub fn load_tokens() -> Option<TokenPair> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token pair, overwriting any previous slot contents.
pub fn store_tokens(pair: &TokenPair) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(json) = serde_json::to_string(pair) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pair;
    }
}

/// Remove the token slot entirely.
pub fn clear_tokens() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
