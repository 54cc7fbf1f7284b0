//! Session lifecycle client: login, logout, token refresh, and the
//! recurring refresh schedule.
//!
//! ARCHITECTURE
//! ============
//! This module is the single writer of the shared `RwSignal<SessionState>`.
//! Pages and components call `login`/`logout`/`forfeit_on_unauthorized` and
//! otherwise only read the signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! On startup the lifecycle task runs one bootstrap refresh to validate any
//! persisted tokens before gated UI is released, then keeps refreshing on a
//! fixed schedule while tokens are held. Any refresh failure forfeits the
//! session; there is no partial retry.
//!
//! All network and storage access is gated behind `#[cfg(feature =
//! "hydrate")]`; the transition logic itself lives in
//! [`crate::state::session`] so it stays natively testable.

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::GetUntracked;
use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::state::session::{AuthError, SessionState};
use crate::util::jwt;
use crate::util::storage;

/// Fixed refresh cadence: rotate tokens every 23 hours, comfortably inside
/// the backend's assumed 24-hour access-token lifetime. Deliberately not
/// derived from token expiry claims.
pub const REFRESH_INTERVAL_SECS: u64 = 23 * 60 * 60;

/// Exchange credentials for a session. On success the pair is persisted,
/// identity is decoded, and the signal flips to authenticated; on failure
/// the state is left untouched and the error is surfaced for display.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] when the backend rejects the login,
/// [`AuthError::NetworkFailure`] when the request cannot complete, and
/// [`AuthError::MalformedToken`] when the issued access token does not
/// decode.
pub async fn login(
    session: RwSignal<SessionState>,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    let pair = api::obtain_token(username, password).await?;
    let user = jwt::decode_identity(&pair.access)?;
    storage::store_tokens(&pair);
    session.update(|state| {
        state.apply_pair(pair, user);
        state.finish_bootstrap();
    });
    Ok(())
}

/// Drop the session unconditionally: clear the signal and the persisted
/// slot. Safe to call when already anonymous; the cleared state is what
/// signals route guards to redirect to the login page.
pub fn logout(session: RwSignal<SessionState>) {
    storage::clear_tokens();
    session.update(SessionState::clear);
}

/// Forfeit the session when an application call came back 401. Returns
/// `true` if the session was dropped, so callers can stop rendering.
pub fn forfeit_on_unauthorized(session: RwSignal<SessionState>, error: &api::ApiError) -> bool {
    if *error == api::ApiError::Unauthorized {
        leptos::logging::warn!("session expired, logging out");
        logout(session);
        return true;
    }
    false
}

/// Rotate the token pair through the refresh endpoint.
///
/// The refresh token is re-read from storage at operation start; a missing
/// slot counts as failure. Any failure forfeits the session. A refresh that
/// is already in flight coalesces: the second caller returns immediately
/// and the pending call settles the state.
///
/// # Errors
///
/// [`AuthError::TokenExpiredOrInvalid`] when no refresh token is held or
/// the backend rejects it, [`AuthError::NetworkFailure`] when the request
/// cannot complete, [`AuthError::MalformedToken`] when the rotated access
/// token does not decode.
pub async fn refresh(session: RwSignal<SessionState>) -> Result<(), AuthError> {
    let mut started = None;
    session.update(|state| started = state.begin_refresh());
    let Some(started_generation) = started else {
        return Ok(());
    };

    let result = refresh_inner(session, started_generation).await;
    session.update(SessionState::end_refresh);
    if result.is_err() {
        // Any refresh failure forfeits the session.
        logout(session);
    }
    result
}

async fn refresh_inner(
    session: RwSignal<SessionState>,
    started_generation: u64,
) -> Result<(), AuthError> {
    let stored = storage::load_tokens().ok_or(AuthError::TokenExpiredOrInvalid)?;
    let pair = api::refresh_token(&stored.refresh).await?;
    let user = jwt::decode_identity(&pair.access)?;

    let mut committed = false;
    session.update(|state| committed = state.commit_refresh(started_generation, pair.clone(), user));
    if committed {
        storage::store_tokens(&pair);
    }
    Ok(())
}

/// Spawn the session lifecycle as a local async task: one bootstrap refresh
/// that resolves the loading state, then a fixed-interval refresh loop that
/// only fires while tokens are held.
#[cfg(feature = "hydrate")]
pub fn spawn_session_lifecycle(session: RwSignal<SessionState>) {
    leptos::task::spawn_local(session_lifecycle_loop(session));
}

#[cfg(feature = "hydrate")]
async fn session_lifecycle_loop(session: RwSignal<SessionState>) {
    // Bootstrap: validate any persisted pair before releasing gated UI.
    if session.get_untracked().tokens.is_some() {
        if let Err(e) = refresh(session).await {
            leptos::logging::warn!("bootstrap refresh failed: {e}");
        }
    }
    session.update(SessionState::finish_bootstrap);

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_INTERVAL_SECS)).await;
        if session.get_untracked().tokens.is_none() {
            continue;
        }
        if let Err(e) = refresh(session).await {
            leptos::logging::warn!("scheduled refresh failed: {e}");
        }
    }
}
