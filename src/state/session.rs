//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided via context at the app root.
//! The session client (`net::session_client`) is its only writer; route
//! guards and user-aware components read it to coordinate login redirects
//! and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! The state machine has three observable states:
//! - bootstrapping: `loading == true`, entered on construction while the
//!   initial refresh validates any persisted tokens;
//! - authenticated: a token pair and decoded identity are held;
//! - anonymous: neither is held.
//!
//! `generation` and `refresh_in_flight` are single-threaded concurrency
//! guards: a refresh captures the generation before awaiting the network and
//! discards its result if a logout or login bumped it in the meantime, and
//! at most one refresh is ever outstanding.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use thiserror::Error;

use crate::net::types::{TokenPair, User};
use crate::util::jwt;

/// Failures of the session manager's login/refresh operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The token endpoint rejected the supplied credentials.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The request could not complete.
    #[error("network failure: {0}")]
    NetworkFailure(String),
    /// The refresh endpoint rejected the refresh token, or none was held.
    #[error("session expired, please log in again")]
    TokenExpiredOrInvalid,
    /// An access token that should be well-formed failed to decode.
    #[error("malformed access token")]
    MalformedToken,
}

/// Authentication state: held tokens, derived identity, bootstrap flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// The persisted bearer-token pair, if a session is held.
    pub tokens: Option<TokenPair>,
    /// Identity decoded from the access token. Present iff `tokens` is
    /// present and its access token decodes.
    pub user: Option<User>,
    /// True only while the bootstrap refresh validates persisted tokens.
    pub loading: bool,
    /// True while a refresh call is outstanding.
    pub refresh_in_flight: bool,
    /// Bumped on every login and logout; stale refresh completions compare
    /// against it and drop their result.
    pub generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            tokens: None,
            user: None,
            loading: true,
            refresh_in_flight: false,
            generation: 0,
        }
    }
}

impl SessionState {
    /// Build the initial state from the persisted token slot, optimistically
    /// decoding identity. The bootstrap refresh confirms or clears it.
    pub fn from_stored(stored: Option<TokenPair>) -> Self {
        let user = stored
            .as_ref()
            .and_then(|pair| jwt::decode_identity(&pair.access).ok());
        Self {
            tokens: stored,
            user,
            ..Self::default()
        }
    }

    /// Whether a validated (or optimistically decoded) identity is held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The current access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|pair| pair.access.as_str())
    }

    /// Install a freshly issued pair and its decoded identity (login path).
    pub fn apply_pair(&mut self, pair: TokenPair, user: User) {
        self.tokens = Some(pair);
        self.user = Some(user);
        self.generation += 1;
    }

    /// Drop tokens and identity (logout path).
    pub fn clear(&mut self) {
        self.tokens = None;
        self.user = None;
        self.generation += 1;
    }

    /// Leave the bootstrap state once the initial refresh attempt settles.
    pub fn finish_bootstrap(&mut self) {
        self.loading = false;
    }

    /// Claim the refresh slot. Returns the generation to validate the
    /// completion against, or `None` if a refresh is already outstanding.
    pub fn begin_refresh(&mut self) -> Option<u64> {
        if self.refresh_in_flight {
            return None;
        }
        self.refresh_in_flight = true;
        Some(self.generation)
    }

    /// Release the refresh slot.
    pub fn end_refresh(&mut self) {
        self.refresh_in_flight = false;
    }

    /// Install a rotated pair from a refresh that started at
    /// `started_generation`. Returns `false` (leaving state untouched) when
    /// a login or logout happened while the refresh was in flight.
    pub fn commit_refresh(
        &mut self,
        started_generation: u64,
        pair: TokenPair,
        user: User,
    ) -> bool {
        if self.generation != started_generation {
            return false;
        }
        self.tokens = Some(pair);
        self.user = Some(user);
        true
    }
}
