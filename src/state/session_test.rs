use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn access_token_for(username: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"username":"{username}"}}"#).as_bytes());
    format!("{header}.{body}.sig")
}

fn pair_for(username: &str) -> TokenPair {
    TokenPair {
        access: access_token_for(username),
        refresh: format!("refresh-{username}"),
    }
}

// =============================================================
// Construction / bootstrap
// =============================================================

#[test]
fn default_state_is_bootstrapping_and_anonymous() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.tokens.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn from_stored_none_has_no_identity() {
    let state = SessionState::from_stored(None);
    assert!(state.tokens.is_none());
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn from_stored_decodes_identity_optimistically() {
    let state = SessionState::from_stored(Some(pair_for("alice")));
    assert!(state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("alice"));
}

#[test]
fn from_stored_with_malformed_access_keeps_tokens_but_no_identity() {
    let pair = TokenPair {
        access: "garbage".to_owned(),
        refresh: "still-maybe-good".to_owned(),
    };
    let state = SessionState::from_stored(Some(pair));
    // The bootstrap refresh decides whether the refresh token is usable.
    assert!(state.tokens.is_some());
    assert!(state.user.is_none());
}

#[test]
fn finish_bootstrap_clears_loading_only() {
    let mut state = SessionState::from_stored(Some(pair_for("alice")));
    state.finish_bootstrap();
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn apply_pair_authenticates_with_decoded_username() {
    let mut state = SessionState::default();
    state.finish_bootstrap();

    let pair = pair_for("alice");
    let user = crate::util::jwt::decode_identity(&pair.access).unwrap();
    state.apply_pair(pair, user);

    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("alice"));
    assert!(state.access_token().is_some());
}

#[test]
fn clear_always_results_in_anonymous() {
    let mut state = SessionState::from_stored(Some(pair_for("alice")));
    state.finish_bootstrap();
    state.clear();
    assert!(state.tokens.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn clear_from_anonymous_is_safe() {
    let mut state = SessionState::default();
    state.finish_bootstrap();
    state.clear();
    assert!(!state.is_authenticated());
}

#[test]
fn login_and_logout_each_bump_generation() {
    let mut state = SessionState::default();
    let g0 = state.generation;

    let pair = pair_for("alice");
    let user = crate::util::jwt::decode_identity(&pair.access).unwrap();
    state.apply_pair(pair, user);
    assert_eq!(state.generation, g0 + 1);

    state.clear();
    assert_eq!(state.generation, g0 + 2);
}

// =============================================================
// Refresh: rotation, in-flight guard, stale completions
// =============================================================

#[test]
fn successful_refresh_replaces_both_tokens_and_recomputes_identity() {
    let mut state = SessionState::from_stored(Some(pair_for("alice")));
    state.finish_bootstrap();

    let started = state.begin_refresh().unwrap();
    let rotated = TokenPair {
        access: access_token_for("alice"),
        refresh: "rotated-refresh".to_owned(),
    };
    let user = crate::util::jwt::decode_identity(&rotated.access).unwrap();
    assert!(state.commit_refresh(started, rotated.clone(), user));
    state.end_refresh();

    assert_eq!(state.tokens.as_ref().unwrap().refresh, "rotated-refresh");
    assert!(state.is_authenticated());
    assert!(!state.refresh_in_flight);
}

#[test]
fn concurrent_refresh_attempt_is_rejected_while_one_is_in_flight() {
    let mut state = SessionState::from_stored(Some(pair_for("alice")));
    let first = state.begin_refresh();
    assert!(first.is_some());

    // A timer tick racing the bootstrap refresh must not start a second call.
    assert!(state.begin_refresh().is_none());

    state.end_refresh();
    assert!(state.begin_refresh().is_some());
}

#[test]
fn logout_during_refresh_discards_the_completion() {
    let mut state = SessionState::from_stored(Some(pair_for("alice")));
    let started = state.begin_refresh().unwrap();

    // User logs out while the refresh response is still in flight.
    state.clear();

    let rotated = pair_for("alice");
    let user = crate::util::jwt::decode_identity(&rotated.access).unwrap();
    assert!(!state.commit_refresh(started, rotated, user));
    state.end_refresh();

    // Cleared credentials were not resurrected.
    assert!(state.tokens.is_none());
    assert!(state.user.is_none());
}

#[test]
fn login_during_refresh_discards_the_stale_rotation() {
    let mut state = SessionState::from_stored(Some(pair_for("alice")));
    let started = state.begin_refresh().unwrap();

    // A fresh login supersedes the in-flight refresh of the old session.
    let fresh = pair_for("bob");
    let fresh_user = crate::util::jwt::decode_identity(&fresh.access).unwrap();
    state.apply_pair(fresh, fresh_user);

    let stale = pair_for("alice");
    let stale_user = crate::util::jwt::decode_identity(&stale.access).unwrap();
    assert!(!state.commit_refresh(started, stale, stale_user));

    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("bob"));
}

#[test]
fn commit_refresh_does_not_bump_generation() {
    let mut state = SessionState::from_stored(Some(pair_for("alice")));
    let started = state.begin_refresh().unwrap();
    let g = state.generation;

    let rotated = pair_for("alice");
    let user = crate::util::jwt::decode_identity(&rotated.access).unwrap();
    assert!(state.commit_refresh(started, rotated, user));
    assert_eq!(state.generation, g);
}

// =============================================================
// AuthError display
// =============================================================

#[test]
fn auth_error_messages_are_user_facing() {
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "invalid username or password"
    );
    assert_eq!(
        AuthError::TokenExpiredOrInvalid.to_string(),
        "session expired, please log in again"
    );
    assert_eq!(
        AuthError::NetworkFailure("timed out".to_owned()).to_string(),
        "network failure: timed out"
    );
}
