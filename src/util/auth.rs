//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages should apply identical unauthenticated redirect behavior:
//! render nothing while the bootstrap refresh is pending (no login-page
//! flash), redirect once the session resolves anonymous, and only render
//! protected content for an authenticated session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether protected content may be rendered: the bootstrap refresh has
/// settled and an identity is held.
pub fn session_ready(state: &SessionState) -> bool {
    !state.loading && state.user.is_some()
}

/// Redirect to `/login` whenever the session has resolved and no identity
/// is present. While the session is still bootstrapping this does nothing,
/// so token validation never flashes the login page.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
