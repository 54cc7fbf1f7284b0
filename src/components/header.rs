//! Site header with navigation and the login/logout affordance.

use leptos::prelude::*;

use crate::net::session_client;
use crate::state::session::SessionState;

/// Top navigation bar. Shows storefront links and a greeting while a
/// session is held, or a login link otherwise.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session_client::logout(session);
    };

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <a class="site-header__link" href="/">"Home"</a>
                <Show when=move || session.get().is_authenticated()>
                    <a class="site-header__link" href="/products/auctions">"Auctions"</a>
                    <a class="site-header__link" href="/cart">"Cart"</a>
                    <a class="site-header__link" href="/creations">"My Listings"</a>
                </Show>
            </nav>
            <div class="site-header__session">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| view! { <a class="site-header__link" href="/login">"Login"</a> }
                >
                    <span class="site-header__greeting">"Hello " {username}</span>
                    <button class="site-header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
