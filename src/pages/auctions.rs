//! Auctions page: the list of live auction listings.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::session_client;
use crate::net::types::Auction;
use crate::state::session::SessionState;
use crate::util::auth;

#[component]
pub fn AuctionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());

    let auctions = RwSignal::new(Vec::<Auction>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        if !auth::session_ready(&session.get()) {
            return;
        }
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_auctions(&access).await {
                Ok(list) => auctions.set(list),
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &access;
        }
    });

    view! {
        <Show when=move || auth::session_ready(&session.get())>
            <div class="auctions-page">
                <div class="auctions-page__toolbar">
                    <h1>"Auctions"</h1>
                    <a class="btn btn--create" href="/products/create-auction">
                        "New Auction"
                    </a>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="auction-grid">
                    <For
                        each=move || auctions.get()
                        key=|auction| auction.id
                        children=move |auction| {
                            let href = format!("/products/auctions/{}", auction.id);
                            let status = if auction.is_active { "Live" } else { "Ended" };
                            view! {
                                <div class="auction-card">
                                    <h2 class="auction-card__name">{auction.product_name}</h2>
                                    <p class="auction-card__price">
                                        "Current bid: $" {auction.current_price}
                                    </p>
                                    <p class="auction-card__status">{status}</p>
                                    <p class="auction-card__ends">"Ends " {auction.end_time}</p>
                                    <a class="btn btn--view" href=href>
                                        "View Auction"
                                    </a>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
