//! Auction detail page with bidding.

#[cfg(test)]
#[path = "auction_detail_test.rs"]
mod auction_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::session_client;
use crate::net::types::Auction;
use crate::state::session::SessionState;
use crate::util::auth;

/// The lowest amount the next bid may carry: one cent over the current
/// price. Used to prefill and validate the bid field.
fn min_next_bid(current_price: &str) -> String {
    let current = current_price.parse::<f64>().unwrap_or(0.0);
    format!("{:.2}", current + 0.01)
}

/// Validate a bid against the current price before it goes on the wire.
/// The backend re-checks, so this only catches the obvious rejections.
fn validate_bid(raw: &str, current_price: &str) -> Result<String, String> {
    let raw = raw.trim();
    let Ok(bid) = raw.parse::<f64>() else {
        return Err("Enter a numeric bid.".to_owned());
    };
    let current = current_price.parse::<f64>().unwrap_or(0.0);
    if bid <= current {
        return Err(format!("Bid must be higher than ${current_price}."));
    }
    Ok(raw.to_owned())
}

#[component]
pub fn AuctionDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());
    let params = use_params_map();

    let auction = RwSignal::new(None::<Auction>);
    let bid = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let auction_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());

    Effect::new(move || {
        if !auth::session_ready(&session.get()) {
            return;
        }
        let Some(id) = auction_id() else {
            message.set(Some("Unknown auction.".to_owned()));
            return;
        };
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_auction(&access, id).await {
                Ok(found) => {
                    bid.set(min_next_bid(&found.current_price));
                    auction.set(Some(found));
                }
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        message.set(Some(e.to_string()));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&access, id);
        }
    });

    let on_bid = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = auction_id() else {
            return;
        };
        let Some(current) = auction.get_untracked() else {
            return;
        };
        let amount = match validate_bid(&bid.get(), &current.current_price) {
            Ok(amount) => amount,
            Err(reason) => {
                message.set(Some(reason));
                return;
            }
        };
        busy.set(true);
        message.set(None);
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::place_bid(&access, id, &amount).await {
                Ok(updated) => {
                    bid.set(min_next_bid(&updated.current_price));
                    auction.set(Some(updated));
                    message.set(Some("Bid placed.".to_owned()));
                }
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        message.set(Some(e.to_string()));
                    }
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&access, id, &amount);
        }
    };

    view! {
        <div class="auction-detail-page">
            <Show when=move || message.get().is_some()>
                <p class="page-error">{move || message.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || auction.get().is_some()>
                {move || {
                    auction
                        .get()
                        .map(|a| {
                            let highest = a
                                .highest_bidder_username
                                .clone()
                                .unwrap_or_else(|| "no bids yet".to_owned());
                            let is_active = a.is_active;
                            view! {
                                <div class="auction-detail">
                                    <h1>{a.product_name}</h1>
                                    <p class="auction-detail__description">
                                        {a.description.clone().unwrap_or_default()}
                                    </p>
                                    <p class="auction-detail__price">
                                        "Current bid: $" {a.current_price}
                                    </p>
                                    <p class="auction-detail__bidder">"Highest bidder: " {highest}</p>
                                    <p class="auction-detail__ends">"Ends " {a.end_time}</p>
                                    <Show
                                        when=move || is_active
                                        fallback=|| {
                                            view! {
                                                <p class="auction-detail__closed">
                                                    "This auction has ended."
                                                </p>
                                            }
                                        }
                                    >
                                        <form class="bid-form" on:submit=on_bid>
                                            <input
                                                class="bid-form__amount"
                                                type="text"
                                                prop:value=move || bid.get()
                                                on:input=move |ev| bid.set(event_target_value(&ev))
                                            />
                                            <button
                                                class="btn btn--bid"
                                                type="submit"
                                                disabled=move || busy.get()
                                            >
                                                "Place Bid"
                                            </button>
                                        </form>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
