//! Cart page: line items with quantity edits, removal, and a running total.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::session_client;
use crate::net::types::CartItem;
use crate::state::session::SessionState;
use crate::util::auth;

/// Parse a quantity field. Only whole numbers of at least 1 are accepted;
/// anything else leaves the line unchanged.
fn parse_quantity(raw: &str) -> Option<i32> {
    match raw.trim().parse::<i32>() {
        Ok(value) if value >= 1 => Some(value),
        _ => None,
    }
}

/// Sum the cart's line totals into a display amount. Unparseable prices
/// count as zero rather than poisoning the total.
fn cart_total(items: &[CartItem]) -> String {
    let total: f64 = items
        .iter()
        .map(|item| {
            item.product_price.parse::<f64>().unwrap_or(0.0) * f64::from(item.quantity)
        })
        .sum();
    format!("{total:.2}")
}

#[component]
pub fn CartPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());

    let items = RwSignal::new(Vec::<CartItem>::new());
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
            match crate::net::api::fetch_cart(&access).await {
                Ok(list) => items.set(list),
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

    let on_quantity = move |product_id: i64, raw: String| {
        let Some(quantity) = parse_quantity(&raw) else {
            return;
        };
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_cart_quantity(&access, product_id, quantity).await {
                Ok(updated) => items.update(|list| {
                    if let Some(line) = list.iter_mut().find(|line| line.product == product_id) {
                        *line = updated;
                    }
                }),
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&access, product_id, quantity);
        }
    };

    let on_remove = move |product_id: i64| {
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_from_cart(&access, product_id).await {
                Ok(()) => items.update(|list| list.retain(|line| line.product != product_id)),
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&access, product_id);
        }
    };

    view! {
        <Show when=move || auth::session_ready(&session.get())>
            <div class="cart-page">
                <h1>"Your Cart"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !items.get().is_empty()
                    fallback=|| view! { <p class="cart-page__empty">"Your cart is empty."</p> }
                >
                    <ul class="cart-list">
                        <For
                            each=move || items.get()
                            key=|line| line.id
                            children=move |line| {
                                let product_id = line.product;
                                view! {
                                    <li class="cart-line">
                                        <span class="cart-line__name">{line.product_name}</span>
                                        <span class="cart-line__price">"$" {line.product_price}</span>
                                        <input
                                            class="cart-line__quantity"
                                            type="number"
                                            min="1"
                                            prop:value=line.quantity.to_string()
                                            on:change=move |ev| on_quantity(
                                                product_id,
                                                event_target_value(&ev),
                                            )
                                        />
                                        <button
                                            class="btn btn--delete"
                                            on:click=move |_| on_remove(product_id)
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <p class="cart-page__total">"Total: $" {move || cart_total(&items.get())}</p>
                </Show>
            </div>
        </Show>
    }
}
