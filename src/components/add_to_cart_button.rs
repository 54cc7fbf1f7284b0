//! Add-to-cart button shared by the product list and detail pages.

use leptos::prelude::*;

use crate::net::session_client;
use crate::state::session::SessionState;

/// Button that adds a product to the current user's cart and reports the
/// outcome inline.
#[component]
pub fn AddToCartButton(product_id: i64) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let message = RwSignal::new(None::<String>);

    let on_add = move |_| {
        message.set(None);
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_to_cart(&access, product_id).await {
                Ok(()) => message.set(Some("Added to cart.".to_owned())),
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        message.set(Some(e.to_string()));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &access;
        }
    };

    view! {
        <div class="add-to-cart">
            <button class="btn btn--cart" on:click=on_add>
                "Add to Cart"
            </button>
            <Show when=move || message.get().is_some()>
                <p class="add-to-cart__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
