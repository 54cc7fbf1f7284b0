//! Product detail page.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::add_to_cart_button::AddToCartButton;
use crate::net::session_client;
use crate::net::types::Product;
use crate::state::session::SessionState;
use crate::util::auth;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());
    let params = use_params_map();

    let product = RwSignal::new(None::<Product>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        if !auth::session_ready(&session.get()) {
            return;
        }
        let Some(id) = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok()) else {
            error.set(Some("Unknown product.".to_owned()));
            return;
        };
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product(&access, id).await {
                Ok(found) => product.set(Some(found)),
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&access, id);
        }
    });

    view! {
        <div class="product-detail-page">
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || product.get().is_some()>
                {move || {
                    product
                        .get()
                        .map(|p| {
                            view! {
                                <div class="product-detail">
                                    <h1>{p.name}</h1>
                                    <p class="product-detail__description">{p.description}</p>
                                    <p class="product-detail__price">"$" {p.price}</p>
                                    <p class="product-detail__stock">"In stock: " {p.stock}</p>
                                    <p class="product-detail__owner">"Sold by " {p.owner_username}</p>
                                    <AddToCartButton product_id=p.id/>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
