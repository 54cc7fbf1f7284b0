//! Home page: the fixed-price storefront grid.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::product_card::ProductCard;
use crate::net::session_client;
use crate::net::types::Product;
use crate::state::session::SessionState;
use crate::util::auth;

/// Filter a product listing down to what the storefront grid shows:
/// active, fixed-price items only. Auctions have their own page.
fn storefront_products(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| !p.is_auction && p.is_active)
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());

    let products = RwSignal::new(Vec::<Product>::new());
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
            match crate::net::api::fetch_products(&access).await {
                Ok(list) => products.set(storefront_products(list)),
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

    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_delete = Callback::new(move |id: i64| {
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_product(&access, id).await {
                Ok(()) => products.update(|list| list.retain(|p| p.id != id)),
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
        <Show when=move || auth::session_ready(&session.get())>
            <div class="home-page">
                <div class="home-page__toolbar">
                    <h1>"Products"</h1>
                    <a class="btn btn--create" href="/products/create">
                        "New Product"
                    </a>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|product| product.id
                        children=move |product| {
                            let is_owner = product.owner_username == username();
                            view! {
                                <ProductCard product=product is_owner=is_owner on_delete=on_delete/>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
