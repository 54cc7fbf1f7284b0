//! Create-auction page: a product plus its opening terms.

#[cfg(test)]
#[path = "create_auction_test.rs"]
mod create_auction_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::session_client;
use crate::net::types::AuctionForm;
use crate::pages::create_product::parse_product_form;
use crate::state::session::SessionState;
use crate::util::auth;

/// Validate raw auction form inputs. Product fields share the product-form
/// rules; the opening price must be positive and a closing time must be
/// chosen.
fn parse_auction_form(
    name: &str,
    description: &str,
    price: &str,
    stock: &str,
    start_price: &str,
    end_time: &str,
) -> Result<AuctionForm, String> {
    let product = parse_product_form(name, description, price, stock)?;
    let start_price = start_price.trim();
    match start_price.parse::<f64>() {
        Ok(value) if value > 0.0 => {}
        _ => return Err("Starting price must be a positive amount.".to_owned()),
    }
    let end_time = end_time.trim();
    if end_time.is_empty() {
        return Err("Pick a closing time.".to_owned());
    }
    Ok(AuctionForm {
        name: product.name,
        description: product.description,
        price: product.price,
        stock: product.stock,
        start_price: start_price.to_owned(),
        end_time: end_time.to_owned(),
    })
}

#[component]
pub fn CreateAuctionPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let start_price = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match parse_auction_form(
            &name.get(),
            &description.get(),
            &price.get(),
            &stock.get(),
            &start_price.get(),
            &end_time.get(),
        ) {
            Ok(form) => form,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let access = session
            .get_untracked()
            .access_token()
            .map(str::to_owned)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_auction(&access, &form).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/products/auctions");
                    }
                }
                Err(e) => {
                    if !session_client::forfeit_on_unauthorized(session, &e) {
                        error.set(Some(e.to_string()));
                    }
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&access, &form);
        }
    };

    view! {
        <Show when=move || auth::session_ready(&session.get())>
            <div class="form-page">
                <h1>"New Auction"</h1>
                <form class="listing-form" on:submit=on_submit>
                    <input
                        class="listing-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <textarea
                        class="listing-input"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        class="listing-input"
                        type="text"
                        placeholder="Buy-now price"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    <input
                        class="listing-input"
                        type="number"
                        placeholder="Stock"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                    <input
                        class="listing-input"
                        type="text"
                        placeholder="Starting price"
                        prop:value=move || start_price.get()
                        on:input=move |ev| start_price.set(event_target_value(&ev))
                    />
                    <input
                        class="listing-input"
                        type="datetime-local"
                        prop:value=move || end_time.get()
                        on:input=move |ev| end_time.set(event_target_value(&ev))
                    />
                    <button class="btn btn--create" type="submit" disabled=move || busy.get()>
                        "Create Auction"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </Show>
    }
}
