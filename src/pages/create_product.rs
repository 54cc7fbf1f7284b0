//! Create-product page with client-side form validation.

#[cfg(test)]
#[path = "create_product_test.rs"]
mod create_product_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::session_client;
use crate::net::types::ProductForm;
use crate::state::session::SessionState;
use crate::util::auth;

/// Validate raw form inputs into a request body. The backend re-validates,
/// but catching the obvious mistakes here keeps error round-trips off the
/// network.
pub(crate) fn parse_product_form(
    name: &str,
    description: &str,
    price: &str,
    stock: &str,
) -> Result<ProductForm, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.".to_owned());
    }
    let price = price.trim();
    match price.parse::<f64>() {
        Ok(value) if value > 0.0 => {}
        _ => return Err("Price must be a positive amount.".to_owned()),
    }
    let stock = match stock.trim().parse::<i32>() {
        Ok(value) if value >= 0 => value,
        _ => return Err("Stock must be a non-negative whole number.".to_owned()),
    };
    Ok(ProductForm {
        name: name.to_owned(),
        description: description.trim().to_owned(),
        price: price.to_owned(),
        stock,
    })
}

#[component]
pub fn CreateProductPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match parse_product_form(&name.get(), &description.get(), &price.get(), &stock.get())
        {
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
            match crate::net::api::create_product(&access, &form).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
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
                <h1>"New Product"</h1>
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
                        placeholder="Price"
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
                    <button class="btn btn--create" type="submit" disabled=move || busy.get()>
                        "Create"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </Show>
    }
}
