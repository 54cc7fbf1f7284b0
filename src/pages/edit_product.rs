//! Edit-product page: prefill from the detail endpoint, then save.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::session_client;
use crate::pages::create_product::parse_product_form;
use crate::state::session::SessionState;
use crate::util::auth;

#[component]
pub fn EditProductPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());
    let params = use_params_map();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let product_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());

    Effect::new(move || {
        if !auth::session_ready(&session.get()) || loaded.get() {
            return;
        }
        let Some(id) = product_id() else {
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
                Ok(found) => {
                    name.set(found.name);
                    description.set(found.description);
                    price.set(found.price);
                    stock.set(found.stock.to_string());
                    loaded.set(true);
                }
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

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = product_id() else {
            error.set(Some("Unknown product.".to_owned()));
            return;
        };
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
            match crate::net::api::update_product(&access, id, &form).await {
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
            let _ = (&access, id, &form);
        }
    };

    view! {
        <Show when=move || auth::session_ready(&session.get())>
            <div class="form-page">
                <h1>"Edit Product"</h1>
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
                        "Save"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </Show>
    }
}
