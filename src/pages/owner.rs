//! Owner page: everything the current user has listed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::session_client;
use crate::net::types::Creation;
use crate::state::session::SessionState;
use crate::util::auth;

#[component]
pub fn OwnerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    auth::install_unauth_redirect(session, use_navigate());

    let creations = RwSignal::new(Vec::<Creation>::new());
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
            match crate::net::api::fetch_creations(&access).await {
                Ok(list) => creations.set(list),
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
            <div class="owner-page">
                <h1>"My Listings"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !creations.get().is_empty()
                    fallback=|| {
                        view! { <p class="owner-page__empty">"You have not listed anything yet."</p> }
                    }
                >
                    <ul class="creation-list">
                        <For
                            each=move || creations.get()
                            key=|creation| creation.id
                            children=move |creation| {
                                let kind = if creation.is_auction { "Auction" } else { "Product" };
                                let current_bid = creation
                                    .auction_details
                                    .as_ref()
                                    .map(|details| details.current_price.clone());
                                view! {
                                    <li class="creation-line">
                                        <span class="creation-line__kind">{kind}</span>
                                        <span class="creation-line__name">{creation.name}</span>
                                        <span class="creation-line__price">"$" {creation.price}</span>
                                        <span class="creation-line__created">
                                            "Listed " {creation.created_at}
                                        </span>
                                        <Show when={
                                            let has_bid = current_bid.is_some();
                                            move || has_bid
                                        }>
                                            <span class="creation-line__bid">
                                                "Current bid: $"
                                                {current_bid.clone().unwrap_or_default()}
                                            </span>
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
