//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    auction_detail::AuctionDetailPage, auctions::AuctionsPage, cart::CartPage,
    create_auction::CreateAuctionPage, create_product::CreateProductPage,
    edit_product::EditProductPage, home::HomePage, login::LoginPage, owner::OwnerPage,
    product_detail::ProductDetailPage, register::RegisterPage,
};
use crate::state::session::SessionState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the single session state container from the persisted token
/// slot, provides it via context, and spawns the session lifecycle task
/// (bootstrap refresh + recurring rotation) before setting up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The one process-wide session container: one writer (the session
    // client), many readers.
    let session = RwSignal::new(SessionState::from_stored(storage::load_tokens()));
    provide_context(session);

    #[cfg(feature = "hydrate")]
    crate::net::session_client::spawn_session_lifecycle(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/bazaar-client.css"/>
        <Title text="Bazaar"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("creations") view=OwnerPage/>
                    <Route
                        path=(StaticSegment("products"), StaticSegment("create"))
                        view=CreateProductPage
                    />
                    <Route
                        path=(StaticSegment("products"), StaticSegment("create-auction"))
                        view=CreateAuctionPage
                    />
                    <Route
                        path=(StaticSegment("products"), StaticSegment("auctions"))
                        view=AuctionsPage
                    />
                    <Route
                        path=(
                            StaticSegment("products"),
                            StaticSegment("auctions"),
                            ParamSegment("id"),
                        )
                        view=AuctionDetailPage
                    />
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditProductPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
