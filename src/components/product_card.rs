//! Reusable card component for product list items on the home page.

use leptos::prelude::*;

use crate::components::add_to_cart_button::AddToCartButton;
use crate::net::types::Product;

/// Truncate a description for card display.
fn preview(description: &str) -> String {
    if description.len() > 50 {
        let cut: String = description.chars().take(50).collect();
        format!("{cut}...")
    } else {
        description.to_owned()
    }
}

/// A product card with detail link, cart button, and owner-only edit and
/// delete affordances.
#[component]
pub fn ProductCard(
    product: Product,
    /// Whether the current user owns this product.
    is_owner: bool,
    /// Invoked with the product id when the owner clicks delete.
    on_delete: Callback<i64>,
) -> impl IntoView {
    let detail_href = format!("/products/{}", product.id);
    let edit_href = format!("/products/{}/edit", product.id);
    let id = product.id;
    let description = preview(&product.description);

    view! {
        <div class="product-card">
            <h2 class="product-card__name">{product.name}</h2>
            <p class="product-card__description">{description}</p>
            <p class="product-card__price">"$" {product.price}</p>
            <div class="product-card__actions">
                <a class="btn btn--view" href=detail_href>
                    "View Details"
                </a>
                <AddToCartButton product_id=id/>
                <Show when=move || is_owner>
                    <a class="btn btn--edit" href=edit_href.clone()>
                        "Edit"
                    </a>
                    <button class="btn btn--delete" on:click=move |_| on_delete.run(id)>
                        "Delete"
                    </button>
                </Show>
            </div>
        </div>
    }
}
