//! Shared DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend serializers so serde parsing stays
//! lossless for the fields the UI consumes; unknown fields are ignored.
//! Decimal amounts arrive as JSON strings from the backend but are accepted
//! as bare numbers too, since the bid endpoint echoes them inconsistently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Access/refresh bearer-token pair issued by the token endpoints.
///
/// This is the only durable client state; it is persisted JSON-serialized
/// in a single localStorage slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer credential sent with each authenticated request.
    pub access: String,
    /// Longer-lived credential exchanged for a fresh pair.
    pub refresh: String,
}

/// The authenticated user identity, decoded from the access token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display/login name, carried in the JWT `username` claim.
    pub username: String,
}

/// A storefront product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price as a decimal string (e.g. `"19.99"`).
    #[serde(deserialize_with = "deserialize_decimal_string")]
    pub price: String,
    /// Units in stock.
    pub stock: i32,
    /// Owning user's identifier.
    pub owner: i64,
    /// Owning user's login name, used for edit/delete affordances.
    pub owner_username: String,
    /// Whether the product is listed as an auction instead of a fixed-price item.
    pub is_auction: bool,
    /// Whether the listing is visible in the storefront.
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    /// Attached auction details when `is_auction` is set.
    #[serde(default)]
    pub auction: Option<Auction>,
}

/// A running (or finished) auction attached to a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    /// Unique auction identifier.
    pub id: i64,
    /// Identifier of the auctioned product.
    pub product: i64,
    /// Name of the auctioned product.
    pub product_name: String,
    /// Opening price as a decimal string.
    #[serde(deserialize_with = "deserialize_decimal_string")]
    pub start_price: String,
    /// Highest accepted bid so far as a decimal string.
    #[serde(deserialize_with = "deserialize_decimal_string")]
    pub current_price: String,
    /// Auction opening timestamp (ISO 8601).
    pub start_time: String,
    /// Auction closing timestamp (ISO 8601).
    pub end_time: String,
    /// Whether bidding is still open.
    pub is_active: bool,
    /// Login name of the current highest bidder, if any bid was placed.
    #[serde(default)]
    pub highest_bidder_username: Option<String>,
    /// Login name of the product owner.
    #[serde(default)]
    pub owner: Option<String>,
    /// Product description, present on the detail endpoint only.
    #[serde(default)]
    pub description: Option<String>,
}

/// One line of the current user's shopping cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique cart-line identifier.
    pub id: i64,
    /// Identifier of the product in the cart.
    pub product: i64,
    /// Selected quantity.
    pub quantity: i32,
    /// Product name, denormalized for display.
    pub product_name: String,
    /// Product description, denormalized for display.
    pub product_description: String,
    /// Product unit price as a decimal string.
    #[serde(deserialize_with = "deserialize_decimal_string")]
    pub product_price: String,
}

/// A row on the owner page: one listing created by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creation {
    /// Product identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Unit price as a decimal string.
    #[serde(deserialize_with = "deserialize_decimal_string")]
    pub price: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Whether the listing is an auction.
    pub is_auction: bool,
    /// Auction details for auction listings.
    #[serde(default)]
    pub auction_details: Option<Auction>,
}

/// Request body for product creation and edits.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// Decimal string; the backend coerces it.
    pub price: String,
    pub stock: i32,
}

/// Request body for auction creation: a product plus opening terms.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuctionForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: i32,
    pub start_price: String,
    /// Closing timestamp (ISO 8601 / datetime-local).
    pub end_time: String,
}

/// Request body for account registration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn default_true() -> bool {
    true
}

/// Accept a decimal amount as either a JSON string or a bare number,
/// normalizing to the string form the UI renders.
fn deserialize_decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Decimal::deserialize(deserializer)? {
        Decimal::Text(s) => s,
        Decimal::Int(i) => i.to_string(),
        Decimal::Float(f) => format!("{f:.2}"),
    })
}
