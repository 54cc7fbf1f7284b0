//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and interaction surfaces while
//! reading shared session state from the Leptos context provider.

pub mod add_to_cart_button;
pub mod header;
pub mod product_card;
