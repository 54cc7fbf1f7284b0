use super::storefront_products;
use crate::net::types::Product;

fn product(id: i64, is_auction: bool, is_active: bool) -> Product {
    Product {
        id,
        name: format!("product-{id}"),
        description: String::new(),
        price: "10.00".to_owned(),
        stock: 1,
        owner: 1,
        owner_username: "alice".to_owned(),
        is_auction,
        is_active,
        auction: None,
    }
}

// ====================================================================
// storefront_products
// ====================================================================

#[test]
fn keeps_active_fixed_price_items() {
    let listed = storefront_products(vec![product(1, false, true), product(2, false, true)]);
    assert_eq!(listed.len(), 2);
}

#[test]
fn drops_auction_listings() {
    let listed = storefront_products(vec![product(1, false, true), product(2, true, true)]);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 1);
}

#[test]
fn drops_inactive_listings() {
    let listed = storefront_products(vec![product(1, false, false), product(2, false, true)]);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 2);
}

#[test]
fn empty_listing_stays_empty() {
    assert!(storefront_products(Vec::new()).is_empty());
}
