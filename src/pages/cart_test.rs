use super::{cart_total, parse_quantity};
use crate::net::types::CartItem;

fn line(id: i64, price: &str, quantity: i32) -> CartItem {
    CartItem {
        id,
        product: id,
        quantity,
        product_name: format!("product-{id}"),
        product_description: String::new(),
        product_price: price.to_owned(),
    }
}

// ====================================================================
// parse_quantity
// ====================================================================

#[test]
fn accepts_positive_whole_numbers() {
    assert_eq!(parse_quantity("1"), Some(1));
    assert_eq!(parse_quantity(" 12 "), Some(12));
}

#[test]
fn rejects_zero_and_negatives() {
    assert_eq!(parse_quantity("0"), None);
    assert_eq!(parse_quantity("-3"), None);
}

#[test]
fn rejects_non_numeric_input() {
    assert_eq!(parse_quantity(""), None);
    assert_eq!(parse_quantity("two"), None);
    assert_eq!(parse_quantity("1.5"), None);
}

// ====================================================================
// cart_total
// ====================================================================

#[test]
fn sums_line_totals() {
    let items = vec![line(1, "10.00", 2), line(2, "0.50", 3)];
    assert_eq!(cart_total(&items), "21.50");
}

#[test]
fn empty_cart_totals_zero() {
    assert_eq!(cart_total(&[]), "0.00");
}

#[test]
fn unparseable_price_counts_as_zero() {
    let items = vec![line(1, "bogus", 5), line(2, "2.25", 1)];
    assert_eq!(cart_total(&items), "2.25");
}
