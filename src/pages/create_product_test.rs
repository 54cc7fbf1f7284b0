use super::parse_product_form;

// ====================================================================
// parse_product_form
// ====================================================================

#[test]
fn accepts_well_formed_input() {
    let form = parse_product_form("Lamp", "A desk lamp.", "19.99", "3").unwrap();
    assert_eq!(form.name, "Lamp");
    assert_eq!(form.description, "A desk lamp.");
    assert_eq!(form.price, "19.99");
    assert_eq!(form.stock, 3);
}

#[test]
fn trims_whitespace() {
    let form = parse_product_form("  Lamp ", " desc ", " 5 ", " 1 ").unwrap();
    assert_eq!(form.name, "Lamp");
    assert_eq!(form.description, "desc");
    assert_eq!(form.price, "5");
    assert_eq!(form.stock, 1);
}

#[test]
fn rejects_empty_name() {
    assert!(parse_product_form("  ", "desc", "5.00", "1").is_err());
}

#[test]
fn rejects_non_numeric_price() {
    assert!(parse_product_form("Lamp", "desc", "free", "1").is_err());
}

#[test]
fn rejects_zero_or_negative_price() {
    assert!(parse_product_form("Lamp", "desc", "0", "1").is_err());
    assert!(parse_product_form("Lamp", "desc", "-2.50", "1").is_err());
}

#[test]
fn rejects_negative_or_fractional_stock() {
    assert!(parse_product_form("Lamp", "desc", "5.00", "-1").is_err());
    assert!(parse_product_form("Lamp", "desc", "5.00", "1.5").is_err());
}

#[test]
fn allows_zero_stock() {
    let form = parse_product_form("Lamp", "desc", "5.00", "0").unwrap();
    assert_eq!(form.stock, 0);
}
