use super::parse_auction_form;

// ====================================================================
// parse_auction_form
// ====================================================================

#[test]
fn accepts_well_formed_input() {
    let form = parse_auction_form(
        "Clock",
        "An old clock.",
        "50.00",
        "1",
        "5.00",
        "2026-09-01T12:00",
    )
    .unwrap();
    assert_eq!(form.name, "Clock");
    assert_eq!(form.start_price, "5.00");
    assert_eq!(form.end_time, "2026-09-01T12:00");
}

#[test]
fn product_rules_still_apply() {
    assert!(parse_auction_form("", "d", "50.00", "1", "5.00", "2026-09-01T12:00").is_err());
    assert!(parse_auction_form("Clock", "d", "-1", "1", "5.00", "2026-09-01T12:00").is_err());
}

#[test]
fn rejects_non_positive_start_price() {
    assert!(parse_auction_form("Clock", "d", "50.00", "1", "0", "2026-09-01T12:00").is_err());
    assert!(parse_auction_form("Clock", "d", "50.00", "1", "free", "2026-09-01T12:00").is_err());
}

#[test]
fn rejects_missing_end_time() {
    assert!(parse_auction_form("Clock", "d", "50.00", "1", "5.00", "  ").is_err());
}
