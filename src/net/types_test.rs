use super::*;

// =============================================================
// TokenPair
// =============================================================

#[test]
fn token_pair_round_trips_through_json() {
    let pair = TokenPair {
        access: "aaa.bbb.ccc".to_owned(),
        refresh: "ddd.eee.fff".to_owned(),
    };
    let json = serde_json::to_string(&pair).unwrap();
    let back: TokenPair = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pair);
}

#[test]
fn token_pair_parses_token_endpoint_response() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"access":"a.b.c","refresh":"d.e.f"}"#).unwrap();
    assert_eq!(pair.access, "a.b.c");
    assert_eq!(pair.refresh, "d.e.f");
}

#[test]
fn token_pair_missing_field_is_an_error() {
    let result = serde_json::from_str::<TokenPair>(r#"{"access":"a.b.c"}"#);
    assert!(result.is_err());
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_parses_backend_shape() {
    let json = r#"{
        "id": 7,
        "name": "Walnut desk",
        "description": "Solid walnut writing desk.",
        "price": "249.00",
        "stock": 3,
        "created_at": "2026-08-01T09:30:00Z",
        "updated": "2026-08-02T10:00:00Z",
        "isActive": true,
        "rating": "4.50",
        "owner": 2,
        "owner_username": "alice",
        "createdAt": "2026-08-01 09:30:00",
        "is_auction": false,
        "auction": null
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.id, 7);
    assert_eq!(product.price, "249.00");
    assert_eq!(product.owner_username, "alice");
    assert!(product.is_active);
    assert!(!product.is_auction);
    assert!(product.auction.is_none());
}

#[test]
fn product_price_accepts_bare_number() {
    let json = r#"{
        "id": 1,
        "name": "Mug",
        "description": "",
        "price": 12.5,
        "stock": 10,
        "owner": 1,
        "owner_username": "bob",
        "is_auction": false,
        "isActive": true
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.price, "12.50");
}

#[test]
fn product_with_nested_auction_parses() {
    let json = r#"{
        "id": 3,
        "name": "Vintage clock",
        "description": "Brass mantel clock.",
        "price": "80.00",
        "stock": 1,
        "owner": 4,
        "owner_username": "carol",
        "is_auction": true,
        "isActive": true,
        "auction": {
            "id": 11,
            "product": 3,
            "product_name": "Vintage clock",
            "start_price": "80.00",
            "current_price": "95.50",
            "start_time": "2026-08-01T00:00:00Z",
            "end_time": "2026-09-01T00:00:00Z",
            "is_active": true,
            "highest_bidder_username": "dave",
            "owner": "carol"
        }
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    let auction = product.auction.unwrap();
    assert_eq!(auction.current_price, "95.50");
    assert_eq!(auction.highest_bidder_username.as_deref(), Some("dave"));
}

// =============================================================
// Auction
// =============================================================

#[test]
fn auction_without_bids_has_no_highest_bidder() {
    let json = r#"{
        "id": 11,
        "product": 3,
        "product_name": "Vintage clock",
        "start_price": "80.00",
        "current_price": "80.00",
        "start_time": "2026-08-01T00:00:00Z",
        "end_time": "2026-09-01T00:00:00Z",
        "is_active": true
    }"#;
    let auction: Auction = serde_json::from_str(json).unwrap();
    assert!(auction.highest_bidder_username.is_none());
    assert!(auction.description.is_none());
}

#[test]
fn auction_detail_carries_description() {
    let json = r#"{
        "id": 11,
        "product": 3,
        "product_name": "Vintage clock",
        "start_price": "80.00",
        "current_price": 101,
        "start_time": "2026-08-01T00:00:00Z",
        "end_time": "2026-09-01T00:00:00Z",
        "is_active": true,
        "description": "Brass mantel clock.",
        "highest_bidder_username": "dave"
    }"#;
    let auction: Auction = serde_json::from_str(json).unwrap();
    assert_eq!(auction.description.as_deref(), Some("Brass mantel clock."));
    assert_eq!(auction.current_price, "101");
}

// =============================================================
// CartItem
// =============================================================

#[test]
fn cart_item_parses_backend_shape() {
    let json = r#"{
        "id": 5,
        "product": 7,
        "quantity": 2,
        "product_name": "Walnut desk",
        "product_description": "Solid walnut writing desk.",
        "product_price": "249.00"
    }"#;
    let item: CartItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.product, 7);
    assert_eq!(item.quantity, 2);
    assert_eq!(item.product_price, "249.00");
}

// =============================================================
// Creation
// =============================================================

#[test]
fn creation_parses_with_and_without_auction_details() {
    let json = r#"[
        {
            "id": 1,
            "name": "Mug",
            "description": "",
            "price": "12.50",
            "created_at": "2026-08-01T09:30:00Z",
            "is_auction": false,
            "auction_details": null
        },
        {
            "id": 3,
            "name": "Vintage clock",
            "description": "Brass mantel clock.",
            "price": "80.00",
            "created_at": "2026-08-01T09:30:00Z",
            "is_auction": true,
            "auction_details": {
                "id": 11,
                "product": 3,
                "product_name": "Vintage clock",
                "start_price": "80.00",
                "current_price": "95.50",
                "start_time": "2026-08-01T00:00:00Z",
                "end_time": "2026-09-01T00:00:00Z",
                "is_active": true
            }
        }
    ]"#;
    let creations: Vec<Creation> = serde_json::from_str(json).unwrap();
    assert_eq!(creations.len(), 2);
    assert!(creations[0].auction_details.is_none());
    assert!(creations[1].auction_details.is_some());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn product_form_serializes_expected_fields() {
    let form = ProductForm {
        name: "Mug".to_owned(),
        description: "A mug.".to_owned(),
        price: "12.50".to_owned(),
        stock: 10,
    };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["name"], "Mug");
    assert_eq!(value["price"], "12.50");
    assert_eq!(value["stock"], 10);
}

#[test]
fn register_form_serializes_expected_fields() {
    let form = RegisterForm {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["username"], "alice");
    assert_eq!(value["email"], "alice@example.com");
    assert_eq!(value["password"], "hunter22");
}
