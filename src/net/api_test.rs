use super::*;

// =============================================================
// Endpoint formatters
// =============================================================

#[test]
fn product_endpoints_include_id_and_trailing_slash() {
    assert_eq!(product_detail_endpoint(7), "/api/products/7/");
    assert_eq!(product_edit_endpoint(7), "/api/products/7/edit/");
    assert_eq!(product_delete_endpoint(7), "/api/products/7/delete/");
}

#[test]
fn auction_detail_endpoint_includes_id() {
    assert_eq!(auction_detail_endpoint(11), "/api/products/auctions/11/");
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn bearer_prefixes_the_access_token() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

// =============================================================
// status_error mapping
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(status_error(401, None), ApiError::Unauthorized);
}

#[test]
fn status_401_with_body_still_maps_to_unauthorized() {
    let body = serde_json::json!({ "error": "token not valid" });
    assert_eq!(status_error(401, Some(body)), ApiError::Unauthorized);
}

#[test]
fn backend_error_message_is_surfaced() {
    let body = serde_json::json!({ "error": "Bid must be higher than current price" });
    assert_eq!(
        status_error(400, Some(body)),
        ApiError::Rejected("Bid must be higher than current price".to_owned())
    );
}

#[test]
fn unexplained_failure_keeps_the_status() {
    assert_eq!(status_error(500, None), ApiError::Failed(500));
    assert_eq!(
        status_error(404, Some(serde_json::json!({"detail": "not found"}))),
        ApiError::Failed(404)
    );
}

#[test]
fn api_error_display_is_user_facing() {
    assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(
        ApiError::Rejected("auction closed".to_owned()).to_string(),
        "auction closed"
    );
    assert_eq!(
        ApiError::Failed(500).to_string(),
        "request failed with status 500"
    );
}
