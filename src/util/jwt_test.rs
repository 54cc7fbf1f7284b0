use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Build a structurally valid unsigned JWT around the given payload JSON.
fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.signature")
}

// =============================================================
// decode_identity
// =============================================================

#[test]
fn decodes_username_claim() {
    let token = token_with_payload(r#"{"token_type":"access","username":"alice","user_id":1}"#);
    let user = decode_identity(&token).unwrap();
    assert_eq!(user.username, "alice");
}

#[test]
fn ignores_extra_claims() {
    let token =
        token_with_payload(r#"{"username":"bob","exp":1767225600,"iat":1767139200,"jti":"x"}"#);
    assert_eq!(decode_identity(&token).unwrap().username, "bob");
}

#[test]
fn missing_username_claim_is_malformed() {
    let token = token_with_payload(r#"{"token_type":"access","user_id":1}"#);
    assert_eq!(decode_identity(&token), Err(AuthError::MalformedToken));
}

#[test]
fn single_segment_token_is_malformed() {
    assert_eq!(
        decode_identity("not-a-jwt-at-all"),
        Err(AuthError::MalformedToken)
    );
}

#[test]
fn non_base64_payload_is_malformed() {
    assert_eq!(
        decode_identity("header.!!!not-base64!!!.sig"),
        Err(AuthError::MalformedToken)
    );
}

#[test]
fn non_json_payload_is_malformed() {
    let body = URL_SAFE_NO_PAD.encode(b"plain text");
    let token = format!("header.{body}.sig");
    assert_eq!(decode_identity(&token), Err(AuthError::MalformedToken));
}

#[test]
fn empty_token_is_malformed() {
    assert_eq!(decode_identity(""), Err(AuthError::MalformedToken));
}
