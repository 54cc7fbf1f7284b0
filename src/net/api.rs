//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! UI behavior without crashing hydration. A 401 is surfaced as
//! [`ApiError::Unauthorized`] so every caller can forfeit the session
//! instead of retrying.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder, Response};

use super::types::{
    Auction, AuctionForm, CartItem, Creation, Product, ProductForm, RegisterForm, TokenPair,
};
use crate::state::session::AuthError;

/// Failures of authenticated application calls (everything except the token
/// endpoints, which report [`AuthError`] instead).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The access token was rejected; the caller must forfeit the session.
    #[error("unauthorized")]
    Unauthorized,
    /// The backend rejected the request and explained why.
    #[error("{0}")]
    Rejected(String),
    /// The backend answered with an unexpected status.
    #[error("request failed with status {0}")]
    Failed(u16),
    /// The request could not complete.
    #[error("network error: {0}")]
    Network(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn product_detail_endpoint(id: i64) -> String {
    format!("/api/products/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_edit_endpoint(id: i64) -> String {
    format!("/api/products/{id}/edit/")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_delete_endpoint(id: i64) -> String {
    format!("/api/products/{id}/delete/")
}

#[cfg(any(test, feature = "hydrate"))]
fn auction_detail_endpoint(id: i64) -> String {
    format!("/api/products/auctions/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(access: &str) -> String {
    format!("Bearer {access}")
}

/// Map a non-success application response to an [`ApiError`], pulling the
/// backend's `error` field out of the body when one is present.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: Option<serde_json::Value>) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    if let Some(message) = body
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|v| v.as_str())
    {
        return ApiError::Rejected(message.to_owned());
    }
    ApiError::Failed(status)
}

// ── Token endpoints ─────────────────────────────────────────────────

/// Exchange credentials for a token pair via `POST /api/token/`.
///
/// # Errors
///
/// `InvalidCredentials` on any non-200 response; `NetworkFailure` when the
/// request could not complete or the body did not parse.
pub async fn obtain_token(username: &str, password: &str) -> Result<TokenPair, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/token/")
            .json(&payload)
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
        if resp.status() != 200 {
            return Err(AuthError::InvalidCredentials);
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(AuthError::NetworkFailure("not available on server".to_owned()))
    }
}

/// Exchange a refresh token for a rotated pair via `POST /api/token/refresh/`.
///
/// # Errors
///
/// `TokenExpiredOrInvalid` on any non-200 response; `NetworkFailure` when
/// the request could not complete or the body did not parse.
pub async fn refresh_token(refresh: &str) -> Result<TokenPair, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "refresh": refresh });
        let resp = gloo_net::http::Request::post("/api/token/refresh/")
            .json(&payload)
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
        if resp.status() != 200 {
            return Err(AuthError::TokenExpiredOrInvalid);
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh;
        Err(AuthError::NetworkFailure("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/register/`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the backend rejects the registration or the
/// request fails.
pub async fn register(form: &RegisterForm) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register/")
            .json(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let body = resp.json::<serde_json::Value>().await.ok();
        Err(status_error(resp.status(), body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// ── Shared request plumbing ─────────────────────────────────────────

/// Issue an authenticated request and parse a JSON response body.
#[cfg(feature = "hydrate")]
async fn send_json<T, B>(
    method: Method,
    url: &str,
    access: &str,
    body: Option<&B>,
) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let resp = send_raw(method, url, access, body).await?;
    if !resp.ok() {
        let body = resp.json::<serde_json::Value>().await.ok();
        return Err(status_error(resp.status(), body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Issue an authenticated request where only the status matters.
#[cfg(feature = "hydrate")]
async fn send_no_content<B>(
    method: Method,
    url: &str,
    access: &str,
    body: Option<&B>,
) -> Result<(), ApiError>
where
    B: serde::Serialize,
{
    let resp = send_raw(method, url, access, body).await?;
    if resp.ok() {
        return Ok(());
    }
    let body = resp.json::<serde_json::Value>().await.ok();
    Err(status_error(resp.status(), body))
}

#[cfg(feature = "hydrate")]
async fn send_raw<B>(
    method: Method,
    url: &str,
    access: &str,
    body: Option<&B>,
) -> Result<Response, ApiError>
where
    B: serde::Serialize,
{
    let builder = RequestBuilder::new(url)
        .method(method)
        .header("Authorization", &bearer(access));
    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

// ── Products ────────────────────────────────────────────────────────

/// Fetch the caller's product list via `GET /api/products/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn fetch_products(access: &str) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json::<Vec<Product>, ()>(Method::GET, "/api/products/", access, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one product via `GET /api/products/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn fetch_product(access: &str, id: i64) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json::<Product, ()>(Method::GET, &product_detail_endpoint(id), access, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a product via `POST /api/products/create/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn create_product(access: &str, form: &ProductForm) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::POST, "/api/products/create/", access, Some(form)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, form);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a product via `PUT /api/products/{id}/edit/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn update_product(access: &str, id: i64, form: &ProductForm) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::PUT, &product_edit_endpoint(id), access, Some(form)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, id, form);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a product via `DELETE /api/products/{id}/delete/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn delete_product(access: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_no_content::<()>(Method::DELETE, &product_delete_endpoint(id), access, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// ── Cart ────────────────────────────────────────────────────────────

/// Fetch the cart contents via `GET /api/cart/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn fetch_cart(access: &str) -> Result<Vec<CartItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json::<Vec<CartItem>, ()>(Method::GET, "/api/cart/", access, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Add a product to the cart via `POST /api/cart/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn add_to_cart(access: &str, product_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "product_id": product_id });
        send_no_content(Method::POST, "/api/cart/", access, Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, product_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Change a cart line's quantity via `PUT /api/cart/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn update_cart_quantity(
    access: &str,
    product_id: i64,
    quantity: i32,
) -> Result<CartItem, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "product_id": product_id, "quantity": quantity });
        send_json(Method::PUT, "/api/cart/", access, Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, product_id, quantity);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove a product from the cart via `DELETE /api/cart/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn remove_from_cart(access: &str, product_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "product_id": product_id });
        send_no_content(Method::DELETE, "/api/cart/", access, Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, product_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// ── Auctions ────────────────────────────────────────────────────────

/// Fetch all auctions via `GET /api/products/auctions/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn fetch_auctions(access: &str) -> Result<Vec<Auction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json::<Vec<Auction>, ()>(Method::GET, "/api/products/auctions/", access, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one auction via `GET /api/products/auctions/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn fetch_auction(access: &str, id: i64) -> Result<Auction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json::<Auction, ()>(Method::GET, &auction_detail_endpoint(id), access, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an auction listing via `POST /api/products/auctions/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn create_auction(access: &str, form: &AuctionForm) -> Result<Auction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::POST, "/api/products/auctions/", access, Some(form)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, form);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Place a bid via `PUT /api/products/auctions/{id}/`. The backend answers
/// with the updated auction.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the backend's message when the bid is
/// too low or the auction is closed.
pub async fn place_bid(access: &str, id: i64, bid: &str) -> Result<Auction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "bid": bid });
        send_json(Method::PUT, &auction_detail_endpoint(id), access, Some(&payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, id, bid);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// ── Owner page ──────────────────────────────────────────────────────

/// Fetch the caller's listings via `GET /api/user/creations/`.
///
/// # Errors
///
/// Returns an [`ApiError`] on rejection or transport failure.
pub async fn fetch_creations(access: &str) -> Result<Vec<Creation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json::<Vec<Creation>, ()>(Method::GET, "/api/user/creations/", access, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
