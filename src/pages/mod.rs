//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages follow one shape: install the unauthenticated redirect,
//! wait for the session to resolve, then fetch their data with the current
//! access token. A 401 on any fetch forfeits the session via
//! `session_client::forfeit_on_unauthorized`.

pub mod auction_detail;
pub mod auctions;
pub mod cart;
pub mod create_auction;
pub mod create_product;
pub mod edit_product;
pub mod home;
pub mod login;
pub mod owner;
pub mod product_detail;
pub mod register;
