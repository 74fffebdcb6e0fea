//! Shopify REST Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This crate handles the high-privilege Shopify Admin API access token.**
//! The token is kept in a [`secrecy::SecretString`], sent only as a
//! sensitive header, and redacted from every `Debug` implementation.
//!
//! # Architecture
//!
//! - [`Transport`] - generic JSON-over-HTTP seam (get/post/put/delete)
//! - [`RestClient`] - reqwest-backed transport bound to one store and API version
//! - [`CartService`] / [`CartServiceOp`] - the carts resource, one HTTP call
//!   per operation
//!
//! No retries, rate-limit handling, or caching: every failure is returned to
//! the caller as a [`ShopifyError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{CartService, RestClient, ShopifyConfig};
//! use shopify_rest_core::{Cart, CartId};
//!
//! let config = ShopifyConfig::from_env()?;
//! let client = RestClient::new(&config)?;
//!
//! // Fetch a cart
//! let cart = client.carts().get(CartId::new(42), None).await?;
//!
//! // Create one
//! let created = client
//!     .carts()
//!     .create(Cart {
//!         notes: Some("gift wrap".to_string()),
//!         ..Cart::default()
//!     })
//!     .await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod carts;
mod client;
mod config;
mod error;
mod transport;

pub use carts::{CartService, CartServiceOp};
pub use client::RestClient;
pub use config::{ConfigError, DEFAULT_API_VERSION, DEFAULT_TIMEOUT, ShopifyConfig};
pub use error::ShopifyError;
pub use transport::Transport;
