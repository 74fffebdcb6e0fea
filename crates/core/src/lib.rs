//! Shopify REST Core - Wire types for the carts resource.
//!
//! This crate provides the types exchanged with the Shopify REST Admin API:
//! - `shopify-rest` - HTTP client and resource services built on these types
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere (including mock servers).
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, the `Cart` value object, envelopes, and
//!   query options

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
