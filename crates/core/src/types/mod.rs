//! Core types for the Shopify REST carts resource.
//!
//! This module provides the wire types exchanged with the carts endpoints.

pub mod cart;
pub mod id;
pub mod options;

pub use cart::{Cart, CartResource, CartTagsResource, CartsResource};
pub use id::*;
pub use options::{CartListOptions, CartOptions};
