//! HTTP transport abstraction shared by the resource services.
//!
//! Resource services only build paths and envelopes; everything that touches
//! the network goes through a [`Transport`]. [`RestClient`](crate::RestClient)
//! is the production implementation, and tests substitute their own.

use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::ShopifyError;

/// Generic JSON-over-HTTP operations against a pre-configured API root.
///
/// `path` is relative to the API root (e.g. `carts/42.json`). Implementations
/// own authentication, status handling, and decoding of response bodies.
pub trait Transport: Send + Sync {
    /// GET `path` with optional query parameters and decode the body.
    fn get<R, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> impl Future<Output = Result<R, ShopifyError>> + Send
    where
        R: DeserializeOwned,
        Q: Serialize + Sync + ?Sized;

    /// POST `body` as JSON to `path` and decode the response body.
    fn post<R, B>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<R, ShopifyError>> + Send
    where
        R: DeserializeOwned,
        B: Serialize + Sync + ?Sized;

    /// PUT `body` as JSON to `path` and decode the response body.
    fn put<R, B>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<R, ShopifyError>> + Send
    where
        R: DeserializeOwned,
        B: Serialize + Sync + ?Sized;

    /// DELETE `path`, discarding any response body.
    fn delete(&self, path: &str) -> impl Future<Output = Result<(), ShopifyError>> + Send;
}
