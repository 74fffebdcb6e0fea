//! Carts resource.
//!
//! Maps each cart operation onto one HTTP call:
//!
//! | Operation   | Verb   | Path              | Envelope            |
//! |-------------|--------|-------------------|---------------------|
//! | `get`       | GET    | `carts/{id}.json` | `{"cart": {...}}`   |
//! | `list`      | GET    | `carts.json`      | `{"carts": [...]}`  |
//! | `list_tags` | GET    | `carts/tags.json` | `{"tags": [...]}`   |
//! | `create`    | POST   | `carts.json`      | `{"cart": {...}}`   |
//! | `update`    | PUT    | `carts/{id}.json` | `{"cart": {...}}`   |
//! | `delete`    | DELETE | `carts/{id}.json` | none                |

use std::future::Future;

use shopify_rest_core::{
    Cart, CartId, CartListOptions, CartOptions, CartResource, CartTagsResource, CartsResource,
};
use tracing::{debug, instrument};

use crate::error::ShopifyError;
use crate::transport::Transport;

const CARTS_BASE_PATH: &str = "carts";

/// Operations on the carts endpoints of the Shopify REST Admin API.
pub trait CartService {
    /// Fetch a single cart.
    fn get(
        &self,
        id: CartId,
        options: Option<&CartOptions>,
    ) -> impl Future<Output = Result<Cart, ShopifyError>> + Send;

    /// List carts (a single page, no cursor).
    fn list(
        &self,
        options: Option<&CartListOptions>,
    ) -> impl Future<Output = Result<Vec<Cart>, ShopifyError>> + Send;

    /// List the tags in use on carts.
    fn list_tags(&self) -> impl Future<Output = Result<Vec<String>, ShopifyError>> + Send;

    /// Create a cart, returning Shopify's canonical copy (with ID and timestamps).
    fn create(&self, cart: Cart) -> impl Future<Output = Result<Cart, ShopifyError>> + Send;

    /// Update the cart identified by `cart.id`.
    fn update(&self, cart: Cart) -> impl Future<Output = Result<Cart, ShopifyError>> + Send;

    /// Delete a cart.
    fn delete(&self, id: CartId) -> impl Future<Output = Result<(), ShopifyError>> + Send;
}

/// [`CartService`] backed by a borrowed [`Transport`].
///
/// Holds nothing but the reference; every call is independent.
#[derive(Debug)]
pub struct CartServiceOp<'a, T> {
    client: &'a T,
}

impl<'a, T> CartServiceOp<'a, T> {
    /// Wrap a transport.
    #[must_use]
    pub const fn new(client: &'a T) -> Self {
        Self { client }
    }
}

fn collection_path() -> String {
    format!("{CARTS_BASE_PATH}.json")
}

fn cart_path(id: CartId) -> String {
    format!("{CARTS_BASE_PATH}/{id}.json")
}

fn tags_path() -> String {
    format!("{CARTS_BASE_PATH}/tags.json")
}

impl<T: Transport> CartService for CartServiceOp<'_, T> {
    #[instrument(skip(self, id, options), fields(cart_id = %id))]
    async fn get(&self, id: CartId, options: Option<&CartOptions>) -> Result<Cart, ShopifyError> {
        let resource: CartResource = self.client.get(&cart_path(id), options).await?;
        debug!("Fetched cart");
        Ok(resource.cart)
    }

    #[instrument(skip(self, options))]
    async fn list(&self, options: Option<&CartListOptions>) -> Result<Vec<Cart>, ShopifyError> {
        let resource: CartsResource = self.client.get(&collection_path(), options).await?;
        debug!(count = resource.carts.len(), "Listed carts");
        Ok(resource.carts)
    }

    #[instrument(skip(self))]
    async fn list_tags(&self) -> Result<Vec<String>, ShopifyError> {
        let resource: CartTagsResource = self.client.get::<_, ()>(&tags_path(), None).await?;
        Ok(resource.tags)
    }

    #[instrument(skip(self, cart))]
    async fn create(&self, cart: Cart) -> Result<Cart, ShopifyError> {
        let wrapped = CartResource { cart };
        let resource: CartResource = self.client.post(&collection_path(), &wrapped).await?;
        debug!(cart_id = ?resource.cart.id, "Created cart");
        Ok(resource.cart)
    }

    #[instrument(skip(self, cart), fields(cart_id = ?cart.id))]
    async fn update(&self, cart: Cart) -> Result<Cart, ShopifyError> {
        let id = cart.id.ok_or(ShopifyError::MissingId("cart"))?;
        let wrapped = CartResource { cart };
        let resource: CartResource = self.client.put(&cart_path(id), &wrapped).await?;
        debug!("Updated cart");
        Ok(resource.cart)
    }

    #[instrument(skip(self, id), fields(cart_id = %id))]
    async fn delete(&self, id: CartId) -> Result<(), ShopifyError> {
        self.client.delete(&cart_path(id)).await?;
        debug!("Deleted cart");
        Ok(())
    }
}
