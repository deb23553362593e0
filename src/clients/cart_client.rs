use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::cart_actor::{CartError, CartUpdate};
use crate::domain::CartItem;

/// Client for interacting with the cart store actor.
///
/// Cheap to clone; every clone talks to the same store.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartItem>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartItem>) -> Self {
        Self { inner }
    }

    /// Snapshot of the cart in display order.
    #[instrument(skip(self))]
    pub async fn get_items(&self) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        self.inner.list().await
    }

    /// Removes every item. Calling it on an empty cart is fine.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner.clear().await
    }

    /// Overwrites `count` and `price` of the line with the same id.
    ///
    /// # Errors
    /// `CartError::Validation` if the item breaks the price or count invariant.
    /// An unknown id is not an error: it comes back as `UpdateOutcome::NotFound`.
    #[instrument(skip(self, item), fields(item_id = %item.id, count = item.count, price = item.price))]
    pub async fn update_item(&self, item: CartItem) -> Result<CartUpdate, CartError> {
        debug!("Sending request");
        self.inner.update(item).await
    }

    /// Applies updates in order and stops at the first invalid item.
    ///
    /// Updates before the failing item are kept.
    #[instrument(skip(self, items), fields(batch = items.len()))]
    pub async fn update_items(&self, items: Vec<CartItem>) -> Result<Vec<CartUpdate>, CartError> {
        debug!("Sending request");
        self.inner.update_many(items).await
    }
}
