use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::cart_actor::{CartError, CartUpdate};
use crate::clients::{OrderError, OrderSubmitter};
use crate::domain::CartItem;
use crate::operations::{DeleteCart, GetCartItems, SendTestOrder, UpdateCartItem};
use crate::presentation::counter;
use super::state::CartState;

/// Bridges the cart store to the presentation layer.
///
/// Holds no cart data of its own beyond the last published [`CartState`];
/// every mutation goes through an operation and is followed by a fresh
/// snapshot.
pub struct CartController<O> {
    get_items: GetCartItems,
    update_item: UpdateCartItem,
    delete_cart: DeleteCart,
    send_order: SendTestOrder<O>,
    state: watch::Sender<CartState>,
}

impl<O: OrderSubmitter> CartController<O> {
    pub fn new(
        get_items: GetCartItems,
        update_item: UpdateCartItem,
        delete_cart: DeleteCart,
        send_order: SendTestOrder<O>,
    ) -> Self {
        let (state, _) = watch::channel(CartState::loading());
        Self {
            get_items,
            update_item,
            delete_cart,
            send_order,
            state,
        }
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }

    /// Copy of the latest snapshot.
    pub fn state(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Reads the store and publishes items and total in one step.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), CartError> {
        let items = self.get_items.execute().await?;
        self.state.send_modify(|state| *state = state.with_items(items));
        debug!(total = self.state.borrow().total, "Cart state refreshed");
        Ok(())
    }

    /// Updates one line, then reloads the whole cart from the store.
    ///
    /// A rejected item leaves the published state untouched.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn update_item(&self, item: CartItem) -> Result<CartUpdate, CartError> {
        let outcome = self.update_item.execute(item).await?;
        if !outcome.is_updated() {
            warn!("Update ignored by the store");
        }
        self.load().await?;
        Ok(outcome)
    }

    /// Raises the quantity of `id` by one. `Ok(None)` at 99 or for an id not on screen.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: &str) -> Result<Option<CartUpdate>, CartError> {
        self.step(id, counter::increment).await
    }

    /// Lowers the quantity of `id` by one. `Ok(None)` at 1 or for an id not on screen.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: &str) -> Result<Option<CartUpdate>, CartError> {
        self.step(id, counter::decrement).await
    }

    async fn step(&self, id: &str, next: fn(u32) -> Option<u32>) -> Result<Option<CartUpdate>, CartError> {
        let edited = self
            .state
            .borrow()
            .item(id)
            .and_then(|item| next(item.count).map(|count| item.with_count(count)));

        match edited {
            Some(item) => self.update_item(item).await.map(Some),
            None => {
                debug!("Quantity unchanged");
                Ok(None)
            }
        }
    }

    /// Empties the store and publishes an empty cart without re-reading it.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), CartError> {
        self.delete_cart.execute().await?;
        self.state.send_modify(|state| *state = state.cleared());
        info!("Cart cleared");
        Ok(())
    }

    /// Places the order. The order-sent state is entered only on success.
    #[instrument(skip(self))]
    pub async fn send_order(&self) -> Result<(), OrderError> {
        self.send_order.execute().await?;
        self.state.send_modify(|state| *state = state.with_order_sent());
        Ok(())
    }

    /// Runs [`send_order`](Self::send_order) in the background.
    ///
    /// Aborting the returned handle cancels the request; the state is then left as it was.
    pub fn spawn_send_order(self: &Arc<Self>) -> JoinHandle<Result<(), OrderError>> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.send_order().await })
    }
}
