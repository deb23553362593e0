use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::{CartClient, OrderClient};
use crate::controller::CartController;
use crate::domain::{seed_items, CartItem};
use crate::operations::{DeleteCart, GetCartItems, SendTestOrder, UpdateCartItem};
use super::config::Config;
use super::error::SystemError;

/// Wires the cart store, the order client and the controller together.
///
/// Nothing here is global: each `CartSystem` owns its own store seeded with
/// the demo items, so two systems never share cart state.
pub struct CartSystem {
    pub controller: Arc<CartController<OrderClient>>,
    pub cart_client: CartClient,
    store_handle: JoinHandle<()>,
}

impl CartSystem {
    pub fn new(config: &Config) -> Result<Self, SystemError> {
        Self::with_seed(config, seed_items())
    }

    /// Same as [`CartSystem::new`] but with caller-provided starting items.
    pub fn with_seed(config: &Config, seed: Vec<CartItem>) -> Result<Self, SystemError> {
        config.validate()?;

        let (store, inner) = ResourceActor::<CartItem>::new(config.channel_buffer, seed);
        let cart_client = CartClient::new(inner);
        let store_handle = tokio::spawn(store.run());

        let orders = OrderClient::new(&config.api_base_url, config.request_timeout())?;
        info!(url = %orders.url(), "Order endpoint configured");

        let controller = CartController::new(
            GetCartItems::new(cart_client.clone()),
            UpdateCartItem::new(cart_client.clone()),
            DeleteCart::new(cart_client.clone()),
            SendTestOrder::new(orders),
        );

        Ok(Self {
            controller: Arc::new(controller),
            cart_client,
            store_handle,
        })
    }

    /// Drops every client handle and waits for the store actor to stop.
    ///
    /// Clones of the controller or client held elsewhere keep the store alive,
    /// so callers must release them first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down cart system...");
        drop(self.controller);
        drop(self.cart_client);

        if let Err(e) = self.store_handle.await {
            error!(error = %e, "Cart store task failed");
            return Err(SystemError::ActorJoin(e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
