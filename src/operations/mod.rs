//! Named seams between the store and the controller.
//!
//! Each operation forwards one call and passes the result through untouched.

use crate::cart_actor::{CartError, CartUpdate};
use crate::clients::{CartClient, OrderError, OrderSubmitter};
use crate::domain::CartItem;

#[derive(Clone)]
pub struct GetCartItems {
    cart: CartClient,
}

impl GetCartItems {
    pub fn new(cart: CartClient) -> Self {
        Self { cart }
    }

    pub async fn execute(&self) -> Result<Vec<CartItem>, CartError> {
        self.cart.get_items().await
    }
}

#[derive(Clone)]
pub struct UpdateCartItem {
    cart: CartClient,
}

impl UpdateCartItem {
    pub fn new(cart: CartClient) -> Self {
        Self { cart }
    }

    pub async fn execute(&self, item: CartItem) -> Result<CartUpdate, CartError> {
        self.cart.update_item(item).await
    }
}

#[derive(Clone)]
pub struct DeleteCart {
    cart: CartClient,
}

impl DeleteCart {
    pub fn new(cart: CartClient) -> Self {
        Self { cart }
    }

    pub async fn execute(&self) -> Result<(), CartError> {
        self.cart.clear().await
    }
}

#[derive(Clone)]
pub struct SendTestOrder<O> {
    orders: O,
}

impl<O: OrderSubmitter> SendTestOrder<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    pub async fn execute(&self) -> Result<(), OrderError> {
        self.orders.send_test_order().await
    }
}
