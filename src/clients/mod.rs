//! Handles used to talk to the cart store and to the order endpoint.

pub mod cart_client;
pub mod order_client;

pub use cart_client::*;
pub use order_client::*;
