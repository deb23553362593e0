//! # Shopping cart core
//!
//! An in-memory cart with quantity counters and a checkout call, built from
//! a single-writer store actor and a controller that publishes snapshots.
//!
//! - **Domain** - the validated cart line and the demo seed → [`domain::CartItem`]
//! - **Store** - an actor that owns the items, reached through a client → [`actor_framework::ResourceActor`], [`clients::CartClient`]
//! - **Operations** - one-call seams over the store → [`operations`]
//! - **Controller** - observable items, total and order-sent flag → [`controller::CartController`]
//! - **Checkout** - `POST /api/send-test-order` → [`clients::OrderClient`]
//! - **System** - configuration, tracing and wiring → [`app_system::CartSystem`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use shopping_cart::app_system::{CartSystem, Config};
//!
//! let system = CartSystem::new(&Config::default())?;
//! system.controller.load().await?;
//! system.controller.increment("2").await?;
//! system.controller.send_order().await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart_actor;
pub mod clients;
pub mod controller;
pub mod domain;
pub mod operations;
pub mod presentation;

#[cfg(test)]
mod mock_framework;
