//! Cart-specific store logic: how a cart line is patched and what can go wrong.

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::UpdateOutcome;
use crate::domain::CartItem;

/// Outcome of updating one cart line.
pub type CartUpdate = UpdateOutcome<CartItem>;
