//! Observable cart state for the presentation layer.

pub mod cart_controller;
pub mod state;

pub use cart_controller::*;
pub use state::*;
