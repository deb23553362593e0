//! Presentation-side helpers: counter policy, labels and a text view of the cart.

pub mod counter;
pub mod labels;
pub mod view;

pub use view::CartView;
