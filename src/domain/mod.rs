pub mod cart_item;
pub mod seed;

pub use cart_item::*;
pub use seed::*;
