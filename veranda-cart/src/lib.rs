pub mod adapter;
pub mod models;

pub use adapter::quote_to_cart_lines;
pub use models::{CartLine, CartLineKind};
