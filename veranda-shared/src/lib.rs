pub mod models;
pub mod money;

pub use money::{format_usd, round_half_up_cents};
