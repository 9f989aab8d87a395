//! `blueforge-cart` — the shopping cart entity.

pub mod cart;

pub use cart::{Cart, CartLine, CartStatus};
