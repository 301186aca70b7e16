//! Completed checkout orders.
//!
//! This crate holds the order as it looks once checkout has finished: totals,
//! the store it was placed in, and its lines. Pure domain logic (no IO).

pub mod order;

pub use order::{CheckoutOrder, OrderLine};
