//! `shoptrack-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no rendering, no IO).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::OrderId;
pub use value_object::ValueObject;
