//! Analytics tracking for completed checkouts.
//!
//! Turns a completed order into the records an analytics tracker expects
//! (transaction summary, one record per purchased item), groups them into a
//! batch of named tracker calls, renders tracking code from a template and
//! hands the code to an injection sink.
//!
//! The order source, the template renderer and the sink are traits
//! ([`ItemBuilder`], [`TemplateRenderer`], [`CodeSink`]); default
//! implementations are provided for the sales crate's [`CheckoutOrder`],
//! analytics.js script output and an in-memory code collector.
//!
//! [`CheckoutOrder`]: shoptrack_sales::CheckoutOrder

pub mod analytics;
pub mod builder;
pub mod calls;
pub mod error;
pub mod model;
pub mod payload;
pub mod render;
pub mod sink;
pub mod tracker;

pub use analytics::universal::UniversalEcommerce;
pub use builder::{CheckoutItemBuilder, ItemBuilder};
pub use calls::CallBatch;
pub use error::{TrackingError, TrackingResult};
pub use model::{ProductAction, Transaction};
pub use payload::{Payload, filter_null_values};
pub use render::{TemplateRenderer, UniversalScriptRenderer};
pub use sink::{AdditionalCodeCollector, CodePosition, CodeSink};
pub use tracker::{CheckoutComplete, Tracker, TrackerConfig};
