//! Tracking records derived from an order.
//!
//! Every field is optional: item builders fill what the order provides and the
//! analytics transforms drop whatever stays empty.

use serde::{Deserialize, Serialize};

use shoptrack_core::ValueObject;

/// Summary of a completed order as sent to an analytics tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable transaction identifier. Required by trackers.
    pub id: Option<String>,
    /// Store or sales channel name.
    pub affiliation: Option<String>,
    /// Grand total in major currency units.
    pub total: Option<f64>,
    pub shipping: Option<f64>,
    pub tax: Option<f64>,
}

impl ValueObject for Transaction {}

/// One purchased product within a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAction {
    /// Identifier of the owning transaction. Required by trackers.
    pub transaction_id: Option<String>,
    /// Product identifier (SKU / product code).
    pub id: Option<String>,
    /// Product name. Required by trackers.
    pub name: Option<String>,
    /// Category or variation.
    pub category: Option<String>,
    /// Unit price in major currency units.
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ValueObject for ProductAction {}
