//! Item builders: turn an order into tracking records.

use shoptrack_sales::{CheckoutOrder, OrderLine};

use crate::error::TrackingResult;
use crate::model::{ProductAction, Transaction};

/// Derives tracking records from an order.
///
/// Trackers are generic over the builder so they never look inside the order
/// type themselves.
pub trait ItemBuilder {
    type Order;

    /// Build the transaction summary for a completed checkout.
    fn build_checkout_transaction(&self, order: &Self::Order) -> TrackingResult<Transaction>;

    /// Build one record per purchased item, in order-line order.
    fn build_checkout_items(&self, order: &Self::Order) -> TrackingResult<Vec<ProductAction>>;
}

impl<B: ItemBuilder + ?Sized> ItemBuilder for &B {
    type Order = B::Order;

    fn build_checkout_transaction(&self, order: &Self::Order) -> TrackingResult<Transaction> {
        (**self).build_checkout_transaction(order)
    }

    fn build_checkout_items(&self, order: &Self::Order) -> TrackingResult<Vec<ProductAction>> {
        (**self).build_checkout_items(order)
    }
}

/// Item builder for [`CheckoutOrder`].
///
/// Order amounts are stored in minor units; trackers expect major units, so
/// every amount is divided by `minor_units_per_major` (100 by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutItemBuilder {
    minor_units_per_major: u32,
}

impl Default for CheckoutItemBuilder {
    fn default() -> Self {
        Self {
            minor_units_per_major: 100,
        }
    }
}

impl CheckoutItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for currencies with a different minor unit (e.g. 1 for JPY).
    /// A value of zero is treated as 1.
    pub fn with_minor_units_per_major(minor_units_per_major: u32) -> Self {
        Self {
            minor_units_per_major: minor_units_per_major.max(1),
        }
    }

    fn to_major(&self, minor: u64) -> f64 {
        minor as f64 / f64::from(self.minor_units_per_major)
    }

    fn product_action(&self, transaction_id: &str, line: &OrderLine) -> ProductAction {
        ProductAction {
            transaction_id: Some(transaction_id.to_string()),
            id: Some(line.sku.clone()),
            name: Some(line.name.clone()),
            category: line.category.clone(),
            price: Some(self.to_major(line.unit_price)),
            quantity: Some(line.quantity),
        }
    }
}

impl ItemBuilder for CheckoutItemBuilder {
    type Order = CheckoutOrder;

    fn build_checkout_transaction(&self, order: &CheckoutOrder) -> TrackingResult<Transaction> {
        Ok(Transaction {
            id: Some(order.id().to_string()),
            affiliation: order.store_name().map(str::to_string),
            total: Some(self.to_major(order.grand_total())),
            shipping: order.shipping().map(|v| self.to_major(v)),
            tax: order.tax().map(|v| self.to_major(v)),
        })
    }

    fn build_checkout_items(&self, order: &CheckoutOrder) -> TrackingResult<Vec<ProductAction>> {
        let transaction_id = order.id().to_string();
        Ok(order
            .lines()
            .iter()
            .map(|line| self.product_action(&transaction_id, line))
            .collect())
    }
}
