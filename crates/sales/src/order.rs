use serde::{Deserialize, Serialize};

use shoptrack_core::{DomainError, DomainResult, OrderId, ValueObject};

/// Order line: product, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: String,
    pub name: String,
    /// Category or variation label shown in reports.
    pub category: Option<String>,
    pub quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

impl ValueObject for OrderLine {}

impl OrderLine {
    /// Line total in smallest currency unit.
    pub fn total(&self) -> u64 {
        self.unit_price.saturating_mul(self.quantity.max(0) as u64)
    }
}

/// A completed checkout order.
///
/// Amounts are kept in minor units; `shipping` and `tax` are `None` when the
/// shop did not charge (or did not compute) them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    id: OrderId,
    store_name: Option<String>,
    shipping: Option<u64>,
    tax: Option<u64>,
    lines: Vec<OrderLine>,
}

impl CheckoutOrder {
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            store_name: None,
            shipping: None,
            tax: None,
            lines: Vec::new(),
        }
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_shipping(mut self, shipping: u64) -> Self {
        self.shipping = Some(shipping);
        self
    }

    pub fn with_tax(mut self, tax: u64) -> Self {
        self.tax = Some(tax);
        self
    }

    /// Append a line; lines keep insertion order.
    pub fn add_line(
        &mut self,
        sku: impl Into<String>,
        name: impl Into<String>,
        category: Option<String>,
        quantity: i64,
        unit_price: u64,
    ) -> DomainResult<&OrderLine> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("sku must not be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        self.lines.push(OrderLine {
            sku,
            name,
            category,
            quantity,
            unit_price,
        });

        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn shipping(&self) -> Option<u64> {
        self.shipping
    }

    pub fn tax(&self) -> Option<u64> {
        self.tax
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.total()))
    }

    /// Subtotal plus shipping and tax.
    pub fn grand_total(&self) -> u64 {
        self.subtotal()
            .saturating_add(self.shipping.unwrap_or(0))
            .saturating_add(self.tax.unwrap_or(0))
    }
}
