//! Universal Analytics e-commerce tracker.

use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::builder::ItemBuilder;
use crate::calls::{ADD_ITEM, ADD_TRANSACTION, CallBatch};
use crate::error::TrackingResult;
use crate::model::{ProductAction, Transaction};
use crate::payload::{Payload, filter_null_values};
use crate::render::TemplateRenderer;
use crate::sink::{CodePosition, CodeSink};
use crate::tracker::{CheckoutComplete, Tracker, TrackerConfig};

const CHECKOUT_COMPLETE_TEMPLATE: &str = "checkout_complete";

/// Parameters passed to the `checkout_complete` template.
#[derive(Debug, Serialize)]
struct CheckoutCompleteParameters<'a> {
    transaction: &'a Transaction,
    items: &'a [ProductAction],
    calls: &'a CallBatch,
}

/// Tracks completed checkouts through the analytics.js e-commerce plugin.
///
/// Rendered code is handed to the sink at [`CodePosition::BeforeEnd`].
#[derive(Debug, Clone)]
pub struct UniversalEcommerce<B, R, S> {
    tracker: Tracker<B, R>,
    sink: S,
}

impl<B, R, S> UniversalEcommerce<B, R, S>
where
    B: ItemBuilder,
    R: TemplateRenderer,
    S: CodeSink,
{
    pub fn new(config: TrackerConfig, item_builder: B, renderer: R, sink: S) -> Self {
        Self {
            tracker: Tracker::new(config, item_builder, renderer),
            sink,
        }
    }

    pub fn tracker(&self) -> &Tracker<B, R> {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<B, R, S> CheckoutComplete for UniversalEcommerce<B, R, S>
where
    B: ItemBuilder,
    R: TemplateRenderer,
    S: CodeSink,
{
    type Order = B::Order;

    fn track_checkout_complete(&self, order: &B::Order) -> TrackingResult<()> {
        let builder = self.tracker.item_builder();
        let transaction = builder
            .build_checkout_transaction(order)
            .inspect_err(|e| warn!("checkout transaction build failed: {e}"))?;
        let items = builder
            .build_checkout_items(order)
            .inspect_err(|e| warn!("checkout items build failed: {e}"))?;
        let calls = build_checkout_complete_calls(&transaction, &items);

        debug!(
            transaction_id = transaction.id.as_deref().unwrap_or_default(),
            items = items.len(),
            "tracking checkout complete"
        );

        let parameters = serde_json::to_value(CheckoutCompleteParameters {
            transaction: &transaction,
            items: &items,
            calls: &calls,
        })?;

        let code = self
            .tracker
            .render_template(CHECKOUT_COMPLETE_TEMPLATE, &parameters)
            .inspect_err(|e| warn!("checkout_complete render failed: {e}"))?;

        self.sink.add_additional_code(code, CodePosition::BeforeEnd)
    }
}

/// Batch with one `ecommerce:addTransaction` call and one `ecommerce:addItem`
/// call per item, in item order. The item group exists even with no items.
pub fn build_checkout_complete_calls(transaction: &Transaction, items: &[ProductAction]) -> CallBatch {
    let mut calls = CallBatch::new();
    calls.push(ADD_TRANSACTION, transform_transaction(transaction));
    calls.declare(ADD_ITEM);
    for item in items {
        calls.push(ADD_ITEM, transform_product_action(item));
    }
    calls
}

/// Transaction payload: `id`, `affiliation`, `revenue`, `shipping`, `tax`.
///
/// A missing, empty or `"0"` affiliation becomes `""`; other missing values are
/// left out.
pub fn transform_transaction(transaction: &Transaction) -> Payload {
    let affiliation = transaction
        .affiliation
        .as_deref()
        .filter(|a| !a.is_empty() && *a != "0")
        .unwrap_or_default();

    let mut payload = Payload::new();
    payload.insert("id".into(), json!(transaction.id));
    payload.insert("affiliation".into(), json!(affiliation));
    payload.insert("revenue".into(), json!(transaction.total));
    payload.insert("shipping".into(), json!(transaction.shipping));
    payload.insert("tax".into(), json!(transaction.tax));
    filter_null_values(payload)
}

/// Item payload: `id`, `sku`, `name`, `category`, `price`, `quantity`.
///
/// `id` carries the transaction id and `sku` the item's own id. A missing or
/// zero quantity becomes 1; other missing values are left out.
pub fn transform_product_action(item: &ProductAction) -> Payload {
    let quantity = item.quantity.filter(|q| *q != 0).unwrap_or(1);

    let mut payload = Payload::new();
    payload.insert("id".into(), json!(item.transaction_id));
    payload.insert("sku".into(), json!(item.id));
    payload.insert("name".into(), json!(item.name));
    payload.insert("category".into(), json!(item.category));
    payload.insert("price".into(), json!(item.price));
    payload.insert("quantity".into(), json!(quantity));
    filter_null_values(payload)
}
