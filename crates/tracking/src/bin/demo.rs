//! Tracks a sample checkout and prints the collected `beforeEnd` code.

use std::sync::Arc;

use anyhow::Context;

use shoptrack_core::OrderId;
use shoptrack_sales::CheckoutOrder;
use shoptrack_tracking::{
    AdditionalCodeCollector, CheckoutComplete, CheckoutItemBuilder, CodePosition,
    TrackerConfig, UniversalEcommerce, UniversalScriptRenderer,
};

fn main() -> anyhow::Result<()> {
    shoptrack_observability::init();

    let config = TrackerConfig::from_env();
    tracing::info!(template_prefix = %config.template_prefix, "tracker configured");

    let mut order = CheckoutOrder::new(OrderId::new())
        .with_store_name("Demo Store")
        .with_shipping(495)
        .with_tax(380);
    order.add_line("MUG-01", "Stoneware Mug", Some("Kitchen".into()), 2, 1250)?;
    order.add_line("TEA-07", "Loose Leaf Tea", None, 1, 899)?;

    let collector = Arc::new(AdditionalCodeCollector::new());
    let tracker = UniversalEcommerce::new(
        config,
        CheckoutItemBuilder::new(),
        UniversalScriptRenderer::new(),
        Arc::clone(&collector),
    );

    tracker
        .track_checkout_complete(&order)
        .context("tracking checkout complete")?;

    println!("{}", collector.render(CodePosition::BeforeEnd)?);
    Ok(())
}
