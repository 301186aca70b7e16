//! Tracker base: configuration, collaborators and template resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::ItemBuilder;
use crate::error::TrackingResult;
use crate::render::TemplateRenderer;

/// Template prefix used when none is configured.
pub const DEFAULT_TEMPLATE_PREFIX: &str = "tracking/analytics/universal";

/// Environment variable overriding [`TrackerConfig::template_prefix`].
pub const TEMPLATE_PREFIX_ENV: &str = "SHOPTRACK_TEMPLATE_PREFIX";

/// Tracker options, resolved once when the tracker is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Directory-like prefix prepended to every template name.
    /// Defaults to [`DEFAULT_TEMPLATE_PREFIX`].
    pub template_prefix: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            template_prefix: DEFAULT_TEMPLATE_PREFIX.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn with_template_prefix(template_prefix: impl Into<String>) -> Self {
        Self {
            template_prefix: template_prefix.into(),
        }
    }

    /// Defaults, overridden by `SHOPTRACK_TEMPLATE_PREFIX` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through `lookup`.
    /// Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(TEMPLATE_PREFIX_ENV) {
            Some(prefix) if !prefix.trim().is_empty() => Self::with_template_prefix(prefix.trim()),
            _ => Self::default(),
        }
    }
}

/// Capability: track a completed checkout.
pub trait CheckoutComplete {
    type Order;

    fn track_checkout_complete(&self, order: &Self::Order) -> TrackingResult<()>;
}

/// State shared by concrete trackers: options, item builder and renderer.
#[derive(Debug, Clone)]
pub struct Tracker<B, R> {
    config: TrackerConfig,
    item_builder: B,
    renderer: R,
}

impl<B, R> Tracker<B, R>
where
    B: ItemBuilder,
    R: TemplateRenderer,
{
    pub fn new(config: TrackerConfig, item_builder: B, renderer: R) -> Self {
        Self {
            config,
            item_builder,
            renderer,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn item_builder(&self) -> &B {
        &self.item_builder
    }

    /// Full template name: `{template_prefix}/{name}`.
    pub fn template_name(&self, name: &str) -> String {
        let prefix = self.config.template_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        }
    }

    /// Render the prefixed template `name` with `parameters`.
    pub fn render_template(&self, name: &str, parameters: &Value) -> TrackingResult<String> {
        self.renderer.render(&self.template_name(name), parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CheckoutItemBuilder;
    use crate::render::UniversalScriptRenderer;

    fn tracker(config: TrackerConfig) -> Tracker<CheckoutItemBuilder, UniversalScriptRenderer> {
        Tracker::new(config, CheckoutItemBuilder::new(), UniversalScriptRenderer::new())
    }

    #[test]
    fn default_prefix_is_universal_analytics() {
        let t = tracker(TrackerConfig::default());
        assert_eq!(
            t.template_name("checkout_complete"),
            "tracking/analytics/universal/checkout_complete"
        );
    }

    #[test]
    fn configured_prefix_overrides_default() {
        let t = tracker(TrackerConfig::with_template_prefix("shop/ga/"));
        assert_eq!(t.template_name("checkout_complete"), "shop/ga/checkout_complete");
    }

    #[test]
    fn empty_prefix_yields_bare_name() {
        let t = tracker(TrackerConfig::with_template_prefix(""));
        assert_eq!(t.template_name("checkout_complete"), "checkout_complete");
    }

    #[test]
    fn lookup_overrides_prefix_when_set() {
        let config = TrackerConfig::from_lookup(|key| {
            (key == TEMPLATE_PREFIX_ENV).then(|| " custom/prefix ".to_string())
        });
        assert_eq!(config.template_prefix, "custom/prefix");
    }

    #[test]
    fn blank_or_missing_lookup_keeps_default() {
        assert_eq!(TrackerConfig::from_lookup(|_| None), TrackerConfig::default());
        assert_eq!(
            TrackerConfig::from_lookup(|_| Some("   ".into())),
            TrackerConfig::default()
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());

        let config: TrackerConfig =
            serde_json::from_str(r#"{"template_prefix":"theme/analytics"}"#).unwrap();
        assert_eq!(config.template_prefix, "theme/analytics");
    }
}
