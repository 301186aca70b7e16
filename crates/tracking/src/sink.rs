//! Injection sinks for rendered tracking code.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{TrackingError, TrackingResult};

/// Where in the analytics snippet a code block is placed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodePosition {
    BeforeInit,
    BeforePageview,
    AfterPageview,
    /// Just before the snippet's closing marker.
    BeforeEnd,
}

/// Accepts rendered code blocks for later output.
pub trait CodeSink {
    fn add_additional_code(&self, code: String, position: CodePosition) -> TrackingResult<()>;
}

impl<S: CodeSink + ?Sized> CodeSink for &S {
    fn add_additional_code(&self, code: String, position: CodePosition) -> TrackingResult<()> {
        (**self).add_additional_code(code, position)
    }
}

impl<S: CodeSink + ?Sized> CodeSink for Arc<S> {
    fn add_additional_code(&self, code: String, position: CodePosition) -> TrackingResult<()> {
        (**self).add_additional_code(code, position)
    }
}

/// In-memory code accumulator, keyed by position.
///
/// Blocks are kept in insertion order per position. Flushing into a page is
/// left to whoever owns the collector.
#[derive(Debug, Default)]
pub struct AdditionalCodeCollector {
    blocks: RwLock<HashMap<CodePosition, Vec<String>>>,
}

impl AdditionalCodeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code blocks collected for `position`.
    pub fn code_for(&self, position: CodePosition) -> TrackingResult<Vec<String>> {
        let blocks = self
            .blocks
            .read()
            .map_err(|_| TrackingError::sink("lock poisoned"))?;
        Ok(blocks.get(&position).cloned().unwrap_or_default())
    }

    /// Collected blocks for `position`, joined by newlines.
    pub fn render(&self, position: CodePosition) -> TrackingResult<String> {
        Ok(self.code_for(position)?.join("\n"))
    }

    /// Drop everything collected so far.
    pub fn clear(&self) -> TrackingResult<()> {
        self.blocks
            .write()
            .map_err(|_| TrackingError::sink("lock poisoned"))?
            .clear();
        Ok(())
    }
}

impl CodeSink for AdditionalCodeCollector {
    fn add_additional_code(&self, code: String, position: CodePosition) -> TrackingResult<()> {
        let mut blocks = self
            .blocks
            .write()
            .map_err(|_| TrackingError::sink("lock poisoned"))?;
        blocks.entry(position).or_default().push(code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_per_position_in_insertion_order() {
        let collector = AdditionalCodeCollector::new();
        collector
            .add_additional_code("a();".into(), CodePosition::BeforeEnd)
            .unwrap();
        collector
            .add_additional_code("init();".into(), CodePosition::BeforeInit)
            .unwrap();
        collector
            .add_additional_code("b();".into(), CodePosition::BeforeEnd)
            .unwrap();

        assert_eq!(
            collector.code_for(CodePosition::BeforeEnd).unwrap(),
            vec!["a();", "b();"]
        );
        assert_eq!(collector.render(CodePosition::BeforeEnd).unwrap(), "a();\nb();");
        assert_eq!(
            collector.code_for(CodePosition::BeforeInit).unwrap(),
            vec!["init();"]
        );
        assert!(
            collector
                .code_for(CodePosition::AfterPageview)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn clear_drops_all_positions() {
        let collector = AdditionalCodeCollector::new();
        collector
            .add_additional_code("a();".into(), CodePosition::BeforeEnd)
            .unwrap();
        collector.clear().unwrap();
        assert!(collector.code_for(CodePosition::BeforeEnd).unwrap().is_empty());
    }

    #[test]
    fn shared_through_arc() {
        let collector = Arc::new(AdditionalCodeCollector::new());
        let sink: Arc<AdditionalCodeCollector> = Arc::clone(&collector);
        sink.add_additional_code("x();".into(), CodePosition::BeforePageview)
            .unwrap();
        assert_eq!(
            collector.render(CodePosition::BeforePageview).unwrap(),
            "x();"
        );
    }

    #[test]
    fn positions_serialize_camel_case() {
        assert_eq!(
            serde_json::to_string(&CodePosition::BeforeEnd).unwrap(),
            "\"beforeEnd\""
        );
    }
}
