//! Ordered batches of named tracker calls.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::payload::Payload;

/// Universal Analytics e-commerce call adding the transaction summary.
pub const ADD_TRANSACTION: &str = "ecommerce:addTransaction";

/// Universal Analytics e-commerce call adding one purchased item.
pub const ADD_ITEM: &str = "ecommerce:addItem";

/// Tracker calls grouped by call name.
///
/// Groups keep the order in which their names were first seen; payloads within
/// a group keep push order. Serializes as a JSON object of arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallBatch {
    groups: Vec<(String, Vec<Payload>)>,
}

impl CallBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a (possibly empty) group exists for `name`.
    pub fn declare(&mut self, name: &str) {
        self.group_mut(name);
    }

    /// Append `payload` to the group for `name`, creating the group if needed.
    pub fn push(&mut self, name: &str, payload: Payload) {
        self.group_mut(name).push(payload);
    }

    /// Payloads recorded for `name`, if the group exists.
    pub fn get(&self, name: &str) -> Option<&[Payload]> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, payloads)| payloads.as_slice())
    }

    /// Iterate groups in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Payload])> {
        self.groups
            .iter()
            .map(|(name, payloads)| (name.as_str(), payloads.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn group_mut(&mut self, name: &str) -> &mut Vec<Payload> {
        let idx = match self.groups.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                self.groups.push((name.to_string(), Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }
}

impl Serialize for CallBatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, payloads) in &self.groups {
            map.serialize_entry(name, payloads)?;
        }
        map.end()
    }
}
