//! Tracker call payloads.

use serde_json::{Map, Value};

/// Ordered key/value payload handed to a tracker call.
///
/// Key order is insertion order (`serde_json` is built with `preserve_order`).
pub type Payload = Map<String, Value>;

/// Return a copy of `payload` without entries whose value is `null`.
///
/// Remaining keys keep their original order.
pub fn filter_null_values(payload: Payload) -> Payload {
    payload.into_iter().filter(|(_, v)| !v.is_null()).collect()
}
