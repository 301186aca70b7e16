//! Logging setup shared by shoptrack binaries.

/// Initialize process-wide logging with the `info` default filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Subscriber configuration (filters, JSON formatting).
pub mod tracing;
