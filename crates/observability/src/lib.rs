//! Tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, writers).
pub mod tracing;

pub use self::tracing::{LogTarget, ObservabilityError};

/// Initialize process-wide logging for `target`.
///
/// Safe to call multiple times; only the first successful call installs a
/// subscriber.
pub fn init(target: &LogTarget) -> Result<(), ObservabilityError> {
    self::tracing::init(target)
}
