//! Tracing utilities for statement generation and execution.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the generated statement text.
///
/// ```ignore
/// sorm_trace_query!("select", &statement);
/// ```
#[macro_export]
macro_rules! sorm_trace_query {
    ($kind:literal, $sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = $kind, sql = %$sql, "sorm.query");
    };
}

/// Emit a warn-level tracing event when a value cannot be cast.
#[macro_export]
macro_rules! sorm_trace_cast {
    ($reason:expr, $kind:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(reason = %$reason, kind = $kind, "sorm.cast");
    };
}

/// Emit an error-level tracing event for a failed statement.
#[macro_export]
macro_rules! sorm_trace_error {
    ($sql:expr, $err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::error!(sql = %$sql, error = %$err, "sorm.execute");
    };
}
