//! Tracing utilities for generator observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event when a mapper is generated.
///
/// ```ignore
/// automapper_trace_generate!(&table.name, table.columns.len(), flags);
/// ```
#[macro_export]
macro_rules! automapper_trace_generate {
    ($table:expr, $columns:expr, $flags:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %$table,
            columns = $columns,
            flags = ?$flags,
            "automapper.generate"
        );
    };
}

/// Emit a trace-level event for a single rendered statement.
///
/// ```ignore
/// automapper_trace_statement!("update", out.len());
/// ```
#[macro_export]
macro_rules! automapper_trace_statement {
    ($kind:expr, $bytes:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %$kind, bytes = $bytes, "automapper.statement");
    };
}

/// Warn about a predicate-less UPDATE or DELETE.
#[macro_export]
macro_rules! automapper_trace_unkeyed {
    ($table:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            table = %$table,
            "no primary key columns; UPDATE and DELETE will match every row"
        );
    };
}
