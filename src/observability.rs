//! This module provides observability hooks for the dispatch layer.
//!
//! The traversal engine sits under every compute kernel, so visibility into
//! which typed branch a runtime tag resolved to is the first question asked
//! when a kernel misbehaves. The `log_metric!` macro is the primary tool.
//!
//! It is a zero-cost abstraction: the `#[cfg(debug_assertions)]` attribute ensures
//! that the macro and all calls to it are completely compiled out of release builds,
//! imposing no performance penalty in production.

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use kolom_scan::log_metric;
/// let tag = "Int32";
/// log_metric!("event" = "visit_array", "tag" = &tag);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("KOLOM_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}
