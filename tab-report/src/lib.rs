//! Tab Report Library
//!
//! Turns a directory of result subfolders into a single self-contained HTML
//! report. Each immediate subfolder becomes one clickable tab holding its CSV
//! files rendered as tables and its PNG plots embedded inline as base64.
//!
//! # Architecture
//!
//! The library is a single-pass, single-threaded pipeline:
//! - Decomposes file and folder names into an optional numeric ordering
//!   prefix and a display label
//! - Walks one level of subfolders in deterministic prefix order
//! - Renders CSV files to `<table>` fragments and PNG files to inline
//!   `data:` URIs
//! - Assembles everything into one HTML page with a static tab-switching
//!   script and writes it once
//!
//! The library does NOT:
//! - Validate CSV schemas
//! - Stream or regenerate incrementally
//! - Recover from a broken input (the first unreadable CSV or image aborts
//!   the run; no partial report is written)
//!
//! Terminal output and argument handling live in the application layer
//! (tab-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use tab_report::{ReportConfig, ReportGenerator};
//! use std::path::Path;
//!
//! let config = ReportConfig::new().with_title("Nightly Metrics");
//! let generator = ReportGenerator::with_config(config);
//! generator
//!     .write_report(Path::new("results"), Path::new("report.html"))
//!     .unwrap();
//! ```

// Public modules
pub mod config;
pub mod generator;
pub mod naming;
pub mod types;

// Re-export main types for convenience
pub use config::ReportConfig;
pub use generator::ReportGenerator;
pub use naming::{split_order_prefix, NamedEntry};
pub use types::{RenderedPlot, RenderedTable, ReportError, ReportSection, Result};

// Internal modules (not exposed in public API)
mod collect;
mod render;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a default generator rejects a missing input root
        let generator = ReportGenerator::new();
        let err = generator
            .render_to_string(std::path::Path::new("/no/such/input"))
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidInputRoot(_)));
    }
}
