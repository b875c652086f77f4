//! Core types for the report library
//!
//! This module defines the entities assembled during one generation pass and
//! the error surface of the library. All entities are built in memory, rendered
//! once, and dropped - nothing outlives a single generation call except the
//! written output file.

use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur during report generation
///
/// Generation is all-or-nothing: the first error aborts the run and no output
/// file is written.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid input root: {0:?} does not exist or is not a directory")]
    InvalidInputRoot(PathBuf),

    #[error("Failed to render CSV table {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A CSV file rendered as an HTML table fragment
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    /// Display name (file stem with the ordering prefix stripped)
    pub name: String,
    /// Complete `<table>` fragment, header row included, no index column
    pub html: String,
}

/// A PNG file encoded for inline embedding
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPlot {
    /// Display name (file stem with the ordering prefix stripped)
    pub name: String,
    /// Base64 payload for a `data:image/png;base64,` URI
    pub payload: String,
}

/// One tab of the report, built from one top-level subfolder
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    /// Display name (folder name with the ordering prefix stripped)
    pub name: String,
    /// Sanitized, collision-free identifier used for the tab markup
    pub tab_id: String,
    /// Rendered tables in display order
    pub tables: Vec<RenderedTable>,
    /// Rendered plots in display order
    pub plots: Vec<RenderedPlot>,
}

impl ReportSection {
    /// True if the section has neither tables nor plots
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.plots.is_empty()
    }
}
