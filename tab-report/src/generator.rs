//! Main generator API
//!
//! This module provides the primary interface for the report library.
//! The ReportGenerator struct is the entry point: it walks the input tree,
//! renders every section, and writes the finished document in one pass.

use crate::collect;
use crate::config::ReportConfig;
use crate::naming;
use crate::render;
use crate::render::TabIds;
use crate::types::{RenderedPlot, RenderedTable, ReportError, ReportSection, Result};
use std::fs;
use std::path::Path;

/// The main generator struct - entry point for report generation
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a generator with default configuration
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    /// Create a generator with the given configuration
    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render the report for `input` and return the HTML document as a string.
    ///
    /// Sections appear in ordering-prefix order; within each section the
    /// tables come first, then the plots, each in ordering-prefix order. The
    /// first unreadable or malformed input aborts the whole render.
    pub fn render_to_string(&self, input: &Path) -> Result<String> {
        log::info!("Generating report from {:?}", input);

        let inventories = collect::collect_sections(input)?;
        let mut tab_ids = TabIds::new();
        let mut sections = Vec::with_capacity(inventories.len());

        for inventory in &inventories {
            let name = naming::split_order_prefix(&inventory.folder_name).display_name;
            let tab_id = tab_ids.allocate(&name);
            log::info!(
                "Rendering section {:?} ({} tables, {} plots)",
                name,
                inventory.csv_files.len(),
                inventory.png_files.len()
            );

            let mut tables = Vec::with_capacity(inventory.csv_files.len());
            for csv_path in &inventory.csv_files {
                tables.push(RenderedTable {
                    name: naming::split_order_prefix(&naming::file_stem_of(csv_path))
                        .display_name,
                    html: render::render_table(csv_path)?,
                });
            }

            let mut plots = Vec::with_capacity(inventory.png_files.len());
            for png_path in &inventory.png_files {
                plots.push(RenderedPlot {
                    name: naming::split_order_prefix(&naming::file_stem_of(png_path))
                        .display_name,
                    payload: render::encode_image(png_path)?,
                });
            }

            sections.push(ReportSection {
                name,
                tab_id,
                tables,
                plots,
            });
        }

        log::info!("Rendered {} sections", sections.len());
        Ok(render::render_page(&self.config, &sections))
    }

    /// Render the report for `input` and write it to `output`.
    ///
    /// The document is written only after every section rendered
    /// successfully; a failed run leaves no output file behind. An existing
    /// file at `output` is fully overwritten.
    ///
    /// # Example
    /// ```no_run
    /// use tab_report::{ReportConfig, ReportGenerator};
    /// use std::path::Path;
    ///
    /// let generator = ReportGenerator::with_config(
    ///     ReportConfig::new().with_title("Nightly Metrics"),
    /// );
    /// generator
    ///     .write_report(Path::new("results"), Path::new("report.html"))
    ///     .unwrap();
    /// ```
    pub fn write_report(&self, input: &Path, output: &Path) -> Result<()> {
        let html = self.render_to_string(input)?;
        fs::write(output, html).map_err(|source| ReportError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        log::info!("Report written to {:?}", output);
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
