//! CSV table rendering
//!
//! Each CSV file becomes one `<table>` fragment: the header row styled via
//! `<th>` cells, one `<tr>` per record, no positional index column. A file
//! that cannot be opened or parsed aborts the whole report.

use crate::render::page::escape_html;
use crate::types::{ReportError, Result};
use std::path::Path;

/// Render a CSV file as an HTML `<table>` fragment
pub fn render_table(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut html = String::from("<table class=\"table\">\n<thead>\n<tr>");
    let headers = reader.headers().map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for record in reader.records() {
        let record = record.map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        html.push_str("<tr>");
        for field in record.iter() {
            html.push_str(&format!("<td>{}</td>", escape_html(field)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");

    log::debug!("Rendered table from {:?}", path);
    Ok(html)
}
