//! Inline image encoding
//!
//! Plot images are embedded directly into the document as base64 text, so
//! the report stays a single self-contained file. Inputs are small plot
//! renders; the whole file is read into memory at once.

use crate::types::{ReportError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;

/// Read an image file and return its base64 payload for a `data:` URI
pub fn encode_image(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ReportError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Encoded image {:?} ({} bytes)", path, bytes.len());
    Ok(STANDARD.encode(&bytes))
}
