//! Input tree collection
//!
//! Walks exactly one level of subfolders under the input root and gathers the
//! CSV and PNG files inside each, in deterministic display order. Everything
//! else (loose files at the top level, nested directories, other extensions)
//! is skipped.

use crate::naming;
use crate::types::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The file inventory of one top-level subfolder, before rendering
#[derive(Debug, Clone)]
pub struct SectionFiles {
    /// Full folder name, ordering prefix included
    pub folder_name: String,
    /// CSV files in display order
    pub csv_files: Vec<PathBuf>,
    /// PNG files in display order
    pub png_files: Vec<PathBuf>,
}

/// Collect the per-section file inventories under `input`.
///
/// Fails before touching any section if `input` is missing or not a
/// directory. Subfolders are returned in ordering-prefix order.
pub fn collect_sections(input: &Path) -> Result<Vec<SectionFiles>> {
    if !input.is_dir() {
        return Err(ReportError::InvalidInputRoot(input.to_path_buf()));
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            folders.push(path);
        } else {
            log::debug!("Skipping non-directory entry: {:?}", path);
        }
    }
    naming::sort_by_prefix(&mut folders);

    let mut sections = Vec::with_capacity(folders.len());
    for folder in folders {
        let folder_name = naming::file_name_of(&folder);
        let csv_files = files_with_extension(&folder, "csv")?;
        let png_files = files_with_extension(&folder, "png")?;
        log::debug!(
            "Collected section {:?}: {} tables, {} plots",
            folder_name,
            csv_files.len(),
            png_files.len()
        );
        sections.push(SectionFiles {
            folder_name,
            csv_files,
            png_files,
        });
    }

    Ok(sections)
}

/// List the files directly inside `folder` with the given extension, sorted
fn files_with_extension(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(extension)
        {
            files.push(path);
        }
    }
    naming::sort_by_prefix(&mut files);
    Ok(files)
}
