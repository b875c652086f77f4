//! Ordering-prefix handling
//!
//! File and folder names may carry a numeric ordering prefix such as
//! `01_Overview` or `20_Residuals`. The prefix controls display order and is
//! stripped from the displayed label. Names without a prefix sort after all
//! prefixed names.

use std::path::{Path, PathBuf};

/// A filesystem name decomposed into its ordering prefix and display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntry {
    /// Numeric value of the leading digit run, if the name has one
    pub prefix: Option<u64>,
    /// The name with the prefix stripped and surrounding whitespace trimmed
    pub display_name: String,
}

/// Decompose a name into `(ordering prefix, display label)`.
///
/// A prefix is a leading run of decimal digits immediately followed by an
/// underscore, with at least one character remaining after it. Anything else
/// (no digits, no underscore, nothing after the underscore, or a digit run
/// too large for `u64`) leaves the whole trimmed name as the label.
pub fn split_order_prefix(name: &str) -> NamedEntry {
    let digits_len = name.chars().take_while(|c| c.is_ascii_digit()).count();

    if digits_len > 0 && name[digits_len..].starts_with('_') {
        let rest = &name[digits_len + 1..];
        if !rest.is_empty() {
            if let Ok(prefix) = name[..digits_len].parse::<u64>() {
                return NamedEntry {
                    prefix: Some(prefix),
                    display_name: rest.trim().to_string(),
                };
            }
        }
    }

    NamedEntry {
        prefix: None,
        display_name: name.trim().to_string(),
    }
}

/// Sort key: prefixed entries first in ascending numeric order, then
/// unprefixed entries, ties broken by the full original name.
fn ordering_key(name: &str) -> (u64, String) {
    let entry = split_order_prefix(name);
    (entry.prefix.unwrap_or(u64::MAX), name.to_string())
}

/// Sort paths by the ordering prefix of their final component.
///
/// Produces a total, deterministic order regardless of how the filesystem
/// iterated the entries.
pub fn sort_by_prefix(paths: &mut [PathBuf]) {
    paths.sort_by_key(|path| ordering_key(&file_name_of(path)));
}

/// Final path component as a string (lossy for non-UTF-8 names)
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File stem (final component minus extension) as a string
pub fn file_stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
