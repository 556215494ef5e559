//! Shared helpers for loading text-based game resources.
//!
//! Catalog files ship with the game in a zoo of encodings; everything that
//! matters for validation is ASCII, so invalid UTF-8 degrades to a lossy
//! decode with a warning instead of failing the load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

/// Read a text file, falling back to lossy decoding for non-UTF-8 content.
///
/// A missing file is an error; undecodable bytes are not.
pub fn read_resource_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                "Failed to decode {} as UTF-8; decoding lossily",
                path.display()
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Open a resource file under `root` and delegate parsing to `parse`.
///
/// Centralises path resolution, logging, and error context for the catalog
/// readers, which all follow the same single-pass pattern.
pub fn load_resource<T>(
    root: &Path,
    relative: &[&str],
    parse: impl FnOnce(&str) -> T,
    label: &str,
) -> Result<T> {
    let mut path = PathBuf::from(root);
    for part in relative {
        path.push(part);
    }
    info!("Loading {label} from {}", path.display());

    let text = read_resource_text(&path).with_context(|| format!("{label} not available"))?;
    let result = parse(&text);
    debug!("Finished loading {label}");
    Ok(result)
}
