//! Skin directory scan.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, ensure};
use log::{debug, info};
use walkdir::WalkDir;

// TODO: support more skin file types if the game ever accepts them (.jpg, .tga)
const SKIN_EXTENSION: &str = "bmp";

/// Scan the skin root and return a mapping of skin folders (lowercased) to
/// the sorted list of skin file names they contain.
///
/// Skin folders are named after aircraft display names; lookups during
/// validation go through the lowercased form.
pub fn read_skins(root: &Path) -> Result<HashMap<String, Vec<String>>> {
    info!("Scanning skins in {}", root.display());
    ensure!(root.is_dir(), "skin directory not found at {}", root.display());

    let mut skins = HashMap::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let mut files: Vec<String> = WalkDir::new(entry.path())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(SKIN_EXTENSION))
                    .unwrap_or(false)
            })
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        files.sort();

        let folder = entry.file_name().to_string_lossy().to_lowercase();
        skins.insert(folder, files);
    }

    debug!("Collected skins for {} folders", skins.len());
    Ok(skins)
}
