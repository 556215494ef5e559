//! Map catalog loaded from `Maps/all.ini`.

use std::path::Path;

use anyhow::Result;

use super::resource::load_resource;

const EXCLUDE_PREFIXES: [&str; 2] = [";", "["];

/// Parse `all.ini` into the list of map load paths.
///
/// Entry lines read `<name> <path>/load.ini`; the second column is the value
/// missions reference from their `[MAIN]` section.
pub fn parse_maps(text: &str) -> Vec<String> {
    let mut maps = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || EXCLUDE_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            continue;
        }
        if let Some(path) = line.split_whitespace().nth(1) {
            maps.push(path.to_string());
        }
    }
    maps
}

/// Read the map list from the maps root.
pub fn read_maps(root: &Path) -> Result<Vec<String>> {
    load_resource(root, &["Maps", "all.ini"], parse_maps, "map list")
}
