//! Squadron registry loaded from `regInfo.properties`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use super::resource::load_resource;

/// Parse `regInfo.properties` into the set of configured squadron ids.
pub fn parse_squadrons(text: &str) -> HashSet<String> {
    let mut squadrons = HashSet::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('/') {
            continue;
        }
        if let Some(id) = line.split_whitespace().next() {
            squadrons.insert(id.to_string());
        }
    }
    squadrons
}

/// Read the squadron registry from the standard installation.
pub fn read_squadrons(root: &Path) -> Result<HashSet<String>> {
    load_resource(
        root,
        &["i18n", "regInfo.properties"],
        parse_squadrons,
        "squadron registry",
    )
}
