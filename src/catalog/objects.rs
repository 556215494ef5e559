//! Static scenery object catalog loaded from `static.ini`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use super::resource::load_resource;

/// Parse `static.ini` into the set of static object identifiers.
///
/// Object sections are headed `[buildings.<id>]`; the id is the text after
/// the 11-character `[buildings.` prefix with the trailing `]` removed.
pub fn parse_objects(text: &str) -> HashSet<String> {
    let mut objects = HashSet::new();
    for line in text.lines().map(str::trim) {
        if !line.starts_with("[b") {
            continue;
        }
        if let Some(id) = line.get(11..line.len().saturating_sub(1)) {
            objects.insert(id.to_string());
        }
    }
    objects
}

/// Read the static object identifiers from the standard installation.
pub fn read_objects(root: &Path) -> Result<HashSet<String>> {
    load_resource(
        root,
        &["com", "maddox", "il2", "objects", "static.ini"],
        parse_objects,
        "static objects",
    )
}
