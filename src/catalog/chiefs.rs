//! Ground unit (chief) catalog loaded from `chief.ini`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use super::resource::load_resource;

const IGNORED_PREFIXES: [&str; 4] = [";", "[", "moveType", "/"];

/// Parse `chief.ini` into the set of chief identifiers.
///
/// Only the section before `[Ships.` is read; the ship roster uses a
/// different entry format and is referenced elsewhere.
pub fn parse_chiefs(text: &str) -> HashSet<String> {
    let mut chiefs = HashSet::new();
    for line in text.lines().map(str::trim) {
        if line.starts_with("[Ships.") {
            break;
        }
        if line.is_empty() || IGNORED_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            continue;
        }
        if let Some(id) = line.split_whitespace().next() {
            chiefs.insert(id.to_string());
        }
    }
    chiefs
}

/// Read the chief identifiers from the standard installation.
pub fn read_chiefs(root: &Path) -> Result<HashSet<String>> {
    load_resource(
        root,
        &["com", "maddox", "il2", "objects", "chief.ini"],
        parse_chiefs,
        "chief definitions",
    )
}
