//! Stationary object catalog loaded from `stationary.ini`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use log::warn;

use super::resource::load_resource;

const EXCLUDE_PREFIXES: [&str; 4] = ["//", "[", "#", ";"];

fn is_stationary_line(line: &str) -> bool {
    !line.is_empty() && !EXCLUDE_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Parse `stationary.ini` into a map of stationary id to display name.
pub fn parse_stationaries(text: &str) -> HashMap<String, String> {
    let mut stationaries = HashMap::new();
    for line in text.lines().map(str::trim).filter(|line| is_stationary_line(line)) {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(name), Some(id)) => {
                stationaries.insert(id.to_string(), name.to_string());
            }
            _ => warn!("Skipping malformed stationary.ini line: {line}"),
        }
    }
    stationaries
}

/// Read the stationary definitions from the standard installation.
pub fn read_stationaries(root: &Path) -> Result<HashMap<String, String>> {
    load_resource(
        root,
        &["com", "maddox", "il2", "objects", "stationary.ini"],
        parse_stationaries,
        "stationary definitions",
    )
}
