//! Aircraft class catalog loaded from `air.ini`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use log::warn;

use super::resource::load_resource;

const EXCLUDE_PREFIXES: [&str; 5] = ["[", "//", "*", "#", ";"];

fn is_aircraft_line(line: &str) -> bool {
    !line.is_empty() && !EXCLUDE_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Parse `air.ini` into a map of aircraft code to display name.
///
/// Entry lines read `<display-name> air.<code> ...`; the 4-character `air.`
/// prefix is stripped from the key.
pub fn parse_aircraft(text: &str) -> HashMap<String, String> {
    let mut aircraft = HashMap::new();
    for line in text.lines().map(str::trim).filter(|line| is_aircraft_line(line)) {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(name), Some(class_token)) => {
                let code = class_token.get(4..).unwrap_or("");
                aircraft.insert(code.to_string(), name.to_string());
            }
            _ => warn!("Skipping malformed air.ini line: {line}"),
        }
    }
    aircraft
}

/// Read the aircraft class table from the standard installation.
pub fn read_aircraft(root: &Path) -> Result<HashMap<String, String>> {
    load_resource(
        root,
        &["com", "maddox", "il2", "objects", "air.ini"],
        parse_aircraft,
        "aircraft classes",
    )
}
