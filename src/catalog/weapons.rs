//! Weapon loadout catalog loaded from `weapons.properties`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use super::resource::load_resource;

/// Parse `weapons.properties` into a map of aircraft display name to the
/// weapon codes it accepts.
///
/// The first token of each line reads `<display-name>.<weapon-code>`; the
/// partition happens on the first `.` only, weapon codes may contain dots.
pub fn parse_weapons(text: &str) -> HashMap<String, Vec<String>> {
    let mut weapons: HashMap<String, Vec<String>> = HashMap::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let (aircraft, weapon) = token.split_once('.').unwrap_or((token, ""));
        weapons
            .entry(aircraft.to_string())
            .or_default()
            .push(weapon.to_string());
    }
    weapons
}

/// Read the weapon definitions from the standard installation.
pub fn read_weapons(root: &Path) -> Result<HashMap<String, Vec<String>>> {
    load_resource(
        root,
        &["i18n", "weapons.properties"],
        parse_weapons,
        "weapon definitions",
    )
}
