//! Cross-reference validation of one mission against the catalogs.

use std::collections::BTreeSet;

use log::debug;

use super::types::{Diagnostic, DiagnosticCategory};
use crate::catalog::Catalogs;
use crate::mission::MissionData;

/// Validate a mission record against the reference catalogs.
///
/// Pure function of its inputs: no I/O, no mutation. Diagnostics come back
/// grouped by category in the order of [`DiagnosticCategory::ALL`] and
/// sorted by subject within each category, so re-running on identical
/// inputs yields byte-identical output.
pub fn validate_mission(mission: &MissionData, catalogs: &Catalogs) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for entry in &mission.aircraft {
        let Some(display_name) = catalogs.aircraft.get(&entry.aircraft_code) else {
            // Without the canonical display name neither skins nor weapons
            // can be resolved, so remaining checks for this entry are moot.
            diagnostics.push(Diagnostic::new(
                DiagnosticCategory::MissingAircraft,
                &entry.aircraft_code,
            ));
            continue;
        };

        // Skin folders are keyed by the lowercased display name.
        let available_skins = catalogs.skins.get(&display_name.to_lowercase());
        for skin in &entry.skins {
            if available_skins.is_none_or(|list| !list.contains(skin)) {
                diagnostics.push(
                    Diagnostic::new(DiagnosticCategory::MissingSkin, skin)
                        .with_detail(&entry.aircraft_code),
                );
            }
        }

        // The weapon table is keyed by the display name as-is.
        let weapon_options = catalogs.weapons.get(display_name);
        if weapon_options.is_none_or(|codes| !codes.contains(&entry.weapon_code)) {
            diagnostics.push(
                Diagnostic::new(DiagnosticCategory::MissingWeapon, &entry.weapon_code)
                    .with_detail(&entry.aircraft_code),
            );
        }
    }

    for chief in &mission.chiefs {
        if !catalogs.chiefs.contains(chief) {
            diagnostics.push(Diagnostic::new(DiagnosticCategory::MissingChief, chief));
        }
    }

    for stationary in &mission.stationaries {
        if !catalogs.stationaries.contains_key(stationary) {
            diagnostics.push(Diagnostic::new(
                DiagnosticCategory::MissingStationary,
                stationary,
            ));
        }
    }

    // Buildings are positional placements; for the existence check the
    // duplicates collapse.
    let unique_buildings: BTreeSet<&String> = mission.buildings.iter().collect();
    for building in unique_buildings {
        if !catalogs.objects.contains(building.as_str()) {
            diagnostics.push(Diagnostic::new(DiagnosticCategory::MissingBuilding, building));
        }
    }

    diagnostics.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.subject.cmp(&b.subject))
            .then_with(|| a.detail.cmp(&b.detail))
    });

    debug!(
        "Validation of {} produced {} diagnostics",
        mission.mission_name(),
        diagnostics.len()
    );
    diagnostics
}
