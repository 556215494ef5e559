//! Data extracted from a single mission file.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Baseline campaign start date; any other parsed date marks the mission
/// date as custom.
pub const BASELINE_DATE: (&str, &str, &str) = ("1940", "7", "10");

/// Mission date components from the `[SEASON]` section.
///
/// Components stay as raw strings; the dialect gives no guarantee they are
/// numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl MissionDate {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    /// True when the date differs from [`BASELINE_DATE`].
    pub fn is_custom(&self) -> bool {
        !(self.year == BASELINE_DATE.0 && self.month == BASELINE_DATE.1 && self.day == BASELINE_DATE.2)
    }
}

/// One aircraft assignment recorded for a `weapons` directive inside a wing
/// section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionAircraft {
    /// Aircraft code from the preceding `class` directive.
    pub aircraft_code: String,
    /// Last token of the `weapons` directive line.
    pub weapon_code: String,
    /// Skin names accumulated in the section up to the commit point.
    pub skins: BTreeSet<String>,
}

/// Aggregated mission data, immutable after parsing.
#[derive(Debug, Clone, Default)]
pub struct MissionData {
    /// Source file the record was parsed from.
    pub path: PathBuf,
    /// Map load path from `[MAIN]`, when recognizable.
    pub map_name: Option<String>,
    /// Date from `[SEASON]`, when all three lines were present.
    pub date: Option<MissionDate>,
    /// True iff `date` is present and differs from the campaign baseline.
    pub date_is_custom: bool,
    /// Squadron of the human player; empty when never declared.
    pub player_squadron: String,
    /// Aircraft entries in file order, duplicates legal.
    pub aircraft: Vec<MissionAircraft>,
    /// Ground units referenced anywhere in `[CHIEFS]`, deduplicated.
    pub chiefs: BTreeSet<String>,
    /// Stationary instances referenced in `[NSTATIONARY]`, deduplicated.
    pub stationaries: BTreeSet<String>,
    /// Static object placements in file order, duplicates preserved.
    pub buildings: Vec<String>,
    /// Wing section names in first-seen order.
    pub wing_sections: Vec<String>,
    /// Stationary planes flagged as lacking a visible marking.
    pub stat_planes_without_markings: Vec<String>,
}

impl MissionData {
    /// File name of the mission, for report headings and log records.
    pub fn mission_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
