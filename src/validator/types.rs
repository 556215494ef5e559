use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mission::MissionDate;

/// Category of a cross-reference diagnostic.
///
/// The variant order is the fixed grouping order of the report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCategory {
    MissingAircraft,
    MissingSkin,
    MissingWeapon,
    MissingChief,
    MissingStationary,
    MissingBuilding,
}

impl DiagnosticCategory {
    /// All categories in report order.
    pub const ALL: [DiagnosticCategory; 6] = [
        DiagnosticCategory::MissingAircraft,
        DiagnosticCategory::MissingSkin,
        DiagnosticCategory::MissingWeapon,
        DiagnosticCategory::MissingChief,
        DiagnosticCategory::MissingStationary,
        DiagnosticCategory::MissingBuilding,
    ];

    /// Heading used for this category in the plain-text report.
    pub fn heading(self) -> &'static str {
        match self {
            DiagnosticCategory::MissingAircraft => "### Aircrafts - Not found:",
            DiagnosticCategory::MissingSkin => "### Skins - Missing:",
            DiagnosticCategory::MissingWeapon => "### Weapons - Not found:",
            DiagnosticCategory::MissingChief => "### Chiefs - Not found:",
            DiagnosticCategory::MissingStationary => "### Stationaries - Not found:",
            DiagnosticCategory::MissingBuilding => "### Static objects - Not found:",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticCategory::MissingAircraft => "missing-aircraft",
            DiagnosticCategory::MissingSkin => "missing-skin",
            DiagnosticCategory::MissingWeapon => "missing-weapon",
            DiagnosticCategory::MissingChief => "missing-chief",
            DiagnosticCategory::MissingStationary => "missing-stationary",
            DiagnosticCategory::MissingBuilding => "missing-building",
        };
        write!(f, "{name}")
    }
}

/// One missing or inconsistent reference found in a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    /// The identifier the mission references.
    pub subject: String,
    /// Context of the reference, e.g. the aircraft a skin belongs to.
    /// Empty when the subject stands alone.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Diagnostic {
    pub fn new(category: DiagnosticCategory, subject: impl Into<String>) -> Self {
        Self {
            category,
            subject: subject.into(),
            detail: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}: {}", self.category, self.subject)
        } else {
            write!(f, "{}: {} ({})", self.category, self.subject, self.detail)
        }
    }
}

/// Per-mission payload of the machine-readable report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionReport {
    pub mission_name: String,
    pub map_name: Option<String>,
    pub date: Option<MissionDate>,
    pub date_is_custom: bool,
    pub diagnostics: Vec<Diagnostic>,
    pub stat_planes_without_markings: Vec<String>,
}
