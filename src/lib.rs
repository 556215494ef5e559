//! Campaign mission validator for IL-2 Sturmovik 1946.
//!
//! Validates the missions of a campaign against the reference catalogs of
//! the base installation (aircraft, weapons, skins, chiefs, stationary and
//! static objects), reports missing references, and optionally rewrites
//! missions to apply deterministic corrections.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod mission;
pub mod report;
pub mod rewriter;
pub mod validator;

pub use analyzer::{AnalyzerOptions, run};
pub use catalog::{Catalogs, ConversionTable};
pub use config::AppSettings;
pub use mission::{MissionAircraft, MissionData, MissionDate, parse_mission_text, read_mission, read_missions};
pub use rewriter::{AutoFixOptions, apply_auto_fixes, rewrite_mission_text};
pub use validator::{Diagnostic, DiagnosticCategory, MissionReport, validate_mission};
