//! Cross-reference validation of mission records against the catalogs.

pub mod types;
mod validator;

pub use types::{Diagnostic, DiagnosticCategory, MissionReport};
pub use validator::validate_mission;
