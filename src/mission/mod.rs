//! Mission reading: campaign listing, mission records, and the section
//! parser.

#[cfg(test)]
mod tests;

mod campaign;
mod data;
mod parser;

pub use campaign::read_missions;
pub use data::{BASELINE_DATE, MissionAircraft, MissionData, MissionDate};
pub use parser::{parse_mission_text, read_mission};
