//! Section-aware parser for mission files.
//!
//! The mission dialect is line oriented: bracketed `[NAME]` headers open
//! sections, directive lines are `keyword value...` with case-insensitive
//! keywords, and `[SEASON]` values sit at fixed character offsets. The
//! parser runs a forward-only cursor with an explicit dispatch per section
//! kind; each handler returns the number of lines it consumed past its
//! header. Malformed content never fails the parse, it degrades to an
//! absent field plus a warning so one corrupt mission cannot abort a batch.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use log::{debug, info, warn};

use super::data::{MissionAircraft, MissionData, MissionDate};
use crate::catalog::resource::read_resource_text;

/// Section kinds with dedicated handling. Anything else passes through the
/// main loop line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Main,
    Season,
    Wing,
    AircraftWing,
    Chiefs,
    Stationary,
    Buildings,
    Other,
}

fn classify_section(name: &str, wing_sections: &[String]) -> SectionKind {
    if name.eq_ignore_ascii_case("main") {
        SectionKind::Main
    } else if name.eq_ignore_ascii_case("season") {
        SectionKind::Season
    } else if name.eq_ignore_ascii_case("wing") {
        SectionKind::Wing
    } else if name.eq_ignore_ascii_case("chiefs") {
        SectionKind::Chiefs
    } else if name.eq_ignore_ascii_case("nstationary") {
        SectionKind::Stationary
    } else if name.eq_ignore_ascii_case("buildings") {
        SectionKind::Buildings
    } else if wing_sections.iter().any(|wing| wing == name) {
        SectionKind::AircraftWing
    } else {
        SectionKind::Other
    }
}

/// Split a trimmed directive line into its keyword and the remainder.
fn split_directive(line: &str) -> Option<(&str, &str)> {
    line.split_once(char::is_whitespace)
        .map(|(keyword, rest)| (keyword, rest.trim_start()))
}

/// Fixed-offset value slice used by `[SEASON]`. Out-of-range offsets give
/// the empty string.
fn slice_from(line: &str, offset: usize) -> &str {
    line.get(offset..).unwrap_or("")
}

/// Aircraft code from a `class` value: the text after the first `.` when one
/// is present, else the whole first token.
fn extract_aircraft_code(value: &str) -> String {
    let code = match value.split_once('.') {
        Some((_, rest)) => rest.split_whitespace().next(),
        None => value.split_whitespace().next(),
    };
    code.unwrap_or("").to_string()
}

struct MissionParser<'a> {
    lines: Vec<&'a str>,
    file_label: String,
    out: MissionData,
}

impl<'a> MissionParser<'a> {
    fn new(path: &Path, text: &'a str) -> Self {
        let out = MissionData {
            path: path.to_path_buf(),
            ..MissionData::default()
        };
        Self {
            lines: text.lines().collect(),
            file_label: out.mission_name(),
            out,
        }
    }

    fn parse(mut self) -> MissionData {
        let mut idx = 0;
        while idx < self.lines.len() {
            let stripped = self.lines[idx].trim();
            idx += 1;
            if stripped.is_empty() {
                continue;
            }

            // The player declaration can sit in any section; first one wins.
            if stripped.to_ascii_lowercase().contains("player ") {
                if self.out.player_squadron.is_empty() {
                    if let Some(squadron) = stripped.split_whitespace().nth(1) {
                        self.out.player_squadron = squadron.to_string();
                        debug!("Player squadron detected: {squadron}");
                    }
                }
                continue;
            }

            let Some(name) = stripped.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
                continue;
            };
            idx += match classify_section(name, &self.out.wing_sections) {
                SectionKind::Main => self.read_main(idx),
                SectionKind::Season => self.read_season(idx),
                SectionKind::Wing => self.read_wing_list(idx),
                SectionKind::AircraftWing => self.read_aircraft_section(idx),
                SectionKind::Chiefs => self.read_chiefs(idx),
                SectionKind::Stationary => self.read_stationaries(idx),
                SectionKind::Buildings => self.read_buildings(idx),
                SectionKind::Other => 0,
            };
        }
        self.finish()
    }

    /// `[MAIN]`: the next non-blank line must carry the `MAP` directive.
    /// Anything else is left for the main loop, so an unrelated value is
    /// never adopted as the map.
    fn read_main(&mut self, at: usize) -> usize {
        let mut consumed = 0;
        loop {
            match self.lines.get(at + consumed).map(|line| line.trim()) {
                None => {
                    warn!("[MAIN] section incomplete near end of file in {}", self.file_label);
                    return consumed;
                }
                Some("") => consumed += 1,
                Some(line) => {
                    if let Some((keyword, value)) = split_directive(line) {
                        if keyword.eq_ignore_ascii_case("MAP") && !value.is_empty() {
                            debug!("Mission map detected: {value}");
                            self.out.map_name = Some(value.to_string());
                            return consumed + 1;
                        }
                    }
                    warn!("[MAIN] section missing map entry in {}", self.file_label);
                    return consumed;
                }
            }
        }
    }

    /// `[SEASON]`: exactly three lines of `Year <y>` / `Month <m>` /
    /// `Day <d>`. Values are cut at fixed offsets past the keyword, a
    /// documented contract of the dialect rather than a heuristic.
    fn read_season(&mut self, at: usize) -> usize {
        if at + 2 >= self.lines.len() {
            warn!("[SEASON] section incomplete in {}", self.file_label);
            return self.lines.len() - at;
        }
        let year = slice_from(self.lines[at].trim(), 5);
        let month = slice_from(self.lines[at + 1].trim(), 6);
        let day = slice_from(self.lines[at + 2].trim(), 4);

        let date = MissionDate::new(year, month, day);
        self.out.date_is_custom = date.is_custom();
        debug!("Mission date: {year}-{month}-{day}");
        self.out.date = Some(date);
        3
    }

    /// `[WING]`: wing section names, one per line, deduplicated but in
    /// first-seen order. This list seeds which later bracketed sections are
    /// aircraft sections.
    fn read_wing_list(&mut self, at: usize) -> usize {
        let mut consumed = 0;
        while let Some(line) = self.lines.get(at + consumed) {
            let candidate = line.trim();
            if candidate.starts_with('[') {
                break;
            }
            if !candidate.is_empty() && !self.out.wing_sections.iter().any(|wing| wing == candidate) {
                debug!("Registered wing section {candidate}");
                self.out.wing_sections.push(candidate.to_string());
            }
            consumed += 1;
        }
        consumed
    }

    /// A section named after a registered wing: accumulate `skin` values and
    /// the latest `class` code, and commit one aircraft entry per `weapons`
    /// line. A `class` with no following `weapons` yields no entry.
    fn read_aircraft_section(&mut self, at: usize) -> usize {
        let mut consumed = 0;
        let mut skins: BTreeSet<String> = BTreeSet::new();
        let mut aircraft_code = String::new();

        while let Some(line) = self.lines.get(at + consumed) {
            let detail = line.trim();
            if detail.starts_with('[') {
                break;
            }
            consumed += 1;
            if detail.is_empty() {
                continue;
            }

            let lower = detail.to_ascii_lowercase();
            if lower.starts_with("skin") {
                if let Some((_, value)) = split_directive(detail) {
                    skins.insert(value.to_string());
                }
            } else if lower.starts_with("class") {
                let value = split_directive(detail).map_or("", |(_, value)| value);
                aircraft_code = extract_aircraft_code(value);
            } else if lower.starts_with("weapons") {
                let weapon_code = detail.split_whitespace().last().unwrap_or("");
                if !aircraft_code.is_empty() {
                    debug!(
                        "Recorded aircraft {aircraft_code} with weapon {weapon_code} and {} skins",
                        skins.len()
                    );
                    self.out.aircraft.push(MissionAircraft {
                        aircraft_code: aircraft_code.clone(),
                        weapon_code: weapon_code.to_string(),
                        // The skin set is intentionally not cleared: several
                        // weapons lines under one class block each commit an
                        // entry sharing the same skins.
                        skins: skins.clone(),
                    });
                }
            }
        }
        consumed
    }

    /// `[CHIEFS]`: the second token of each line, with any dotted prefix
    /// removed, names a ground unit. Repeats across waypoint blocks are
    /// collapsed by the set.
    fn read_chiefs(&mut self, at: usize) -> usize {
        let mut consumed = 0;
        while let Some(line) = self.lines.get(at + consumed) {
            let entry = line.trim();
            if entry.starts_with('[') {
                break;
            }
            consumed += 1;
            if entry.is_empty() {
                continue;
            }
            if entry.contains("ShipPack") {
                // known data-authoring mistake, flag but keep processing
                warn!("Possible ShipPack mismatch detected in line: {entry}");
            }
            let fields: Vec<&str> = entry.split_whitespace().collect();
            if fields.len() > 1 {
                let chief = fields[1].split_once('.').map_or(fields[1], |(_, rest)| rest);
                debug!("Registered chief {chief}");
                self.out.chiefs.insert(chief.to_string());
            }
        }
        consumed
    }

    /// `[NSTATIONARY]`: the second token is the stationary instance id.
    /// Static planes whose trailing fields read `... null` or `... null 0`
    /// lack a visible marking and are flagged.
    fn read_stationaries(&mut self, at: usize) -> usize {
        let mut consumed = 0;
        while let Some(line) = self.lines.get(at + consumed) {
            let entry = line.trim();
            if entry.starts_with('[') {
                break;
            }
            consumed += 1;
            if entry.is_empty() {
                continue;
            }
            let fields: Vec<&str> = entry.split_whitespace().collect();
            if fields.len() > 1 {
                let name = fields[1];
                self.out.stationaries.insert(name.to_string());
                if name.to_ascii_lowercase().contains("vehicles.planes") && lacks_markings(&fields) {
                    debug!("Stationary plane without markings found: {name}");
                    self.out.stat_planes_without_markings.push(name.to_string());
                }
            }
        }
        consumed
    }

    /// `[BUILDINGS]`: positional placements; the second token of each line
    /// is kept in file order, duplicates included.
    fn read_buildings(&mut self, at: usize) -> usize {
        let mut consumed = 0;
        while let Some(line) = self.lines.get(at + consumed) {
            let entry = line.trim();
            if entry.starts_with('[') {
                break;
            }
            consumed += 1;
            if entry.is_empty() {
                continue;
            }
            let mut fields = entry.split_whitespace();
            if let (Some(_), Some(id)) = (fields.next(), fields.next()) {
                debug!("Registered static object {id}");
                self.out.buildings.push(id.to_string());
            }
        }
        consumed
    }

    fn finish(self) -> MissionData {
        if self.out.player_squadron.is_empty() {
            warn!("Player squadron not found in {}", self.file_label);
        }
        if self.out.map_name.is_none() {
            warn!("Map not detected in {}", self.file_label);
        }
        if self.out.date.is_none() {
            warn!("Date not fully specified in {}", self.file_label);
        }
        debug!(
            "Mission summary for {}: aircraft={} chiefs={} stationaries={} buildings={} wings={}",
            self.file_label,
            self.out.aircraft.len(),
            self.out.chiefs.len(),
            self.out.stationaries.len(),
            self.out.buildings.len(),
            self.out.wing_sections.len(),
        );
        self.out
    }
}

fn lacks_markings(fields: &[&str]) -> bool {
    let last = fields[fields.len() - 1];
    last.eq_ignore_ascii_case("null")
        || (fields.len() >= 3 && last == "0" && fields[fields.len() - 2].eq_ignore_ascii_case("null"))
}

/// Parse the full text of one mission file.
///
/// Total over its input: always returns a record, whatever the section
/// ordering or truncation.
pub fn parse_mission_text(path: &Path, text: &str) -> MissionData {
    MissionParser::new(path, text).parse()
}

/// Read and parse a mission file from disk. Only a missing or unreadable
/// file is an error.
pub fn read_mission(path: &Path) -> Result<MissionData> {
    info!("Reading mission file {}", path.display());
    let text = read_resource_text(path)?;
    Ok(parse_mission_text(path, &text))
}
