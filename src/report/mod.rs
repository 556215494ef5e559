//! Plain-text report rendering and report-side artifacts.
//!
//! Everything here writes to a caller-provided stream; the orchestrator
//! decides whether that is the report file or stdout.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::catalog::Catalogs;
use crate::catalog::resource::read_resource_text;
use crate::mission::MissionData;
use crate::validator::{Diagnostic, DiagnosticCategory};

/// Write the full report block for one mission.
pub fn write_mission_report<W: Write>(
    out: &mut W,
    mission: &MissionData,
    diagnostics: &[Diagnostic],
    catalogs: &Catalogs,
    full_report: bool,
) -> io::Result<()> {
    writeln!(out, "Reading mission {}", mission.mission_name())?;

    if let Some(map_name) = &mission.map_name {
        writeln!(out, "Mission Map = {map_name}")?;
        if !catalogs.maps.is_empty() && !catalogs.maps.iter().any(|map| map == map_name) {
            writeln!(out, "###Map {map_name} not found!")?;
        }
    }

    match (&mission.date, mission.date_is_custom) {
        (Some(date), true) => {
            writeln!(out, "Mission Date: {}-{}-{}", date.year, date.month, date.day)?
        }
        _ => writeln!(out, "###Mission Date not set")?,
    }

    if full_report {
        let used_aircraft: BTreeSet<&str> = mission
            .aircraft
            .iter()
            .map(|entry| entry.aircraft_code.as_str())
            .collect();
        write_listing(out, "Aircraft used:", used_aircraft)?;

        let wings: BTreeSet<&str> = mission.wing_sections.iter().map(String::as_str).collect();
        write_listing(out, "Wings:", wings)?;

        write_listing(out, "Chiefs used:", mission.chiefs.iter().map(String::as_str))?;
        write_listing(
            out,
            "Stationaries used:",
            mission.stationaries.iter().map(String::as_str),
        )?;
    }

    write_diagnostics(out, diagnostics)?;
    write_planes_without_markings(out, &mission.stat_planes_without_markings)?;
    write_missing_squadrons(out, &mission.wing_sections, catalogs)?;

    writeln!(out)?;
    Ok(())
}

fn write_listing<'a, W: Write>(
    out: &mut W,
    title: &str,
    items: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    let mut empty = true;
    for item in items {
        writeln!(out, "\t{item}")?;
        empty = false;
    }
    if empty {
        writeln!(out, "\tNone")?;
    }
    Ok(())
}

/// Write the missing-reference sections, grouped by category in report
/// order. Categories with no findings are omitted.
pub fn write_diagnostics<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for category in DiagnosticCategory::ALL {
        let mut entries = diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.category == category)
            .peekable();
        if entries.peek().is_none() {
            continue;
        }
        writeln!(out, "{}", category.heading())?;
        for diagnostic in entries {
            if diagnostic.detail.is_empty() {
                writeln!(out, "\t{}", diagnostic.subject)?;
            } else {
                writeln!(out, "\t{} for {}", diagnostic.subject, diagnostic.detail)?;
            }
        }
    }
    Ok(())
}

fn write_planes_without_markings<W: Write>(out: &mut W, planes: &[String]) -> io::Result<()> {
    let unique: BTreeSet<&str> = planes.iter().map(String::as_str).collect();
    if unique.is_empty() {
        return Ok(());
    }
    writeln!(out, "### Stationary planes without markings:")?;
    for plane in unique {
        writeln!(out, "\t{plane}")?;
    }
    Ok(())
}

/// Wing names map to regInfo squadron ids by dropping the two trailing
/// characters, e.g. `III_KG7603` registers as `III_KG76`. Names shorter
/// than five characters are taken as-is.
fn wing_to_squadron(wing: &str) -> &str {
    if wing.len() < 5 {
        wing
    } else {
        wing.get(..wing.len() - 2).unwrap_or(wing)
    }
}

fn write_missing_squadrons<W: Write>(
    out: &mut W,
    wing_sections: &[String],
    catalogs: &Catalogs,
) -> io::Result<()> {
    if catalogs.squadrons.is_empty() {
        // registry not available, check disabled
        return Ok(());
    }
    let missing: BTreeSet<&str> = wing_sections
        .iter()
        .map(|wing| wing_to_squadron(wing))
        .filter(|squadron| !catalogs.squadrons.contains(*squadron))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    writeln!(out, "### Wings - Not configured")?;
    for squadron in missing {
        writeln!(out, "\tWing: {squadron}")?;
    }
    Ok(())
}

/// Map of section name to its full text, header line included, as laid out
/// in a `static.ini` file.
fn collect_sections(text: &str) -> HashMap<String, String> {
    let mut sections: HashMap<String, String> = HashMap::new();
    let mut current: Option<(String, String)> = None;

    for line in text.split_inclusive('\n') {
        let stripped = line.trim();
        if stripped.len() > 2 && stripped.starts_with('[') && stripped.ends_with(']') {
            if let Some((name, body)) = current.take() {
                sections.insert(name, body);
            }
            current = Some((stripped[1..stripped.len() - 1].to_string(), line.to_string()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push_str(line);
        }
        // lines before the first section header carry no lookup value
    }
    if let Some((name, body)) = current {
        sections.insert(name, body);
    }
    sections
}

fn normalize_object_id(id: &str) -> &str {
    let id = id.trim();
    id.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(id)
}

/// Copy the `[buildings.<id>]` sections for the given missing objects out of
/// a base `static.ini` into `_add_to_static.ini` in the output directory,
/// ready to append to the game's own static.ini. Ids with no matching
/// section are reported and skipped. Returns the output path when at least
/// one section was written.
pub fn generate_missing_objects_ini(
    missing_objects: &BTreeSet<String>,
    base_static_ini: &Path,
    output_directory: &Path,
) -> Result<Option<PathBuf>> {
    debug!("Generating ini file with missing buildings");

    let text = read_resource_text(base_static_ini)
        .with_context(|| format!("base static.ini not found at {}", base_static_ini.display()))?;
    let sections = collect_sections(&text);

    let mut body = String::from(
        "// Auto-generated sections to append to static.ini\n// Generated by campaign_analyzer\n\n",
    );
    let mut wrote_any = false;
    for id in missing_objects {
        let key = format!("buildings.{}", normalize_object_id(id));
        match sections.get(&key) {
            Some(section) => {
                if wrote_any {
                    body.push('\n');
                }
                body.push_str(section);
                wrote_any = true;
            }
            None => warn!("Static object section not found: [{key}]"),
        }
    }

    if !wrote_any {
        info!("No matching static.ini sections found to write");
        return Ok(None);
    }

    let output_path = output_directory.join("_add_to_static.ini");
    fs::write(&output_path, body)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!("Missing static objects written to {}", output_path.display());
    Ok(Some(output_path))
}
