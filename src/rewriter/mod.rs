//! Auto-fix rewriter producing corrected mission files.
//!
//! A single top-to-bottom pass over the mission text. Each line is run
//! through up to three transformations, in this fixed order:
//!
//! 1. AI-only enforcement for non-player wing sections,
//! 2. object substitution from the conversion table,
//! 3. static plane marking correction.
//!
//! The order matters: substitution can alter the tokens the marking fix
//! inspects. Untouched lines keep their original bytes, terminators
//! included, so a run with every toggle off reproduces the input exactly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::catalog::ConversionTable;
use crate::mission::MissionData;

/// The three independent rewrite toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoFixOptions {
    /// Force `OnlyAI 1` on wing sections other than the player squadron.
    pub ai_only: bool,
    /// Apply the object substitution table.
    pub replace_objects: bool,
    /// Repair visibility markers on static plane placements.
    pub fix_markings: bool,
}

impl AutoFixOptions {
    pub fn any_enabled(&self) -> bool {
        self.ai_only || self.replace_objects || self.fix_markings
    }
}

/// Split text into lines keeping each original terminator, so untouched
/// lines round-trip byte for byte.
fn split_lines(text: &str) -> Vec<(&str, &str)> {
    text.split_inclusive('\n')
        .map(|chunk| {
            if let Some(body) = chunk.strip_suffix("\r\n") {
                (body, "\r\n")
            } else if let Some(body) = chunk.strip_suffix('\n') {
                (body, "\n")
            } else {
                (chunk, "")
            }
        })
        .collect()
}

fn contains_token(line: &str, token: &str) -> bool {
    line.split_whitespace().any(|t| t == token)
}

/// Apply the substitution table to one line. Each `(old, new)` pair whose
/// source appears followed by a space substitutes its first occurrence;
/// distinct pairs may each fire on the same line.
fn apply_conversions(line: &str, conversions: &ConversionTable) -> String {
    let mut line = line.to_string();
    for (old, new) in conversions.pairs() {
        if line.contains(&format!("{old} ")) {
            debug!("Replaced {old} with {new}");
            line = line.replacen(old, new, 1);
        }
    }
    line
}

/// Repair the visibility marker on a static plane line: a trailing
/// `null 0` becomes `null 1`, a bare trailing `null` gets ` 1` appended.
fn correct_static_markings(line: &str) -> String {
    if !line.contains("vehicles.planes") {
        return line.to_string();
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() >= 2 {
        let last = fields[fields.len() - 1];
        let second_to_last = fields[fields.len() - 2];
        if last == "0" && second_to_last.eq_ignore_ascii_case("null") {
            debug!("Corrected markings for {}", fields[1]);
            let trimmed = line.trim_end();
            return format!("{}1", &trimmed[..trimmed.len() - 1]);
        } else if last.eq_ignore_ascii_case("null") {
            debug!("Appended markings for {}", fields[1]);
            return format!("{} 1", line.trim_end());
        }
    }
    line.to_string()
}

/// Rewrite one mission's text, applying the enabled transformations.
///
/// `wing_sections` is the working wing list: identifiers discovered inside
/// `[WING]` blocks are appended while the pass runs, so a wing introduced
/// late in the file is recognized for sections appearing even later.
/// Membership is tested per line against the current state of the list.
pub fn rewrite_mission_text(
    text: &str,
    wing_sections: &mut Vec<String>,
    player_squadron: &str,
    conversions: &ConversionTable,
    options: &AutoFixOptions,
) -> String {
    let lines = split_lines(text);
    let mut out = String::with_capacity(text.len() + 64);
    let mut in_wing_block = false;
    let mut insert_after: Option<usize> = None;

    for (i, (body, eol)) in lines.iter().enumerate() {
        let mut line = (*body).to_string();

        if options.ai_only {
            let trimmed = body.trim();
            if trimmed.eq_ignore_ascii_case("[wing]") {
                in_wing_block = true;
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() > 2 {
                in_wing_block = false;
                let name = &trimmed[1..trimmed.len() - 1];
                if name != player_squadron
                    && wing_sections.iter().any(|wing| wing == name)
                    && i + 2 < lines.len()
                {
                    let following = [lines[i + 1].0, lines[i + 2].0];
                    if !following.iter().any(|l| contains_token(l, "OnlyAI")) {
                        debug!("Scheduling OnlyAI 1 for wing {name}");
                        insert_after = Some(i + 2);
                    }
                }
            } else if in_wing_block && !trimmed.is_empty() {
                if !wing_sections.iter().any(|wing| wing == trimmed) {
                    debug!("Auto-fix registered wing {trimmed}");
                    wing_sections.push(trimmed.to_string());
                }
            }
        }

        if options.replace_objects {
            line = apply_conversions(&line, conversions);
        }
        if options.fix_markings {
            line = correct_static_markings(&line);
        }

        out.push_str(&line);
        out.push_str(eol);

        if insert_after == Some(i) {
            if eol.is_empty() {
                out.push('\n');
            }
            out.push_str("  OnlyAI 1\n");
            insert_after = None;
        }
    }
    out
}

/// Apply the enabled auto-fixes to a mission file, writing the corrected
/// copy into `output_dir` under the mission's file name.
///
/// Never overwrites: an existing output file makes this a logged no-op,
/// which guards against double-application across repeated runs. The check
/// assumes a single process owns the output directory.
pub fn apply_auto_fixes(
    mission_path: &Path,
    output_dir: &Path,
    mission: &MissionData,
    conversions: &ConversionTable,
    options: &AutoFixOptions,
) -> Result<Option<PathBuf>> {
    if !options.any_enabled() {
        return Ok(None);
    }

    let file_name = mission_path
        .file_name()
        .with_context(|| format!("mission path has no file name: {}", mission_path.display()))?;
    let output_path = output_dir.join(file_name);
    if output_path.exists() {
        info!(
            "Skipped auto-fixes for {}, output already exists at {}",
            mission.mission_name(),
            output_path.display()
        );
        return Ok(None);
    }

    let text = crate::catalog::resource::read_resource_text(mission_path)?;
    let mut wing_sections = mission.wing_sections.clone();
    let fixed = rewrite_mission_text(
        &text,
        &mut wing_sections,
        &mission.player_squadron,
        conversions,
        options,
    );
    fs::write(&output_path, fixed)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    debug!("Applied auto-fixes for mission {}", mission.mission_name());
    Ok(Some(output_path))
}
