//! Orchestration of a validation run.
//!
//! Missions are independent: each one is parsed, validated, reported, and
//! optionally auto-fixed to completion before the next is considered. The
//! catalogs are loaded once and shared read-only across the run.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::catalog::{self, ConversionTable};
use crate::config::AppSettings;
use crate::mission;
use crate::report;
use crate::rewriter::{AutoFixOptions, apply_auto_fixes};
use crate::validator::{self, DiagnosticCategory, MissionReport};

/// Run options beyond the settings file.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Also write a JSON report next to the text report.
    pub json_report: bool,
    /// Location of the object substitution table.
    pub conversions_path: PathBuf,
    /// When set, export `_add_to_static.ini` sections for missing buildings
    /// copied from this base static.ini.
    pub base_static_ini: Option<PathBuf>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            json_report: false,
            conversions_path: PathBuf::from("config/Common Conversions.txt"),
            base_static_ini: None,
        }
    }
}

/// Validate every mission of the configured campaign and apply the enabled
/// auto-fixes.
pub fn run(settings: &AppSettings, options: &AnalyzerOptions) -> Result<()> {
    info!("Campaign analyzer started");

    fs::create_dir_all(&settings.output_directory).with_context(|| {
        format!(
            "failed to prepare output directory {}",
            settings.output_directory.display()
        )
    })?;
    debug!("Output directory prepared at {}", settings.output_directory.display());

    info!("Loading standard installation resources");
    let catalogs = catalog::load_catalogs(
        &settings.std_path,
        &settings.skin_path,
        settings.maps_path.as_deref(),
    )?;

    let fix_options = AutoFixOptions {
        ai_only: settings.make_non_player_ai_only,
        replace_objects: settings.auto_replace_stationary_objects,
        fix_markings: settings.auto_correct_static_markings,
    };
    // The substitution table is loaded once per run; it is only needed when
    // object replacement is on.
    let conversions = if fix_options.replace_objects {
        catalog::read_conversions(&options.conversions_path)?
    } else {
        ConversionTable::empty()
    };

    let missions = mission::read_missions(&settings.campaign_path)?;
    info!("Discovered {} missions to analyze", missions.len());

    let report_path = settings.output_report_path();
    let mut report_out = BufWriter::new(
        File::create(&report_path)
            .with_context(|| format!("failed to create report at {}", report_path.display()))?,
    );

    let mut mission_reports: Vec<MissionReport> = Vec::new();
    let mut missing_buildings: BTreeSet<String> = BTreeSet::new();

    for mission_path in &missions {
        let mission = mission::read_mission(mission_path)?;
        let mission_name = mission.mission_name();
        info!("Analyzing mission {mission_name}");

        let diagnostics = validator::validate_mission(&mission, &catalogs);
        report::write_mission_report(
            &mut report_out,
            &mission,
            &diagnostics,
            &catalogs,
            settings.full_report,
        )?;

        missing_buildings.extend(
            diagnostics
                .iter()
                .filter(|diagnostic| diagnostic.category == DiagnosticCategory::MissingBuilding)
                .map(|diagnostic| diagnostic.subject.clone()),
        );

        if options.json_report {
            mission_reports.push(MissionReport {
                mission_name: mission_name.clone(),
                map_name: mission.map_name.clone(),
                date: mission.date.clone(),
                date_is_custom: mission.date_is_custom,
                diagnostics: diagnostics.clone(),
                stat_planes_without_markings: mission.stat_planes_without_markings.clone(),
            });
        }

        if let Some(output_path) = apply_auto_fixes(
            mission_path,
            &settings.output_directory,
            &mission,
            &conversions,
            &fix_options,
        )? {
            debug!("Wrote auto-fixed mission to {}", output_path.display());
        }
        info!("Finished mission {mission_name}");
    }

    report_out.flush()?;
    info!("Report written to {}", report_path.display());

    if options.json_report {
        let json_path = settings.output_directory.join("CampaignAnalyzerOutput.json");
        let file = File::create(&json_path)
            .with_context(|| format!("failed to create {}", json_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &mission_reports)
            .context("failed to serialize JSON report")?;
        info!("JSON report written to {}", json_path.display());
    }

    if let Some(base_static_ini) = &options.base_static_ini {
        if missing_buildings.is_empty() {
            debug!("No missing static objects to export");
        } else {
            report::generate_missing_objects_ini(
                &missing_buildings,
                base_static_ini,
                &settings.output_directory,
            )?;
        }
    }

    Ok(())
}
