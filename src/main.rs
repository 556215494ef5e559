use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use campaign_analyzer::config::AppSettings;
use campaign_analyzer::{AnalyzerOptions, run};

/// Validate the missions of an IL-2 1946 campaign against the installed
/// reference catalogs and optionally auto-fix them.
#[derive(Parser, Debug)]
#[command(name = "campaign_analyzer", version, about)]
struct Cli {
    /// Settings file with installation paths and auto-fix switches
    #[arg(short, long, default_value = "settings.ini")]
    settings: PathBuf,

    /// Override the STD folder from the settings file
    #[arg(long)]
    std_path: Option<PathBuf>,

    /// Override the skins folder from the settings file
    #[arg(long)]
    skin_path: Option<PathBuf>,

    /// Override the campaign folder from the settings file
    #[arg(long)]
    campaign_path: Option<PathBuf>,

    /// Override the output directory from the settings file
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Maps root holding Maps/all.ini, enables the map presence check
    #[arg(long)]
    maps_path: Option<PathBuf>,

    /// Repair visibility markers on static plane placements
    #[arg(long)]
    fix_markings: bool,

    /// Apply the object substitution table to mission lines
    #[arg(long)]
    replace_objects: bool,

    /// Force OnlyAI on wing sections other than the player squadron
    #[arg(long)]
    ai_only: bool,

    /// Emit the full listings in the text report
    #[arg(long)]
    full_report: bool,

    /// Also write a JSON report next to the text report
    #[arg(long)]
    json: bool,

    /// Object substitution table used with --replace-objects
    #[arg(long, default_value = "config/Common Conversions.txt")]
    conversions: PathBuf,

    /// Base static.ini to copy missing building sections from
    #[arg(long)]
    base_static_ini: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = AppSettings::read(&cli.settings)?;
    if let Some(std_path) = cli.std_path {
        settings.std_path = std_path;
    }
    if let Some(skin_path) = cli.skin_path {
        settings.skin_path = skin_path;
    }
    if let Some(campaign_path) = cli.campaign_path {
        settings.campaign_path = campaign_path;
    }
    if let Some(output_dir) = cli.output_dir {
        settings.output_directory = output_dir;
    }
    if cli.maps_path.is_some() {
        settings.maps_path = cli.maps_path;
    }
    settings.auto_correct_static_markings |= cli.fix_markings;
    settings.auto_replace_stationary_objects |= cli.replace_objects;
    settings.make_non_player_ai_only |= cli.ai_only;
    settings.full_report |= cli.full_report;

    let options = AnalyzerOptions {
        json_report: cli.json,
        conversions_path: cli.conversions,
        base_static_ini: cli.base_static_ini,
    };
    run(&settings, &options)
}
