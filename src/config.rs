//! Application settings loaded from the legacy `settings.ini` file.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::catalog::resource::read_resource_text;

/// Structured campaign analyzer settings.
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    /// Root of the standard installation (the STD folder).
    pub std_path: PathBuf,
    /// Root of the skin directories (PaintSchemes/Skins).
    pub skin_path: PathBuf,
    /// Campaign folder holding campaign.ini and the mission files.
    pub campaign_path: PathBuf,
    /// Directory receiving the report and auto-fixed missions.
    pub output_directory: PathBuf,
    /// Optional maps root holding `Maps/all.ini`; map checks are skipped
    /// when absent.
    pub maps_path: Option<PathBuf>,
    /// Rewrite toggle: repair visibility markers on static planes.
    pub auto_correct_static_markings: bool,
    /// Rewrite toggle: apply the object substitution table.
    pub auto_replace_stationary_objects: bool,
    /// Rewrite toggle: force OnlyAI on non-player wing sections.
    pub make_non_player_ai_only: bool,
    /// Emit the full listings in the text report.
    pub full_report: bool,
}

impl AppSettings {
    /// Location of the plain-text report inside the output directory.
    pub fn output_report_path(&self) -> PathBuf {
        self.output_directory.join("CampaignAnalyzerOutput.txt")
    }

    /// Parse the flat `KEY = value` settings format. Unknown keys are
    /// ignored; malformed lines are skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut settings = AppSettings::default();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                warn!("Ignoring malformed settings line: {line}");
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "STD_PATH_FOLDER" => settings.std_path = parse_path(value),
                "SKIN_PATH_FOLDER" => settings.skin_path = parse_path(value),
                "CAMPAIGN_PATH_FOLDER" => settings.campaign_path = parse_path(value),
                "OUTPUT_PATH_FOLDER" => settings.output_directory = parse_path(value),
                "MAPS_PATH_FOLDER" => {
                    let path = parse_path(value);
                    settings.maps_path = (!path.as_os_str().is_empty()).then_some(path);
                }
                "AUTO_CORRECT_STATIC_AIRCRAFT_MARKINGS" => {
                    settings.auto_correct_static_markings = parse_flag(value)
                }
                "AUTO_REPLACE_STATIONARY_OBJECTS" => {
                    settings.auto_replace_stationary_objects = parse_flag(value)
                }
                "NON_PLAYER_AI_ONLY" => settings.make_non_player_ai_only = parse_flag(value),
                "REPORT_FORMAT" => settings.full_report = parse_flag(value),
                _ => debug!("Ignoring unknown settings key {key}"),
            }
        }
        settings
    }

    /// Read the settings file from disk. A missing file is fatal; there are
    /// no usable defaults for the installation paths.
    pub fn read(path: &Path) -> Result<Self> {
        info!("Loading application settings from {}", path.display());
        let text = read_resource_text(path)
            .with_context(|| format!("settings file not found at {}", path.display()))?;
        let settings = Self::parse(&text);
        info!("{settings}");
        Ok(settings)
    }
}

fn parse_path(value: &str) -> PathBuf {
    PathBuf::from(value.trim_matches('"'))
}

fn parse_flag(value: &str) -> bool {
    value.parse::<i64>().map(|flag| flag != 0).unwrap_or(false)
}

impl fmt::Display for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
        write!(
            f,
            "\n\tSTD path: {}\
             \n\tSkins path: {}\
             \n\tCampaign path: {}\
             \n\tSwitches\
             \n\t - Fix Static markings: {}\
             \n\t - Replace Stationary objects: {}\
             \n\t - [Coop] Non player flights AI only: {}\
             \n\t - Report format: {}\
             \n\tReport: {}",
            self.std_path.display(),
            self.skin_path.display(),
            self.campaign_path.display(),
            yes_no(self.auto_correct_static_markings),
            yes_no(self.auto_replace_stationary_objects),
            yes_no(self.make_non_player_ai_only),
            if self.full_report { "Full" } else { "Reduced" },
            self.output_report_path().display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_paths_flags_and_quoted_values() {
        let text = "\
; analyzer settings
STD_PATH_FOLDER = \"C:/IL2/Files/STD\"
SKIN_PATH_FOLDER = C:/IL2/PaintSchemes/Skins
CAMPAIGN_PATH_FOLDER = C:/IL2/Missions/Campaign/GB
OUTPUT_PATH_FOLDER = ./out
AUTO_CORRECT_STATIC_AIRCRAFT_MARKINGS = 1
NON_PLAYER_AI_ONLY = 0
REPORT_FORMAT = 1
UNKNOWN_KEY = whatever
";
        let settings = AppSettings::parse(text);
        assert_eq!(settings.std_path, PathBuf::from("C:/IL2/Files/STD"));
        assert_eq!(settings.campaign_path, PathBuf::from("C:/IL2/Missions/Campaign/GB"));
        assert!(settings.auto_correct_static_markings);
        assert!(!settings.auto_replace_stationary_objects);
        assert!(!settings.make_non_player_ai_only);
        assert!(settings.full_report);
        assert_eq!(settings.maps_path, None);
        assert_eq!(
            settings.output_report_path(),
            PathBuf::from("./out/CampaignAnalyzerOutput.txt")
        );
    }

    #[test]
    fn non_numeric_flags_default_to_false() {
        let settings = AppSettings::parse("NON_PLAYER_AI_ONLY = yes\n");
        assert!(!settings.make_non_player_ai_only);
    }

    #[test]
    fn missing_settings_file_is_fatal() {
        assert!(AppSettings::read(Path::new("/nonexistent/settings.ini")).is_err());
    }
}
