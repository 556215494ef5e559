//! Campaign mission listing from `campaign.ini`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::catalog::resource::read_resource_text;

/// Return the mission file paths defined in `<root>/campaign.ini`.
///
/// Every whitespace-separated token ending in `.mis` (case-insensitive)
/// names one mission, relative to the campaign root. A missing campaign.ini
/// is fatal; nothing can be validated without it.
pub fn read_missions(root: &Path) -> Result<Vec<PathBuf>> {
    let campaign_ini = root.join("campaign.ini");
    info!("Loading missions from {}", campaign_ini.display());

    let text = read_resource_text(&campaign_ini)
        .with_context(|| format!("campaign.ini not found at {}", campaign_ini.display()))?;

    let missions: Vec<PathBuf> = text
        .split_whitespace()
        .filter(|token| token.to_ascii_lowercase().ends_with(".mis"))
        .map(|token| root.join(token))
        .collect();

    debug!("Discovered {} missions", missions.len());
    Ok(missions)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn collects_mis_tokens_relative_to_root() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("campaign.ini"),
            "[Mission]\n  mission01.mis\n  sub/Mission02.MIS briefing.txt\n",
        )?;

        let missions = read_missions(dir.path())?;
        assert_eq!(
            missions,
            vec![dir.path().join("mission01.mis"), dir.path().join("sub/Mission02.MIS")]
        );
        Ok(())
    }

    #[test]
    fn missing_campaign_ini_is_fatal() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(read_missions(dir.path()).is_err());
        Ok(())
    }
}
