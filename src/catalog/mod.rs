//! Read-only reference catalogs loaded from the base installation.
//!
//! Each catalog is produced by a single-pass line filter over its own
//! INI-like dialect, loaded once per run and injected into the validator and
//! rewriter as an immutable value.

pub mod aircraft;
pub mod chiefs;
pub mod conversions;
pub mod maps;
pub mod objects;
pub mod resource;
pub mod skins;
pub mod squadrons;
pub mod stationary;
pub mod weapons;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Result;
use log::{info, warn};

pub use conversions::{ConversionTable, read_conversions};

/// The reference catalogs a validation run needs.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    /// Aircraft code to display name (`air.ini`).
    pub aircraft: HashMap<String, String>,
    /// Ground unit identifiers (`chief.ini`).
    pub chiefs: HashSet<String>,
    /// Stationary id to display name (`stationary.ini`).
    pub stationaries: HashMap<String, String>,
    /// Static scenery object identifiers (`static.ini`).
    pub objects: HashSet<String>,
    /// Skin folder (lowercased) to sorted skin file list.
    pub skins: HashMap<String, Vec<String>>,
    /// Aircraft display name to accepted weapon codes.
    pub weapons: HashMap<String, Vec<String>>,
    /// Known map load paths; empty when no maps root was configured.
    pub maps: Vec<String>,
    /// Configured squadron ids; empty when the registry is absent.
    pub squadrons: HashSet<String>,
}

/// Load every catalog from the standard installation and skin directory.
///
/// Core catalogs are required and fail the run when missing. The squadron
/// registry and map list back supplementary report checks only, so an absent
/// file downgrades to a warning and the check is skipped.
pub fn load_catalogs(std_path: &Path, skin_path: &Path, maps_path: Option<&Path>) -> Result<Catalogs> {
    let aircraft = aircraft::read_aircraft(std_path)?;
    let chiefs = chiefs::read_chiefs(std_path)?;
    let stationaries = stationary::read_stationaries(std_path)?;
    let objects = objects::read_objects(std_path)?;
    let skins = skins::read_skins(skin_path)?;
    let weapons = weapons::read_weapons(std_path)?;

    let squadrons = if std_path.join("i18n").join("regInfo.properties").is_file() {
        squadrons::read_squadrons(std_path)?
    } else {
        warn!("Squadron registry not found; wing configuration checks disabled");
        HashSet::new()
    };

    let maps = match maps_path {
        Some(root) => maps::read_maps(root)?,
        None => Vec::new(),
    };

    info!(
        "Resource counts | aircraft={} chiefs={} stationaries={} objects={} weapons={}",
        aircraft.len(),
        chiefs.len(),
        stationaries.len(),
        objects.len(),
        weapons.len(),
    );

    Ok(Catalogs {
        aircraft,
        chiefs,
        stationaries,
        objects,
        skins,
        weapons,
        maps,
        squadrons,
    })
}
