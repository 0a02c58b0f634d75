//! JSON files in the data directory
//!
//! The galaxy lives in `galaxy.json`; home system templates are exported one
//! per planet count as `HS3.json` through `HS9.json`. Everything is written
//! as indented JSON.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::constants::HOME_TEMPLATE_SIZES;
use crate::models::errors::GalaxyResult;
use crate::models::galaxy::Galaxy;
use crate::models::planet::Planet;
use crate::models::setup::SetupData;
use crate::services::templates::HomeTemplates;

pub const GALAXY_FILE: &str = "galaxy.json";

pub fn template_file_name(planets: usize) -> String {
    format!("HS{planets}.json")
}

/// On-disk form of one home system template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    pub name: String,
    pub planets: Vec<Planet>,
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> GalaxyResult<T> {
    let contents = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), "loaded");
    Ok(value)
}

pub fn save_json<T: Serialize>(path: &Path, value: &T) -> GalaxyResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = serde_json::to_string_pretty(value)?;
    std::fs::write(path, serialized)?;
    info!(path = %path.display(), "created");
    Ok(())
}

pub fn load_galaxy(data_dir: &Path) -> GalaxyResult<Galaxy> {
    load_json(&data_dir.join(GALAXY_FILE))
}

pub fn save_galaxy(data_dir: &Path, galaxy: &Galaxy) -> GalaxyResult<PathBuf> {
    let path = data_dir.join(GALAXY_FILE);
    save_json(&path, galaxy)?;
    Ok(path)
}

/// Load a setup file and validate it.
pub fn load_setup(path: &Path) -> GalaxyResult<SetupData> {
    let setup: SetupData = load_json(path)?;
    setup.validate()?;
    Ok(setup)
}

/// Write one `HS<n>.json` file per template.
pub fn save_templates(data_dir: &Path, templates: &HomeTemplates) -> GalaxyResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(templates.len());
    for (&planets, template) in templates {
        let file = TemplateFile {
            name: format!("HS{planets}"),
            planets: template.clone(),
        };
        let path = data_dir.join(template_file_name(planets));
        save_json(&path, &file)?;
        written.push(path);
    }
    Ok(written)
}

/// Read whichever `HS<n>.json` files exist in `data_dir`.
pub fn load_templates(data_dir: &Path) -> GalaxyResult<HomeTemplates> {
    let mut templates = HomeTemplates::new();
    for planets in HOME_TEMPLATE_SIZES {
        let path = data_dir.join(template_file_name(planets));
        if !path.exists() {
            continue;
        }
        let file: TemplateFile = load_json(&path)?;
        templates.insert(planets, file.planets);
    }
    Ok(templates)
}
