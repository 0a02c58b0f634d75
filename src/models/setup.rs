//! Setup file
//!
//! The game master fills in one entry per player before the galaxy is
//! created. Everything is checked up front so generation never starts from
//! a file that would fail later.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::constants::{MAX_RADIUS, MAX_SPECIES, MIN_SPECIES};
use super::errors::{GalaxyError, GalaxyResult};
use crate::prng::Prng;

/// Characters that may not appear in any player-supplied name.
const FORBIDDEN_CHARACTERS: &[char] = &['$', '!', '`', '"', '{', '}', '\\'];
const MAX_NAME_LENGTH: usize = 31;
const MIN_SPECIES_NAME_LENGTH: usize = 5;
/// Military, gravitics, life support and biology must add up to this.
const TECH_LEVEL_TOTAL: i32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetupData {
    pub galaxy: GalaxySetup,
    #[serde(default)]
    pub players: Vec<PlayerData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalaxySetup {
    pub name: String,
    #[serde(default)]
    pub overrides: Overrides,
    #[serde(default)]
    pub low_density: bool,
    #[serde(default)]
    pub forbid_nearby_wormholes: bool,
    pub minimum_distance: i32,
}

/// Replace the computed star count and radius. Ignored unless
/// `use_overrides` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overrides {
    pub use_overrides: bool,
    pub radius: i32,
    pub number_of_stars: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerData {
    pub email: String,
    pub species_name: String,
    pub home_planet_name: String,
    pub government_name: String,
    pub government_type: String,
    pub military_level: i32,
    pub gravitics_level: i32,
    pub life_support_level: i32,
    pub biology_level: i32,
}

impl PlayerData {
    pub fn tech_total(&self) -> i32 {
        self.military_level + self.gravitics_level + self.life_support_level + self.biology_level
    }
}

impl SetupData {
    /// A setup file with `players` numbered placeholder entries. Each player
    /// starts at level 1 in every technology and gets the remaining 11
    /// levels by die roll.
    pub fn placeholder(galaxy_name: &str, players: usize, rng: &mut Prng) -> Self {
        let players = (1..=players)
            .map(|i| {
                let mut levels = [1; 4];
                for _ in 0..TECH_LEVEL_TOTAL - 4 {
                    levels[rng.draw(4) as usize - 1] += 1;
                }
                PlayerData {
                    email: format!("email{i:02}.example.com"),
                    species_name: format!("spName{i:02}"),
                    home_planet_name: format!("hpName{i:02}"),
                    government_name: format!("gName{i:02}"),
                    government_type: format!("gType{i:02}"),
                    military_level: levels[0],
                    gravitics_level: levels[1],
                    life_support_level: levels[2],
                    biology_level: levels[3],
                }
            })
            .collect();

        SetupData {
            galaxy: GalaxySetup {
                name: galaxy_name.to_string(),
                minimum_distance: 10,
                ..Default::default()
            },
            players,
        }
    }

    /// Check the galaxy settings and every player entry. Player numbers in
    /// errors are 1-based.
    pub fn validate(&self) -> GalaxyResult<()> {
        if self.galaxy.name.trim().is_empty() {
            return Err(GalaxyError::InvalidSetupFile(
                "galaxy name must not be blank".to_string(),
            ));
        }
        let distance = self.galaxy.minimum_distance;
        if !(1..=MAX_RADIUS).contains(&distance) {
            return Err(GalaxyError::MinimumDistanceOutOfRange {
                distance,
                min: 1,
                max: MAX_RADIUS,
            });
        }
        let count = self.players.len() as i32;
        if !(MIN_SPECIES..=MAX_SPECIES).contains(&count) {
            return Err(GalaxyError::SpeciesOutOfRange {
                count,
                min: MIN_SPECIES,
                max: MAX_SPECIES,
            });
        }

        let mut emails = HashSet::new();
        let mut species_names = HashSet::new();
        let mut home_planet_names = HashSet::new();
        for (i, player) in self.players.iter().enumerate() {
            let invalid = |reason: String| GalaxyError::InvalidSetup {
                player: i + 1,
                reason,
            };

            check_name("email address", &player.email, 1).map_err(&invalid)?;
            if !emails.insert(player.email.as_str()) {
                return Err(invalid(format!("duplicate email address {:?}", player.email)));
            }

            check_name("species name", &player.species_name, MIN_SPECIES_NAME_LENGTH)
                .map_err(&invalid)?;
            if !species_names.insert(player.species_name.as_str()) {
                return Err(invalid(format!(
                    "duplicate species name {:?}",
                    player.species_name
                )));
            }

            check_name("home planet name", &player.home_planet_name, 1).map_err(&invalid)?;
            if !home_planet_names.insert(player.home_planet_name.as_str()) {
                return Err(invalid(format!(
                    "duplicate home planet name {:?}",
                    player.home_planet_name
                )));
            }

            check_name("government name", &player.government_name, 1).map_err(&invalid)?;
            check_name("government type", &player.government_type, 1).map_err(&invalid)?;

            if player.tech_total() != TECH_LEVEL_TOTAL {
                return Err(invalid(format!(
                    "the tech levels must sum to {TECH_LEVEL_TOTAL} (got {})",
                    player.tech_total()
                )));
            }
        }
        Ok(())
    }
}

/// Common rules for player-supplied names.
fn check_name(label: &str, value: &str, min_length: usize) -> Result<(), String> {
    if value != value.trim() {
        return Err(format!("{label} {value:?} must not have leading or trailing spaces"));
    }
    let length = value.chars().count();
    if length == 0 {
        return Err(format!("{label} must not be blank"));
    }
    if length < min_length {
        return Err(format!("{label} {value:?} too short (min {min_length} chars required)"));
    }
    if length > MAX_NAME_LENGTH {
        return Err(format!("{label} {value:?} too long (max {MAX_NAME_LENGTH} chars)"));
    }
    if let Some(c) = value.chars().find(|c| FORBIDDEN_CHARACTERS.contains(c)) {
        return Err(format!("invalid character {c:?} in {label}"));
    }
    Ok(())
}
