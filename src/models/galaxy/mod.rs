//! Galaxy model
//!
//! A sphere of star systems sized to the number of species in the game,
//! plus the home system templates used to seed each species' starting
//! system.

mod generation;
mod homes;
mod wormholes;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::constants::StarType;
use super::errors::{GalaxyError, GalaxyResult};
use super::planet::Planet;
use super::position::Coords;
use super::setup::SetupData;
use super::star::Star;
use crate::prng::Prng;

pub use generation::{plan_layout, place_stars, Layout};
pub use homes::ConversionRequest;
pub use wormholes::pair_wormholes;

/// Parameters for a new galaxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalaxyConfig {
    pub name: String,
    /// Number of species the galaxy is designed for.
    pub species: i32,
    /// Pretend there are 50% more species so the stars spread out.
    pub low_density: bool,
    pub number_of_stars: Option<i32>,
    pub radius: Option<i32>,
}

impl GalaxyConfig {
    pub fn new(species: i32, low_density: bool) -> Self {
        GalaxyConfig {
            name: "galaxy".to_string(),
            species,
            low_density,
            number_of_stars: None,
            radius: None,
        }
    }

    pub fn from_setup(setup: &SetupData) -> Self {
        let overrides = &setup.galaxy.overrides;
        GalaxyConfig {
            name: setup.galaxy.name.clone(),
            species: setup.players.len() as i32,
            low_density: setup.galaxy.low_density,
            number_of_stars: overrides.use_overrides.then_some(overrides.number_of_stars),
            radius: overrides.use_overrides.then_some(overrides.radius),
        }
    }
}

/// A player registered from the setup file, keyed by e-mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub email: String,
    pub species: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Galaxy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: BTreeMap<String, Player>,
    /// Number of species the galaxy was designed for.
    pub d_num_species: i32,
    /// Number of species designated so far.
    #[serde(default)]
    pub num_species: i32,
    pub radius: i32,
    pub number_of_stars: usize,
    pub number_of_planets: usize,
    pub number_of_wormholes: usize,
    #[serde(default)]
    pub turn_number: i32,
    /// Stars in placement order.
    pub stars: Vec<Star>,
    /// Home system templates keyed by number of planets.
    #[serde(default)]
    pub templates: BTreeMap<usize, Vec<Planet>>,
}

impl Galaxy {
    /// Generate a galaxy for `species` species.
    pub fn generate(rng: &mut Prng, species: i32, low_density: bool) -> GalaxyResult<Self> {
        Self::generate_with(rng, &GalaxyConfig::new(species, low_density))
    }

    /// Generate a galaxy from a validated setup file and register its players.
    pub fn from_setup(rng: &mut Prng, setup: &SetupData) -> GalaxyResult<Self> {
        let mut galaxy = Self::generate_with(rng, &GalaxyConfig::from_setup(setup))?;
        for player in &setup.players {
            galaxy.players.insert(
                player.email.clone(),
                Player {
                    id: player.email.clone(),
                    email: player.email.clone(),
                    species: player.species_name.clone(),
                },
            );
        }
        Ok(galaxy)
    }

    pub fn generate_with(rng: &mut Prng, config: &GalaxyConfig) -> GalaxyResult<Self> {
        let layout = plan_layout(config)?;
        info!(
            species = layout.designed_species,
            stars = layout.desired_stars,
            radius = layout.radius,
            "galaxy layout"
        );

        let mut stars = place_stars(rng, &layout)?;
        let number_of_wormholes = pair_wormholes(rng, &mut stars, layout.desired_stars);
        let number_of_planets = stars.iter().map(|s| s.planets.len()).sum();

        info!(
            stars = stars.len(),
            planets = number_of_planets,
            wormholes = number_of_wormholes,
            "generated galaxy"
        );

        Ok(Galaxy {
            id: config.name.clone(),
            name: config.name.clone(),
            players: BTreeMap::new(),
            d_num_species: layout.designed_species,
            num_species: 0,
            radius: layout.radius,
            number_of_stars: stars.len(),
            number_of_planets,
            number_of_wormholes,
            turn_number: 0,
            stars,
            templates: BTreeMap::new(),
        })
    }

    pub fn star_at(&self, coords: Coords) -> Option<&Star> {
        self.stars.iter().find(|s| s.coords == coords)
    }

    pub fn star_at_mut(&mut self, coords: Coords) -> Option<&mut Star> {
        self.stars.iter_mut().find(|s| s.coords == coords)
    }

    /// Like [`Galaxy::star_at`], but a missing star is an error.
    pub fn require_star(&self, coords: Coords) -> GalaxyResult<&Star> {
        self.star_at(coords).ok_or(GalaxyError::NoStarAt {
            x: coords.x,
            y: coords.y,
            z: coords.z,
        })
    }

    pub fn home_systems(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter().filter(|s| s.home_system)
    }

    /// Number of stars of each type, in `StarType::ALL` order.
    pub fn type_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for star in &self.stars {
            if let Some(i) = StarType::ALL.iter().position(|t| *t == star.star_type) {
                counts[i] += 1;
            }
        }
        counts
    }

    /// Recount planets and wormholes from the star list.
    pub fn recount(&mut self) {
        self.number_of_stars = self.stars.len();
        self.number_of_planets = self.stars.iter().map(|s| s.planets.len()).sum();
        self.number_of_wormholes = self.stars.iter().filter(|s| s.worm_here).count() / 2;
    }
}
