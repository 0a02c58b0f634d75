//! Earth-like planet sets for home system templates
//!
//! Planets are generated as usual up to the temperature class. The first
//! planet cool enough (class 11 or below) is replaced by a hand-tuned
//! Earth-like world and flagged as the ideal home planet. The whole set is
//! then scored and kept only when its habitability potential falls in the
//! narrow window that makes home systems comparable.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::models::constants::{GasKind, PlanetSpecial, MAX_HOME_POTENTIAL, MIN_HOME_POTENTIAL};
use crate::models::errors::GalaxyResult;
use crate::models::planet::{Gas, Planet};
use crate::prng::Prng;
use crate::services::atmosphere::generate_gases;
use crate::services::planets::{
    cool_with_distance, generate_density, generate_diameter, generate_mining_difficulty,
    generate_pressure_class, generate_temperature_class, orbit_baseline, surface_gravity,
    GAS_GIANT_DIAMETER,
};

/// Planets at or below this temperature class may become the home planet.
pub const HOME_MAX_TEMPERATURE_CLASS: i32 = 11;

/// Mining difficulty window for the non-home planets of a template.
pub const EARTH_LIKE_MINING_WINDOW: RangeInclusive<i32> = 30..=1000;

const HOME_DENSITY: i32 = 550;

/// Build the Earth-like home planet.
fn home_planet(rng: &mut Prng) -> Planet {
    let diameter = 11 + rng.draw(3);
    let temperature_class = 8 + rng.draw(3);
    let pressure_class = 8 + rng.draw(3);
    let mining_difficulty = 60 + rng.draw(50) + rng.draw(50);

    let mut gases = Vec::with_capacity(4);
    if rng.draw(3) == 1 {
        gases.push(Gas::new(GasKind::Ammonia, rng.draw(30)));
    }
    if rng.draw(3) == 1 {
        gases.push(Gas::new(GasKind::CarbonDioxide, rng.draw(30)));
    }
    let oxygen = 11 + rng.draw(20);
    let used: i32 = gases.iter().map(|g| g.percentage).sum::<i32>() + oxygen;
    gases.push(Gas::new(GasKind::Oxygen, oxygen));
    gases.push(Gas::new(GasKind::Nitrogen, 100 - used));
    gases.sort_by_key(|g| g.kind);

    Planet {
        diameter,
        density: HOME_DENSITY,
        gravity: surface_gravity(HOME_DENSITY, diameter),
        temperature_class,
        pressure_class,
        gases,
        mining_difficulty,
        special: PlanetSpecial::IdealHomePlanet,
        econ_efficiency: 100,
        ..Default::default()
    }
}

/// Sum of `20000 / ((LSN + 3) * (50 + mining difficulty))` over all
/// planets, measured against the system's home planet.
pub fn habitability_potential(planets: &[Planet]) -> Option<i32> {
    let home = planets.iter().find(|p| p.is_home_planet())?;
    Some(
        planets
            .iter()
            .map(|p| 20000 / ((p.life_support_needed(home) + 3) * (50 + p.mining_difficulty)))
            .sum(),
    )
}

/// Generate one candidate home system of `total` planets. Returns
/// `Ok(None)` when the candidate is rejected; callers regenerate.
pub fn generate_earth_like_planets(
    rng: &mut Prng,
    total: usize,
) -> GalaxyResult<Option<Vec<Planet>>> {
    let mut planets: Vec<Planet> = Vec::with_capacity(total);
    let mut home_generated = false;

    for orbit in 1..=total {
        let (base_diameter, base_tc) = orbit_baseline(orbit, total);

        let diameter = generate_diameter(rng, base_diameter);
        let gas_giant = diameter > GAS_GIANT_DIAMETER;
        let density = generate_density(rng, gas_giant);
        let gravity = surface_gravity(density, diameter);

        let tc = generate_temperature_class(rng, total, orbit, gas_giant, base_tc);
        let tc = cool_with_distance(rng, tc, planets.last());

        if !home_generated && tc <= HOME_MAX_TEMPERATURE_CLASS {
            home_generated = true;
            planets.push(home_planet(rng));
            continue;
        }

        let pc = generate_pressure_class(rng, gravity, tc, gas_giant);
        let gases = generate_gases(rng, pc, tc)?;
        let mining_difficulty =
            generate_mining_difficulty(rng, diameter, EARTH_LIKE_MINING_WINDOW)?;

        planets.push(Planet {
            diameter,
            density,
            gravity,
            temperature_class: tc,
            pressure_class: pc,
            gases,
            mining_difficulty,
            ..Default::default()
        });
    }

    match habitability_potential(&planets) {
        Some(potential) if (MIN_HOME_POTENTIAL..=MAX_HOME_POTENTIAL).contains(&potential) => {
            Ok(Some(planets))
        }
        potential => {
            trace!(total, ?potential, "rejected home system candidate");
            Ok(None)
        }
    }
}
