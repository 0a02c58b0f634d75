//! Galaxy integrity checks
//!
//! Verifies the structural invariants a generated or hand-edited galaxy
//! file must satisfy. Every problem found is reported, not just the first.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::constants::MAX_PLANETS_PER_STAR;
use crate::models::errors::{GalaxyError, GalaxyResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::Coords;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityProblem {
    #[error("duplicate star {second} at {coords} (first seen as star {first})")]
    DuplicateStar {
        coords: Coords,
        first: usize,
        second: usize,
    },
    #[error("star at {coords} lies outside the galactic radius")]
    OutsideGalaxy { coords: Coords },
    #[error("star at {coords} declares {declared} planets but has {actual}")]
    PlanetCountMismatch {
        coords: Coords,
        declared: usize,
        actual: usize,
    },
    #[error("star at {coords} has {count} planets")]
    TooManyPlanets { coords: Coords, count: usize },
    #[error("planet #{orbit} at {coords}: gases sum to {total}")]
    GasTotal {
        coords: Coords,
        orbit: usize,
        total: i32,
    },
    #[error("planet #{orbit} at {coords}: pressure class {pressure_class} with {gases} gases")]
    AtmosphereMismatch {
        coords: Coords,
        orbit: usize,
        pressure_class: i32,
        gases: usize,
    },
    #[error("wormhole from {from} to {to} has no return link")]
    OneWayWormhole { from: Coords, to: Coords },
    #[error("star at {coords} has {count} ideal home planets")]
    MultipleHomePlanets { coords: Coords, count: usize },
    #[error("home system at {coords} has no ideal home planet")]
    MissingHomePlanet { coords: Coords },
    #[error("galaxy records {recorded} planets but its stars hold {actual}")]
    PlanetTotal { recorded: usize, actual: usize },
}

/// Run every check and collect the problems found.
pub fn check_galaxy(galaxy: &Galaxy) -> Vec<IntegrityProblem> {
    let mut problems = Vec::new();
    let mut seen: HashMap<Coords, usize> = HashMap::new();
    let mut actual_planets = 0;

    for (index, star) in galaxy.stars.iter().enumerate() {
        let coords = star.coords;
        if let Some(&first) = seen.get(&coords) {
            problems.push(IntegrityProblem::DuplicateStar {
                coords,
                first: first + 1,
                second: index + 1,
            });
        } else {
            seen.insert(coords, index);
        }

        if !coords.within_galaxy(galaxy.radius) {
            problems.push(IntegrityProblem::OutsideGalaxy { coords });
        }

        let actual = star.planets.len();
        actual_planets += actual;
        if star.num_planets != actual {
            problems.push(IntegrityProblem::PlanetCountMismatch {
                coords,
                declared: star.num_planets,
                actual,
            });
        }
        if actual > MAX_PLANETS_PER_STAR as usize {
            problems.push(IntegrityProblem::TooManyPlanets {
                coords,
                count: actual,
            });
        }

        for (i, planet) in star.planets.iter().enumerate() {
            let orbit = i + 1;
            if planet.has_atmosphere() != (planet.pressure_class > 0) {
                problems.push(IntegrityProblem::AtmosphereMismatch {
                    coords,
                    orbit,
                    pressure_class: planet.pressure_class,
                    gases: planet.gases.len(),
                });
            }
            if planet.has_atmosphere() && planet.gas_total() != 100 {
                problems.push(IntegrityProblem::GasTotal {
                    coords,
                    orbit,
                    total: planet.gas_total(),
                });
            }
        }

        let homes = star.planets.iter().filter(|p| p.is_home_planet()).count();
        if homes > 1 {
            problems.push(IntegrityProblem::MultipleHomePlanets {
                coords,
                count: homes,
            });
        } else if homes == 0 && star.home_system {
            problems.push(IntegrityProblem::MissingHomePlanet { coords });
        }

        if star.worm_here {
            let linked_back = galaxy
                .star_at(star.worm)
                .is_some_and(|other| other.worm_here && other.worm == coords);
            if !linked_back {
                problems.push(IntegrityProblem::OneWayWormhole {
                    from: coords,
                    to: star.worm,
                });
            }
        }
    }

    if galaxy.number_of_planets != actual_planets {
        problems.push(IntegrityProblem::PlanetTotal {
            recorded: galaxy.number_of_planets,
            actual: actual_planets,
        });
    }

    problems
}

/// Like [`check_galaxy`], but any problem is an error.
pub fn verify_galaxy(galaxy: &Galaxy) -> GalaxyResult<()> {
    match check_galaxy(galaxy).len() {
        0 => Ok(()),
        problems => Err(GalaxyError::IntegrityCheckFailed { problems }),
    }
}
