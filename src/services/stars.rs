//! Star generator

use tracing::debug;

use crate::models::constants::{StarColor, StarType, MAX_PLANETS_PER_STAR, MIN_PLANETS_PER_STAR};
use crate::models::errors::{GalaxyError, GalaxyResult};
use crate::models::position::Coords;
use crate::models::star::Star;
use crate::prng::Prng;
use crate::services::planets::generate_planets;

/// Main sequence is the fall-through outcome of a d10.
fn roll_star_type(rng: &mut Prng) -> StarType {
    match rng.draw(10) {
        1 => StarType::Dwarf,
        2 => StarType::Degenerate,
        3 => StarType::Giant,
        _ => StarType::MainSequence,
    }
}

/// Dwarfs roll once, giants three times, everything else twice.
fn rolls_for(star_type: StarType) -> i32 {
    match star_type {
        StarType::Dwarf => 1,
        StarType::Degenerate | StarType::MainSequence => 2,
        StarType::Giant => 3,
    }
}

/// Number of planets for a star. Hotter stars roll bigger dice; the total
/// starts from a bias of -2 and is nudged back into range.
pub fn roll_planet_count(rng: &mut Prng, star_type: StarType, color: StarColor) -> i32 {
    let die = color.planet_die();
    let mut count = -2;
    for _ in 0..rolls_for(star_type) {
        count += rng.draw(die);
    }
    while count < MIN_PLANETS_PER_STAR {
        count += rng.draw(2);
    }
    while count > MAX_PLANETS_PER_STAR {
        count -= rng.draw(3);
    }
    count
}

/// Generate the star at `coords` together with its planets.
///
/// # Arguments
///
/// * `rng` - Generator shared by the whole galaxy
/// * `coords` - Where the star sits
/// * `n_species` - Number of designed species; sizes the visited flags
///
/// # Returns
///
/// The star, or an assertion error if a draw produced an impossible color.
pub fn generate_star(rng: &mut Prng, coords: Coords, n_species: usize) -> GalaxyResult<Star> {
    let star_type = roll_star_type(rng);
    let size = rng.draw(10) - 1;
    let code = rng.draw(StarColor::ALL.len() as i32);
    let color = StarColor::from_code(code)
        .ok_or_else(|| GalaxyError::Assertion(format!("star color code {code}")))?;

    let count = roll_planet_count(rng, star_type, color);
    debug!(%coords, star_type = %star_type, planets = count, "generating star");

    let mut star = Star::new(coords, star_type, color, size);
    star.set_planets(generate_planets(rng, count as usize)?);
    star.visited_by = vec![false; n_species];
    Ok(star)
}
