use std::collections::HashSet;

use crate::models::constants::{
    MAX_CHANCE_OF_STAR, MAX_RADIUS, MAX_SPECIES, MAX_STARS, MIN_CHANCE_OF_STAR, MIN_RADIUS,
    MIN_SPECIES, MIN_STARS, STANDARD_GALACTIC_RADIUS, STANDARD_NUMBER_OF_SPECIES,
    MAX_RESAMPLES, STANDARD_NUMBER_OF_STAR_SYSTEMS,
};
use crate::models::errors::{GalaxyError, GalaxyResult};
use crate::models::position::Coords;
use crate::models::star::Star;
use crate::prng::Prng;
use crate::services::retry::try_retry;
use crate::services::stars::generate_star;

use super::GalaxyConfig;

/// Size and density of a galaxy, checked against the allowed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub designed_species: i32,
    pub desired_stars: i32,
    pub radius: i32,
    /// One star per this many lattice points inside the sphere.
    pub chance_of_star: i32,
}

/// Work out how many stars to place and how big the sphere must be.
pub fn plan_layout(config: &GalaxyConfig) -> GalaxyResult<Layout> {
    let designed_species = config.species;
    if !(MIN_SPECIES..=MAX_SPECIES).contains(&designed_species) {
        return Err(GalaxyError::SpeciesOutOfRange {
            count: designed_species,
            min: MIN_SPECIES,
            max: MAX_SPECIES,
        });
    }

    let mut adjusted_species = designed_species;
    if config.low_density {
        adjusted_species = designed_species * 3 / 2;
        if !(MIN_SPECIES..=MAX_SPECIES).contains(&adjusted_species) {
            return Err(GalaxyError::AdjustedSpeciesOutOfRange {
                count: adjusted_species,
                min: MIN_SPECIES,
                max: MAX_SPECIES,
            });
        }
    }

    let desired_stars = config.number_of_stars.unwrap_or(
        adjusted_species * STANDARD_NUMBER_OF_STAR_SYSTEMS / STANDARD_NUMBER_OF_SPECIES,
    );
    if !(MIN_STARS..=MAX_STARS).contains(&desired_stars) {
        return Err(GalaxyError::StarsOutOfRange {
            count: desired_stars,
            min: MIN_STARS,
            max: MAX_STARS,
        });
    }

    // smallest radius whose cube covers the scaled standard volume
    let volume = desired_stars * STANDARD_GALACTIC_RADIUS.pow(3) / STANDARD_NUMBER_OF_STAR_SYSTEMS;
    let mut radius: i32 = 2;
    while radius.pow(3) < volume {
        radius += 1;
    }
    let radius = config.radius.unwrap_or(radius);
    if !(MIN_RADIUS..=MAX_RADIUS).contains(&radius) {
        return Err(GalaxyError::RadiusOutOfRange {
            radius,
            min: MIN_RADIUS,
            max: MAX_RADIUS,
        });
    }

    // cubic parsecs inside the sphere
    let sphere = 4 * 314 * radius.pow(3) / 300;
    let chance_of_star = sphere / desired_stars;
    if chance_of_star < MIN_CHANCE_OF_STAR {
        return Err(GalaxyError::RadiusTooSmall {
            stars: desired_stars,
        });
    }
    if chance_of_star > MAX_CHANCE_OF_STAR {
        return Err(GalaxyError::RadiusTooLarge {
            stars: desired_stars,
        });
    }

    Ok(Layout {
        designed_species,
        desired_stars,
        radius,
        chance_of_star,
    })
}

/// Scatter stars at random lattice points inside the sphere until the
/// desired count is reached. Points outside the sphere or already taken
/// are redrawn, at most `MAX_RESAMPLES` times per star.
pub fn place_stars(rng: &mut Prng, layout: &Layout) -> GalaxyResult<Vec<Star>> {
    let diameter = 2 * layout.radius;
    let wanted = layout.desired_stars as usize;
    let n_species = layout.designed_species as usize;

    let mut stars = Vec::with_capacity(wanted);
    let mut occupied = HashSet::with_capacity(wanted);
    while stars.len() < wanted {
        let mut star = try_retry(MAX_RESAMPLES, || {
            let x = rng.draw(diameter) - 1;
            let y = rng.draw(diameter) - 1;
            let z = rng.draw(diameter) - 1;
            let coords = Coords::new(x, y, z);
            if !coords.within_galaxy(layout.radius) || occupied.contains(&coords) {
                return Ok(None);
            }
            generate_star(rng, coords, n_species).map(Some)
        })?
        .or_fail("star placement")?;

        star.system_number = stars.len() + 1;
        occupied.insert(star.coords);
        stars.push(star);
    }
    Ok(stars)
}
