//! Home system templates
//!
//! One accepted Earth-like planet set per planet count. Every home system of
//! a given size is converted from the same template, so species start on
//! comparable ground.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::models::constants::HOME_TEMPLATE_SIZES;
use crate::models::errors::GalaxyResult;
use crate::models::planet::Planet;
use crate::prng::Prng;
use crate::services::earth_like::generate_earth_like_planets;
use crate::services::retry::{try_retry, Retry};

/// Templates keyed by number of planets.
pub type HomeTemplates = BTreeMap<usize, Vec<Planet>>;

/// Regenerate Earth-like sets of `planets` planets until one is accepted.
pub fn build_home_template(
    rng: &mut Prng,
    planets: usize,
    max_attempts: u32,
) -> GalaxyResult<Retry<Vec<Planet>>> {
    let outcome = try_retry(max_attempts, || generate_earth_like_planets(rng, planets))?;
    debug!(
        planets,
        attempts = outcome.attempts(),
        accepted = outcome.is_accepted(),
        "template search"
    );
    Ok(outcome)
}

/// Build templates for every bucket from 3 through 9 planets. Exhausting
/// the attempt limit on any bucket is fatal.
pub fn build_home_templates(rng: &mut Prng, max_attempts: u32) -> GalaxyResult<HomeTemplates> {
    let mut templates = HomeTemplates::new();
    for planets in HOME_TEMPLATE_SIZES {
        let template =
            build_home_template(rng, planets, max_attempts)?.or_fail("home system template")?;
        templates.insert(planets, template);
    }
    info!(buckets = templates.len(), "built home system templates");
    Ok(templates)
}
