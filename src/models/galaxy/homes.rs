//! Home system placement
//!
//! Picking sites far enough from existing home systems, and rewriting a
//! star's planets from the matching template.

use tracing::info;

use super::Galaxy;
use crate::models::constants::MIN_HOME_SYSTEM_PLANETS;
use crate::models::errors::{GalaxyError, GalaxyResult};
use crate::models::position::Coords;
use crate::models::star::Star;
use crate::prng::Prng;

/// Which systems a conversion run should turn into home systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionRequest {
    /// The star at these coordinates.
    At(Coords),
    /// One picked site.
    One,
    /// Picked sites until every designed species has a home system.
    All,
    /// Picked sites until there are this many home systems.
    AddUpTo(usize),
}

impl Galaxy {
    /// First star suitable as a new home system.
    ///
    /// Candidates must not be home systems or wormhole termini and need at
    /// least three planets. They must also be at least `min_distance`
    /// parsecs from every existing home system, and from every wormhole
    /// terminus when `forbid_wormholes` is set. Stars are scanned in
    /// placement order, so the answer is stable for a given galaxy.
    pub fn first_home_site(
        &self,
        min_distance: i32,
        forbid_wormholes: bool,
    ) -> GalaxyResult<Coords> {
        let min_squared = min_distance * min_distance;
        let forbidden: Vec<&Star> = self
            .stars
            .iter()
            .filter(|s| s.home_system || (forbid_wormholes && s.worm_here))
            .collect();

        self.stars
            .iter()
            .filter(|s| !s.home_system && !s.worm_here)
            .filter(|s| s.num_planets >= MIN_HOME_SYSTEM_PLANETS)
            .find(|s| forbidden.iter().all(|f| s.distance_squared_to(f) >= min_squared))
            .map(|s| s.coords)
            .ok_or(GalaxyError::NoSuitableSystem {
                distance: min_distance,
            })
    }

    /// Rewrite the star at `coords` from the template matching its planet
    /// count. Returns the 1-based orbit of the new home planet.
    pub fn convert_to_home_system(
        &mut self,
        coords: Coords,
        rng: &mut Prng,
    ) -> GalaxyResult<usize> {
        let planets = self.require_star(coords)?.num_planets;
        let template = self
            .templates
            .get(&planets)
            .ok_or(GalaxyError::MissingTemplate { planets })?
            .clone();

        let star = self.star_at_mut(coords).ok_or(GalaxyError::NoStarAt {
            x: coords.x,
            y: coords.y,
            z: coords.z,
        })?;
        star.convert_to_home_system(&template, rng);
        let orbit = star.home_planet_index().map(|i| i + 1).ok_or_else(|| {
            GalaxyError::Assertion(format!("template for {planets} planets has no home planet"))
        })?;

        self.recount();
        info!(%coords, home_planet = orbit, "converted to home system");
        Ok(orbit)
    }

    /// Clear the home system flag on every star. Planets are left as they are.
    pub fn reset_home_systems(&mut self) -> usize {
        let mut cleared = 0;
        for star in self.stars.iter_mut().filter(|s| s.home_system) {
            star.home_system = false;
            cleared += 1;
        }
        cleared
    }

    /// Carry out a conversion run. `min_distance` must lie in
    /// `[1, 2 * radius]`. Returns the coordinates converted, in order.
    pub fn convert_home_systems(
        &mut self,
        request: ConversionRequest,
        min_distance: i32,
        forbid_wormholes: bool,
        rng: &mut Prng,
    ) -> GalaxyResult<Vec<Coords>> {
        let max_distance = 2 * self.radius;
        if !(1..=max_distance).contains(&min_distance) {
            return Err(GalaxyError::MinimumDistanceOutOfRange {
                distance: min_distance,
                min: 1,
                max: max_distance,
            });
        }

        let existing = self.home_systems().count();
        let wanted = match request {
            ConversionRequest::At(_) | ConversionRequest::One => 1,
            ConversionRequest::All => {
                (self.d_num_species.max(0) as usize).saturating_sub(existing)
            }
            ConversionRequest::AddUpTo(limit) => limit.saturating_sub(existing),
        };

        let mut converted = Vec::with_capacity(wanted);
        for _ in 0..wanted {
            let coords = match request {
                ConversionRequest::At(coords) => coords,
                _ => self.first_home_site(min_distance, forbid_wormholes)?,
            };
            self.convert_to_home_system(coords, rng)?;
            converted.push(coords);
        }
        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{HOME_SEED, MAX_TEMPLATE_ATTEMPTS};
    use crate::services::templates::build_home_templates;

    fn galaxy_with_templates(species: i32, seed: u64) -> Galaxy {
        let mut rng = Prng::seeded(seed);
        let mut galaxy = Galaxy::generate(&mut rng, species, false).unwrap();
        let mut rng = Prng::seeded(HOME_SEED);
        galaxy.templates = build_home_templates(&mut rng, MAX_TEMPLATE_ATTEMPTS).unwrap();
        galaxy
    }

    #[test]
    fn first_site_has_enough_planets() {
        let galaxy = galaxy_with_templates(6, 4);
        let site = galaxy.first_home_site(10, false).unwrap();
        let star = galaxy.star_at(site).unwrap();
        assert!(star.num_planets >= 3);
        assert!(!star.worm_here);
        // first eligible star in placement order
        let expected = galaxy
            .stars
            .iter()
            .find(|s| !s.home_system && !s.worm_here && s.num_planets >= 3)
            .unwrap();
        assert_eq!(site, expected.coords);
    }

    #[test]
    fn sites_keep_their_distance() {
        let mut galaxy = galaxy_with_templates(9, 0xC0FFEE);
        let mut rng = Prng::seeded(HOME_SEED);
        let first = galaxy.first_home_site(1, false).unwrap();
        galaxy.convert_to_home_system(first, &mut rng).unwrap();

        for distance in [5, 10] {
            match galaxy.first_home_site(distance, true) {
                Ok(second) => {
                    assert_ne!(first, second);
                    assert!(second.distance_squared(first) >= distance * distance);
                    for star in galaxy.stars.iter().filter(|s| s.worm_here) {
                        assert!(second.distance_squared(star.coords) >= distance * distance);
                    }
                }
                Err(err) => assert!(matches!(err, GalaxyError::NoSuitableSystem { .. })),
            }
        }
    }

    #[test]
    fn impossible_distance_is_reported() {
        let mut galaxy = galaxy_with_templates(4, 8);
        let mut rng = Prng::seeded(HOME_SEED);
        let first = galaxy.first_home_site(1, false).unwrap();
        galaxy.convert_to_home_system(first, &mut rng).unwrap();
        // nothing fits inside a sphere if it must be a diameter away
        let diameter = 2 * galaxy.radius;
        assert!(matches!(
            galaxy.first_home_site(diameter, false),
            Err(GalaxyError::NoSuitableSystem { distance }) if distance == diameter
        ));
    }

    #[test]
    fn conversion_leaves_one_home_planet() {
        let mut galaxy = galaxy_with_templates(9, 0xC0FFEE);
        let mut rng = Prng::seeded(HOME_SEED);
        let converted = galaxy
            .convert_home_systems(ConversionRequest::All, 5, false, &mut rng)
            .unwrap();
        assert!(!converted.is_empty());
        for coords in &converted {
            let star = galaxy.star_at(*coords).unwrap();
            assert!(star.home_system);
            assert_eq!(star.planets.iter().filter(|p| p.is_home_planet()).count(), 1);
        }
        let planets: usize = galaxy.stars.iter().map(|s| s.planets.len()).sum();
        assert_eq!(galaxy.number_of_planets, planets);
    }

    #[test]
    fn add_up_to_counts_existing_homes() {
        let mut galaxy = galaxy_with_templates(9, 0xC0FFEE);
        let mut rng = Prng::seeded(HOME_SEED);
        galaxy
            .convert_home_systems(ConversionRequest::One, 3, false, &mut rng)
            .unwrap();
        let converted = galaxy
            .convert_home_systems(ConversionRequest::AddUpTo(3), 3, false, &mut rng)
            .unwrap();
        assert_eq!(converted.len(), 2);
        assert_eq!(galaxy.home_systems().count(), 3);

        let none = galaxy
            .convert_home_systems(ConversionRequest::AddUpTo(2), 3, false, &mut rng)
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn distance_is_validated_against_radius() {
        let mut galaxy = galaxy_with_templates(4, 8);
        let mut rng = Prng::seeded(HOME_SEED);
        let too_far = 2 * galaxy.radius + 1;
        assert!(matches!(
            galaxy.convert_home_systems(ConversionRequest::One, too_far, false, &mut rng),
            Err(GalaxyError::MinimumDistanceOutOfRange { .. })
        ));
        assert!(matches!(
            galaxy.convert_home_systems(ConversionRequest::One, 0, false, &mut rng),
            Err(GalaxyError::MinimumDistanceOutOfRange { distance: 0, .. })
        ));
    }

    #[test]
    fn missing_star_and_template() {
        let mut galaxy = galaxy_with_templates(4, 8);
        let mut rng = Prng::seeded(HOME_SEED);
        assert!(matches!(
            galaxy.convert_to_home_system(Coords::new(0, 0, 0), &mut rng),
            Err(GalaxyError::NoStarAt { .. })
        ));

        let site = galaxy.first_home_site(1, false).unwrap();
        galaxy.templates.clear();
        assert!(matches!(
            galaxy.convert_to_home_system(site, &mut rng),
            Err(GalaxyError::MissingTemplate { .. })
        ));
    }

    #[test]
    fn reset_clears_flags_only() {
        let mut galaxy = galaxy_with_templates(4, 8);
        let mut rng = Prng::seeded(HOME_SEED);
        let site = galaxy.first_home_site(1, false).unwrap();
        galaxy.convert_to_home_system(site, &mut rng).unwrap();
        let planets = galaxy.star_at(site).unwrap().planets.clone();

        assert_eq!(galaxy.reset_home_systems(), 1);
        let star = galaxy.star_at(site).unwrap();
        assert!(!star.home_system);
        assert_eq!(star.planets, planets);
    }
}
