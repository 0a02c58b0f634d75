use std::collections::HashSet;

use galaxygen::models::constants::{
    HOME_TEMPLATE_SIZES, MAX_PLANETS_PER_STAR, MAX_TEMPLATE_ATTEMPTS, MIN_PLANETS_PER_STAR,
};
use galaxygen::models::position::Coords;
use galaxygen::services::atmosphere::generate_gases;
use galaxygen::services::planets::generate_planets;
use galaxygen::services::stars::generate_star;
use galaxygen::services::templates::build_home_template;
use galaxygen::{Galaxy, Prng};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: the same seed always gives the same sequence
    #[test]
    fn prng_is_deterministic(seed in any::<u64>(), max in 1i32..1000) {
        let mut a = Prng::seeded(seed);
        let mut b = Prng::seeded(seed);
        for _ in 0..50 {
            let (x, y) = (a.draw(max), b.draw(max));
            prop_assert_eq!(x, y);
            prop_assert!((1..=max).contains(&x));
        }
    }

    /// Property: every atmosphere sums to 100% with no gas listed twice
    #[test]
    fn gases_sum_to_one_hundred(seed in any::<u64>(), pc in 1i32..=29, tc in 1i32..=30) {
        let mut rng = Prng::seeded(seed);
        let gases = generate_gases(&mut rng, pc, tc).unwrap();

        let total: i32 = gases.iter().map(|g| g.percentage).sum();
        prop_assert_eq!(total, 100);
        let kinds: HashSet<_> = gases.iter().map(|g| g.kind).collect();
        prop_assert_eq!(kinds.len(), gases.len());
    }

    /// Property: stars carry between 1 and 9 planets, and the count matches
    #[test]
    fn star_planet_counts_in_range(seed in any::<u64>()) {
        let mut rng = Prng::seeded(seed);
        let star = generate_star(&mut rng, Coords::new(5, 5, 5), 3).unwrap();

        prop_assert_eq!(star.num_planets, star.planets.len());
        prop_assert!(star.num_planets >= MIN_PLANETS_PER_STAR as usize);
        prop_assert!(star.num_planets <= MAX_PLANETS_PER_STAR as usize);
        prop_assert_eq!(star.visited_by.len(), 3);
    }

    /// Property: pressure class 0 exactly when there is no atmosphere
    #[test]
    fn planets_have_consistent_atmospheres(seed in any::<u64>(), total in 1usize..=9) {
        let mut rng = Prng::seeded(seed);
        let planets = generate_planets(&mut rng, total).unwrap();

        prop_assert_eq!(planets.len(), total);
        for planet in &planets {
            prop_assert_eq!(planet.pressure_class == 0, planet.gases.is_empty());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Property: stars sit at unique positions inside the sphere
    #[test]
    fn stars_unique_and_inside(seed in any::<u64>(), species in 2i32..=12) {
        let mut rng = Prng::seeded(seed);
        let galaxy = Galaxy::generate(&mut rng, species, false).unwrap();

        let coords: HashSet<_> = galaxy.stars.iter().map(|s| s.coords).collect();
        prop_assert_eq!(coords.len(), galaxy.stars.len());
        for star in &galaxy.stars {
            prop_assert!(star.coords.within_galaxy(galaxy.radius));
        }
    }

    /// Property: every wormhole leads back to where it started
    #[test]
    fn wormholes_are_symmetric(seed in any::<u64>()) {
        let mut rng = Prng::seeded(seed);
        let galaxy = Galaxy::generate(&mut rng, 6, false).unwrap();

        for star in galaxy.stars.iter().filter(|s| s.worm_here) {
            let other = galaxy.star_at(star.worm);
            prop_assert!(other.is_some());
            let other = other.unwrap();
            prop_assert!(other.worm_here);
            prop_assert_eq!(other.worm, star.coords);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    /// Property: any seed yields an accepted template for every bucket
    #[test]
    fn every_bucket_accepted_for_any_seed(seed in any::<u64>()) {
        let mut rng = Prng::seeded(seed);
        for planets in HOME_TEMPLATE_SIZES {
            let outcome = build_home_template(&mut rng, planets, MAX_TEMPLATE_ATTEMPTS).unwrap();
            prop_assert!(outcome.is_accepted(), "bucket {} rejected", planets);
            prop_assert!(outcome.attempts() <= MAX_TEMPLATE_ATTEMPTS);
        }
    }
}
