use serde::{Deserialize, Serialize};

use super::constants::{StarColor, StarType};
use super::planet::Planet;
use super::position::Coords;
use crate::prng::Prng;

/// A star system and the planets orbiting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub coords: Coords,
    /// 1-based order in which the system was placed.
    pub system_number: usize,
    pub star_type: StarType,
    pub color: StarColor,
    /// 0-9
    pub size: i32,
    /// Always equals `planets.len()`; zero only for a nova.
    pub num_planets: usize,
    pub planets: Vec<Planet>,
    pub home_system: bool,
    pub worm_here: bool,
    /// Other end of the wormhole; meaningful only when `worm_here`.
    pub worm: Coords,
    #[serde(default)]
    pub message: i32,
    /// One flag per designed species.
    #[serde(default)]
    pub visited_by: Vec<bool>,
}

impl Star {
    pub fn new(coords: Coords, star_type: StarType, color: StarColor, size: i32) -> Self {
        Star {
            coords,
            system_number: 0,
            star_type,
            color,
            size,
            num_planets: 0,
            planets: Vec::new(),
            home_system: false,
            worm_here: false,
            worm: Coords::default(),
            message: 0,
            visited_by: Vec::new(),
        }
    }

    /// A star whose planets were all blown away.
    pub fn is_nova(&self) -> bool {
        self.num_planets == 0
    }

    /// Three-character stellar code, e.g. "dG5" or " M0".
    pub fn stellar_code(&self) -> String {
        format!(
            "{}{}{}",
            self.star_type.symbol(),
            self.color.spectral_class(),
            self.size
        )
    }

    pub fn set_planets(&mut self, planets: Vec<Planet>) {
        self.num_planets = planets.len();
        self.planets = planets;
    }

    /// Index of the ideal home planet, if the system has one.
    pub fn home_planet_index(&self) -> Option<usize> {
        self.planets.iter().position(|p| p.is_home_planet())
    }

    pub fn distance_squared_to(&self, other: &Star) -> i32 {
        self.coords.distance_squared(other.coords)
    }

    /// Link this star to `destination` as one end of a natural wormhole.
    pub fn open_wormhole(&mut self, destination: Coords) {
        self.worm_here = true;
        self.worm = destination;
    }

    /// Replace the planets with a copy of `template`, nudge each planet a
    /// little so that no two home systems are identical, and mark the star
    /// as a home system.
    pub fn convert_to_home_system(&mut self, template: &[Planet], rng: &mut Prng) {
        let mut planets = template.to_vec();
        for planet in planets.iter_mut() {
            perturb_home_planet(planet, rng);
        }
        self.set_planets(planets);
        self.home_system = true;
    }
}

/// Move a value one step toward `midpoint`: values above drift down by
/// `step`, values at or below drift up.
fn regress(value: i32, midpoint: i32, step: i32) -> i32 {
    if value > midpoint {
        value - step
    } else {
        value + step
    }
}

fn perturb_home_planet(planet: &mut Planet, rng: &mut Prng) {
    let jitter = rng.draw(3) - 1;
    planet.temperature_class = regress(planet.temperature_class, 12, jitter).max(1);

    if planet.pressure_class > 0 {
        let jitter = rng.draw(3) - 1;
        planet.pressure_class = regress(planet.pressure_class, 12, jitter).max(1);
    }

    if planet.gases.len() >= 3 {
        let shift = rng.draw(25) + 10;
        if planet.gases[2].percentage > 50 {
            planet.gases[1].percentage += shift;
            planet.gases[2].percentage -= shift;
        } else if planet.gases[1].percentage > 50 {
            planet.gases[1].percentage -= shift;
            planet.gases[2].percentage += shift;
        }
    }

    let jitter = rng.draw(3) - 1;
    planet.diameter = regress(planet.diameter, 12, jitter).max(1);

    planet.gravity = regress(planet.gravity, 100, rng.draw(10));
    planet.mining_difficulty = regress(planet.mining_difficulty, 100, rng.draw(10));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{GasKind, PlanetSpecial};
    use crate::models::planet::Gas;

    fn template() -> Vec<Planet> {
        let rock = Planet {
            diameter: 5,
            density: 500,
            gravity: 34,
            temperature_class: 26,
            pressure_class: 0,
            mining_difficulty: 300,
            ..Default::default()
        };
        let home = Planet {
            diameter: 13,
            density: 550,
            gravity: 99,
            temperature_class: 10,
            pressure_class: 10,
            gases: vec![
                Gas::new(GasKind::Ammonia, 10),
                Gas::new(GasKind::Nitrogen, 70),
                Gas::new(GasKind::Oxygen, 20),
            ],
            mining_difficulty: 110,
            special: PlanetSpecial::IdealHomePlanet,
            econ_efficiency: 100,
            ..Default::default()
        };
        let giant = Planet {
            diameter: 140,
            density: 120,
            gravity: 233,
            temperature_class: 5,
            pressure_class: 20,
            gases: vec![
                Gas::new(GasKind::Hydrogen, 80),
                Gas::new(GasKind::Helium, 20),
            ],
            mining_difficulty: 900,
            ..Default::default()
        };
        vec![rock, home, giant]
    }

    #[test]
    fn stellar_code_combines_type_color_and_size() {
        let star = Star::new(Coords::new(1, 2, 3), StarType::Dwarf, StarColor::Yellow, 5);
        assert_eq!(star.stellar_code(), "dG5");
        let star = Star::new(Coords::new(1, 2, 3), StarType::MainSequence, StarColor::Red, 0);
        assert_eq!(star.stellar_code(), " M0");
    }

    #[test]
    fn new_star_is_a_nova_until_planets_are_set() {
        let mut star = Star::new(Coords::default(), StarType::Giant, StarColor::Blue, 9);
        assert!(star.is_nova());
        star.set_planets(template());
        assert_eq!(star.num_planets, 3);
        assert!(!star.is_nova());
    }

    #[test]
    fn conversion_copies_template_and_marks_home() {
        let mut rng = Prng::seeded(3);
        let mut star = Star::new(Coords::default(), StarType::MainSequence, StarColor::Yellow, 4);
        star.set_planets(vec![Planet::default(); 3]);

        let template = template();
        star.convert_to_home_system(&template, &mut rng);

        assert!(star.home_system);
        assert_eq!(star.num_planets, 3);
        assert_eq!(star.planets.len(), 3);
        assert_eq!(star.home_planet_index(), Some(1));
    }

    #[test]
    fn conversion_jitter_stays_small_and_keeps_invariants() {
        let template = template();
        for seed in 0..50 {
            let mut rng = Prng::seeded(seed);
            let mut star =
                Star::new(Coords::default(), StarType::MainSequence, StarColor::Yellow, 4);
            star.convert_to_home_system(&template, &mut rng);

            for (after, before) in star.planets.iter().zip(template.iter()) {
                for (now, was) in [
                    (after.temperature_class, before.temperature_class),
                    (after.diameter, before.diameter),
                ] {
                    assert!((now - was).abs() <= 2);
                    // values above 12 never rise, values at or below never fall
                    if was > 12 {
                        assert!(now <= was, "{was} rose to {now}");
                    } else {
                        assert!(now >= was, "{was} fell to {now}");
                    }
                }
                assert!((after.gravity - before.gravity).abs() <= 10);
                assert!((after.mining_difficulty - before.mining_difficulty).abs() <= 10);
                assert_eq!(after.pressure_class == 0, before.pressure_class == 0);
                if after.has_atmosphere() {
                    assert_eq!(after.gas_total(), 100);
                    assert!(after.gases.iter().all(|g| g.percentage >= 0));
                }
            }
        }
    }

    #[test]
    fn extreme_values_regress_toward_midpoint() {
        let template = template();
        for seed in 0..20 {
            let mut rng = Prng::seeded(seed);
            let mut star =
                Star::new(Coords::default(), StarType::MainSequence, StarColor::Yellow, 4);
            star.convert_to_home_system(&template, &mut rng);
            // gas giant sits well above both midpoints
            let giant = &star.planets[2];
            assert!(giant.gravity < 233);
            assert!(giant.mining_difficulty < 900);
            // the rock sits below the gravity midpoint
            assert!(star.planets[0].gravity > 34);
        }
    }

    #[test]
    fn gas_redistribution_moves_points_away_from_majority() {
        let template = template();
        let mut rng = Prng::seeded(11);
        let mut star = Star::new(Coords::default(), StarType::MainSequence, StarColor::Yellow, 4);
        star.convert_to_home_system(&template, &mut rng);
        let home = &star.planets[1];
        // nitrogen (second gas) held the majority and gave some to oxygen
        assert!(home.gases[1].percentage < 70);
        assert!(home.gases[2].percentage > 20);
        assert_eq!(home.gas_total(), 100);
    }

    #[test]
    fn open_wormhole_records_destination() {
        let mut star = Star::new(Coords::new(1, 1, 1), StarType::Giant, StarColor::Red, 2);
        star.open_wormhole(Coords::new(30, 30, 30));
        assert!(star.worm_here);
        assert_eq!(star.worm, Coords::new(30, 30, 30));
    }
}
