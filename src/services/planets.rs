//! Planet generator
//!
//! Planets start from the diameter and temperature of the corresponding
//! orbit in our own solar system, then get randomized. Every range
//! violation is corrected by re-perturbing toward the bound rather than
//! rejecting the planet, so generation always terminates inside bounds.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::models::constants::{MAX_RESAMPLES, SOLAR_BASELINE};
use crate::models::errors::GalaxyResult;
use crate::models::planet::Planet;
use crate::prng::Prng;
use crate::services::atmosphere::generate_gases;
use crate::services::retry::retry;

/// Diameters above this (thousands of km) make a gas giant.
pub const GAS_GIANT_DIAMETER: i32 = 40;

/// Resample window for ordinary mining difficulty, before the fudge factor.
pub const MINING_WINDOW: RangeInclusive<i32> = 40..=500;

/// Baseline diameter and temperature class for `orbit` (1-based) in a
/// system of `total` planets.
pub fn orbit_baseline(orbit: usize, total: usize) -> (i32, i32) {
    let slot = if total <= 3 {
        2 * orbit + 1
    } else {
        (9 * orbit) / total
    };
    SOLAR_BASELINE[slot]
}

/// Random walk of `rounds` steps of up to `die` in either direction.
fn random_walk(rng: &mut Prng, start: i32, die: i32, rounds: i32) -> i32 {
    let mut value = start;
    for _ in 0..rounds {
        if rng.draw(100) > 50 {
            value += rng.draw(die);
        } else {
            value -= rng.draw(die);
        }
    }
    value
}

fn die_for(base: i32) -> i32 {
    (base / 4).max(2)
}

pub fn generate_diameter(rng: &mut Prng, base: i32) -> i32 {
    let mut diameter = random_walk(rng, base, die_for(base), 4);
    // minimum diameter is 3,000 km
    while diameter < 3 {
        diameter += rng.draw(4);
    }
    diameter
}

/// Density times 100: 60-170 for gas giants, 370-570 otherwise.
pub fn generate_density(rng: &mut Prng, gas_giant: bool) -> i32 {
    let (base, sigma) = if gas_giant { (58, 56) } else { (368, 101) };
    base + rng.draw(sigma) + rng.draw(sigma)
}

/// Gravity is proportional to density times diameter; 72 makes an
/// Earth-like planet (density 550, diameter 13) come out at 100.
pub fn surface_gravity(density: i32, diameter: i32) -> i32 {
    density * diameter / 72
}

pub fn generate_temperature_class(
    rng: &mut Prng,
    total: usize,
    orbit: usize,
    gas_giant: bool,
    base: i32,
) -> i32 {
    let rounds = rng.draw(3) + rng.draw(3) + rng.draw(3);
    let mut tc = random_walk(rng, base, die_for(base), rounds);

    if gas_giant {
        while tc < 3 {
            tc += rng.draw(2);
        }
        while tc > 7 {
            tc -= rng.draw(2);
        }
    } else {
        while tc < 1 {
            tc += rng.draw(3);
        }
        while tc > 30 {
            tc -= rng.draw(3);
        }
    }

    // inner planets of small systems tend to come out too cold
    if total < 4 && orbit < 3 {
        while tc < 12 {
            tc += rng.draw(4);
        }
    }

    tc
}

/// A planet may not be warmer than the one inside it. A warmer planet is
/// pulled down to the inner planet's class, less 0 to 2.
pub fn cool_with_distance(rng: &mut Prng, tc: i32, inner: Option<&Planet>) -> i32 {
    match inner {
        Some(previous) if previous.temperature_class < tc => {
            (previous.temperature_class - (rng.draw(3) - 1)).max(1)
        }
        _ => tc,
    }
}

pub fn generate_pressure_class(rng: &mut Prng, gravity: i32, tc: i32, gas_giant: bool) -> i32 {
    if gravity < 10 {
        // too light to hold an atmosphere
        return 0;
    }
    if !(2..=27).contains(&tc) {
        return 0;
    }

    let base = gravity / 10;
    let rounds = rng.draw(3) + rng.draw(3) + rng.draw(3);
    let mut pc = random_walk(rng, base, die_for(base), rounds);

    if gas_giant {
        while pc < 11 {
            pc += rng.draw(3);
        }
        while pc > 29 {
            pc -= rng.draw(3);
        }
    } else {
        while pc < 0 {
            pc += rng.draw(3);
        }
        while pc > 12 {
            pc -= rng.draw(3);
        }
    }

    pc
}

/// Mining difficulty is roughly proportional to diameter, with the
/// occasional big surprise. Resampled until it lands in `window`.
pub fn generate_mining_difficulty(
    rng: &mut Prng,
    diameter: i32,
    window: RangeInclusive<i32>,
) -> GalaxyResult<i32> {
    retry(MAX_RESAMPLES, || {
        let dice = rng.draw(3) + rng.draw(3) + rng.draw(3) - rng.draw(4);
        let md = dice * rng.draw(diameter) + rng.draw(30) + rng.draw(30);
        window.contains(&md).then_some(md)
    })
    .or_fail("mining difficulty")
}

/// Generate the planets for one star system, innermost first.
pub fn generate_planets(rng: &mut Prng, total: usize) -> GalaxyResult<Vec<Planet>> {
    let mut planets: Vec<Planet> = Vec::with_capacity(total);

    for orbit in 1..=total {
        let (base_diameter, base_tc) = orbit_baseline(orbit, total);

        let diameter = generate_diameter(rng, base_diameter);
        let gas_giant = diameter > GAS_GIANT_DIAMETER;
        let density = generate_density(rng, gas_giant);
        let gravity = surface_gravity(density, diameter);

        let tc = generate_temperature_class(rng, total, orbit, gas_giant, base_tc);
        let tc = cool_with_distance(rng, tc, planets.last());

        let pc = generate_pressure_class(rng, gravity, tc, gas_giant);
        let gases = generate_gases(rng, pc, tc)?;

        // fudge factor
        let mining_difficulty = generate_mining_difficulty(rng, diameter, MINING_WINDOW)? * 11 / 5;

        trace!(orbit, diameter, tc, pc, "generated planet");
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

    Ok(planets)
}
