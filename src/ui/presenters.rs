use std::collections::HashSet;

use crate::io::OutputWriter;
use crate::models::constants::PlanetSpecial;
use crate::models::galaxy::Galaxy;
use crate::models::planet::Planet;
use crate::models::position::Coords;
use crate::models::star::Star;

/// Hundredths as "x.yy", the way gravity and mining difficulty are shown.
fn hundredths(value: i32) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}

fn atmosphere(planet: &Planet) -> String {
    if planet.gases.is_empty() {
        return "No atmosphere".to_string();
    }
    planet
        .gases
        .iter()
        .filter(|g| g.percentage > 0)
        .map(|g| format!("{}({}%)", g.kind.formula(), g.percentage))
        .collect::<Vec<_>>()
        .join(",")
}

pub struct StarPresenter;

impl StarPresenter {
    /// The planet that life support is measured against: the home planet,
    /// or failing that an ideal colony planet.
    fn reference_planet(star: &Star) -> Option<&Planet> {
        star.planets.iter().find(|p| {
            matches!(
                p.special,
                PlanetSpecial::IdealHomePlanet | PlanetSpecial::IdealColonyPlanet
            )
        })
    }

    pub fn planet_line(orbit: usize, planet: &Planet, reference: Option<&Planet>) -> String {
        let lsn = match reference {
            Some(home) => format!("{:4} ", planet.life_support_needed(home)),
            None => "  ".to_string(),
        };
        format!(
            "{}#{} dia={:3} g={} tc={:2} pc={:2} md={}{}{}",
            planet.special.label(),
            orbit,
            planet.diameter,
            hundredths(planet.gravity),
            planet.temperature_class,
            planet.pressure_class,
            hundredths(planet.mining_difficulty),
            lsn,
            atmosphere(planet)
        )
    }

    pub fn show_planets(star: &Star, output: &mut dyn OutputWriter) {
        let reference = Self::reference_planet(star);
        for (i, planet) in star.planets.iter().enumerate() {
            output.writeln(&Self::planet_line(i + 1, planet, reference));
        }
    }

    pub fn show_summary(star: &Star, list_planets: bool, output: &mut dyn OutputWriter) {
        let c = star.coords;
        let mut line = String::new();
        if list_planets {
            line.push_str(&format!("System #{}:\t", star.system_number));
        }
        line.push_str(&format!(
            "x = {}\ty = {}\tz = {}\tstellar type = {}",
            c.x,
            c.y,
            c.z,
            star.stellar_code()
        ));
        if list_planets {
            line.push_str(&format!("\t{} planets.", star.num_planets));
        }
        output.writeln(&line);

        if star.is_nova() {
            output.writeln(&format!(
                "\tStar #{} went nova! All planets were blown away!",
                star.system_number
            ));
        }
    }

    /// Everything known about one system.
    pub fn show_scan(star: &Star, output: &mut dyn OutputWriter) {
        let c = star.coords;
        output.writeln(&format!(
            "Coordinates:\tx = {}\ty = {}\tz = {}\tstellar type = {}\t{} planets.",
            c.x,
            c.y,
            c.z,
            star.stellar_code(),
            star.num_planets
        ));
        if star.home_system {
            output.writeln("This is a home system.");
        }
        if star.worm_here {
            output.writeln(&format!(
                "!!! Natural wormhole from here to {}",
                star.worm
            ));
        }
        if star.is_nova() {
            output.writeln("This star went nova! All planets were blown away!");
            return;
        }
        output.writeln("");
        Self::show_planets(star, output);
    }
}

pub struct GalaxyPresenter;

impl GalaxyPresenter {
    /// One line per star, optionally followed by its planets, then totals.
    pub fn show_list(galaxy: &Galaxy, list_planets: bool, output: &mut dyn OutputWriter) {
        for star in &galaxy.stars {
            StarPresenter::show_summary(star, list_planets, output);
            if list_planets {
                if star.worm_here {
                    output.writeln(&format!(
                        "!!! Natural wormhole from here to {}",
                        star.worm
                    ));
                }
                StarPresenter::show_planets(star, output);
                output.writeln("");
            }
        }
        Self::show_totals(galaxy, list_planets, output);
    }

    pub fn show_totals(galaxy: &Galaxy, list_planets: bool, output: &mut dyn OutputWriter) {
        let [dwarf, degenerate, main_sequence, giant] = galaxy.type_counts();
        output.writeln(&format!(
            "The galaxy has a radius of {} parsecs.",
            galaxy.radius
        ));
        output.writeln(&format!(
            "It contains {dwarf} dwarf stars, {degenerate} degenerate stars, {main_sequence} main sequence stars,"
        ));
        output.writeln(&format!(
            "    and {giant} giant stars, for a total of {} stars.",
            galaxy.stars.len()
        ));
        if list_planets {
            let planets: usize = galaxy.stars.iter().map(|s| s.num_planets).sum();
            let wormholes = galaxy.stars.iter().filter(|s| s.worm_here).count() / 2;
            output.writeln(&format!(
                "The total number of planets in the galaxy is {planets}."
            ));
            output.writeln(&format!(
                "The total number of natural wormholes in the galaxy is {wormholes}."
            ));
            output.writeln(&format!(
                "The galaxy was designed for {} species.",
                galaxy.d_num_species
            ));
            output.writeln(&format!(
                "A total of {} species have been designated so far.",
                galaxy.num_species
            ));
        }
    }

    /// Each wormhole once, from the end placed first.
    pub fn show_wormholes(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        let mut reported: HashSet<Coords> = HashSet::new();
        let mut count = 0;
        for star in galaxy.stars.iter().filter(|s| s.worm_here) {
            if reported.contains(&star.coords) {
                continue;
            }
            count += 1;
            output.writeln(&format!(
                "Wormhole #{count}: from {} to {}",
                star.coords, star.worm
            ));
            reported.insert(star.coords);
            reported.insert(star.worm);
        }
        if count == 0 {
            output.writeln("There are no natural wormholes in this galaxy.");
        }
    }

    pub fn show_scan(galaxy: &Galaxy, coords: Coords, output: &mut dyn OutputWriter) {
        match galaxy.star_at(coords) {
            Some(star) => StarPresenter::show_scan(star, output),
            None => output.writeln(&format!(
                "Scan Report: There is no star system at x = {}, y = {}, z = {}.",
                coords.x, coords.y, coords.z
            )),
        }
    }
}
