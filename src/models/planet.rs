use serde::{Deserialize, Serialize};

use super::constants::{GasKind, PlanetSpecial};

/// One gas in a planet's atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gas {
    pub kind: GasKind,
    pub percentage: i32,
}

impl Gas {
    pub fn new(kind: GasKind, percentage: i32) -> Self {
        Gas { kind, percentage }
    }
}

/// Physical and atmospheric description of a single planet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Planet {
    /// Diameter in thousands of kilometres.
    pub diameter: i32,
    /// Density relative to water, times 100.
    pub density: i32,
    /// Surface gravity as a multiple of Earth gravity, times 100.
    pub gravity: i32,
    /// 1-30 (3-7 for gas giants).
    pub temperature_class: i32,
    /// 0-29. Zero means no atmosphere.
    pub pressure_class: i32,
    /// Atmosphere; percentages sum to 100, empty iff pressure class is 0.
    pub gases: Vec<Gas>,
    /// Mining difficulty times 100.
    pub mining_difficulty: i32,
    #[serde(default)]
    pub special: PlanetSpecial,
    /// Reserved for the economy; always 100 on a home planet.
    #[serde(default)]
    pub econ_efficiency: i32,
    #[serde(default)]
    pub md_increase: i32,
    #[serde(default)]
    pub message: i32,
}

impl Planet {
    pub fn has_atmosphere(&self) -> bool {
        !self.gases.is_empty()
    }

    pub fn is_home_planet(&self) -> bool {
        self.special == PlanetSpecial::IdealHomePlanet
    }

    pub fn gas_total(&self) -> i32 {
        self.gases.iter().map(|g| g.percentage).sum()
    }

    /// Percentage of `kind` in the atmosphere, if present.
    pub fn gas_percentage(&self, kind: GasKind) -> Option<i32> {
        self.gases
            .iter()
            .find(|g| g.kind == kind)
            .map(|g| g.percentage)
    }

    /// Life support needed for a species native to `home` to live here.
    ///
    /// Each temperature or pressure class of difference costs 3. Every gas
    /// present here that the home atmosphere lacks counts as a poison and
    /// costs 3. Oxygen is the required gas: a further 3 is added unless it
    /// is present within half to double the home planet's level.
    pub fn life_support_needed(&self, home: &Planet) -> i32 {
        let mut needed = 3 * (self.temperature_class - home.temperature_class).abs();
        needed += 3 * (self.pressure_class - home.pressure_class).abs();

        let home_oxygen = home.gas_percentage(GasKind::Oxygen).unwrap_or(0);
        let required_min = (home_oxygen / 2).max(1);
        let required_max = (home_oxygen * 2).min(100);

        let mut required_found = false;
        for gas in self.gases.iter().filter(|g| g.percentage > 0) {
            if gas.kind == GasKind::Oxygen {
                required_found = (required_min..=required_max).contains(&gas.percentage);
            } else if home.gas_percentage(gas.kind).is_none() {
                needed += 3;
            }
        }
        if !required_found {
            needed += 3;
        }

        needed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> Planet {
        Planet {
            diameter: 13,
            density: 550,
            gravity: 99,
            temperature_class: 11,
            pressure_class: 10,
            gases: vec![
                Gas::new(GasKind::Nitrogen, 78),
                Gas::new(GasKind::Oxygen, 22),
            ],
            mining_difficulty: 100,
            special: PlanetSpecial::IdealHomePlanet,
            ..Default::default()
        }
    }

    #[test]
    fn home_needs_no_life_support_on_itself() {
        let home = earth();
        assert_eq!(home.life_support_needed(&home), 0);
    }

    #[test]
    fn class_differences_cost_three_each() {
        let home = earth();
        let mut colony = earth();
        colony.temperature_class = 14;
        colony.pressure_class = 8;
        assert_eq!(colony.life_support_needed(&home), 3 * 3 + 3 * 2);
    }

    #[test]
    fn missing_oxygen_and_foreign_gases_cost() {
        let home = earth();
        let mut colony = earth();
        colony.gases = vec![
            Gas::new(GasKind::Methane, 60),
            Gas::new(GasKind::Nitrogen, 40),
        ];
        // methane is foreign, oxygen is missing
        assert_eq!(colony.life_support_needed(&home), 6);
    }

    #[test]
    fn oxygen_outside_tolerance_counts_as_missing() {
        let home = earth();
        let mut colony = earth();
        colony.gases = vec![
            Gas::new(GasKind::Nitrogen, 50),
            Gas::new(GasKind::Oxygen, 50),
        ];
        assert_eq!(colony.life_support_needed(&home), 3);
    }

    #[test]
    fn airless_planet() {
        let home = earth();
        let rock = Planet {
            temperature_class: 11,
            pressure_class: 0,
            ..Default::default()
        };
        assert!(!rock.has_atmosphere());
        assert_eq!(rock.life_support_needed(&home), 30 + 3);
    }

    #[test]
    fn gas_lookup() {
        let home = earth();
        assert_eq!(home.gas_total(), 100);
        assert_eq!(home.gas_percentage(GasKind::Oxygen), Some(22));
        assert_eq!(home.gas_percentage(GasKind::Helium), None);
    }
}
