use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A standard game has 15 species, 90 star systems and a radius of 20 parsecs.
pub const STANDARD_NUMBER_OF_SPECIES: i32 = 15;
pub const STANDARD_NUMBER_OF_STAR_SYSTEMS: i32 = 90;
pub const STANDARD_GALACTIC_RADIUS: i32 = 20;

pub const MIN_SPECIES: i32 = 1;
pub const MAX_SPECIES: i32 = 100;
pub const MIN_STARS: i32 = 12;
pub const MAX_STARS: i32 = 1000;
pub const MIN_RADIUS: i32 = 6;
pub const MAX_RADIUS: i32 = 50;

/// Acceptable "one star per N lattice points" window.
pub const MIN_CHANCE_OF_STAR: i32 = 50;
pub const MAX_CHANCE_OF_STAR: i32 = 3200;

pub const MIN_PLANETS_PER_STAR: i32 = 1;
pub const MAX_PLANETS_PER_STAR: i32 = 9;

/// Minimum length of a natural wormhole, in parsecs.
pub const MIN_WORMHOLE_LENGTH: i32 = 20;
/// A star gets a wormhole when `draw(100)` exceeds this.
pub const WORMHOLE_THRESHOLD: i32 = 92;

/// Home systems need at least this many planets.
pub const MIN_HOME_SYSTEM_PLANETS: usize = 3;
pub const HOME_TEMPLATE_SIZES: std::ops::RangeInclusive<usize> = 3..=9;

/// Habitability potential window for an accepted home template.
pub const MIN_HOME_POTENTIAL: i32 = 54;
pub const MAX_HOME_POTENTIAL: i32 = 56;

/// Upper bound on any resample-until-valid loop.
pub const MAX_RESAMPLES: u32 = 10_000;
/// Upper bound on Earth-like attempts for one template bucket.
pub const MAX_TEMPLATE_ATTEMPTS: u32 = 10_000;

/// Seed used by the home template and conversion commands.
pub const HOME_SEED: u64 = 0xC0FFEE;

/// Baseline (diameter, temperature class) per orbit, modelled on our own
/// solar system. Slot 0 is unused; slot 5 is the asteroid belt.
pub const SOLAR_BASELINE: [(i32, i32); 10] = [
    (0, 0),
    (5, 29),
    (12, 27),
    (13, 11),
    (7, 9),
    (20, 8),
    (143, 6),
    (121, 5),
    (51, 5),
    (49, 3),
];

macro_rules! string_coded {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == s)
                    .ok_or_else(|| format!("invalid {} {:?}", stringify!($ty), s))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$ty> for &'static str {
            fn from(v: $ty) -> &'static str {
                v.name()
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum StarType {
    Dwarf = 1,
    Degenerate = 2,
    MainSequence = 3,
    Giant = 4,
}

impl StarType {
    pub const ALL: [StarType; 4] = [
        StarType::Dwarf,
        StarType::Degenerate,
        StarType::MainSequence,
        StarType::Giant,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StarType::Dwarf => "dwarf",
            StarType::Degenerate => "degenerate",
            StarType::MainSequence => "main-sequence",
            StarType::Giant => "giant",
        }
    }

    /// Single-character prefix of the stellar code (blank for main sequence).
    pub fn symbol(&self) -> char {
        match self {
            StarType::Dwarf => 'd',
            StarType::Degenerate => 'D',
            StarType::MainSequence => ' ',
            StarType::Giant => 'g',
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_code(code: i32) -> Option<StarType> {
        StarType::ALL.iter().copied().find(|t| t.code() == code)
    }
}

string_coded!(StarType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum StarColor {
    Blue = 1,
    BlueWhite = 2,
    White = 3,
    YellowWhite = 4,
    Yellow = 5,
    Orange = 6,
    Red = 7,
}

impl StarColor {
    pub const ALL: [StarColor; 7] = [
        StarColor::Blue,
        StarColor::BlueWhite,
        StarColor::White,
        StarColor::YellowWhite,
        StarColor::Yellow,
        StarColor::Orange,
        StarColor::Red,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StarColor::Blue => "blue",
            StarColor::BlueWhite => "blue-white",
            StarColor::White => "white",
            StarColor::YellowWhite => "yellow-white",
            StarColor::Yellow => "yellow",
            StarColor::Orange => "orange",
            StarColor::Red => "red",
        }
    }

    /// Spectral class letter.
    pub fn spectral_class(&self) -> char {
        match self {
            StarColor::Blue => 'O',
            StarColor::BlueWhite => 'B',
            StarColor::White => 'A',
            StarColor::YellowWhite => 'F',
            StarColor::Yellow => 'G',
            StarColor::Orange => 'K',
            StarColor::Red => 'M',
        }
    }

    /// Hotter stars roll bigger dice when counting planets.
    pub fn planet_die(&self) -> i32 {
        match self {
            StarColor::Blue => 8,
            StarColor::BlueWhite => 7,
            StarColor::White => 6,
            StarColor::YellowWhite => 5,
            StarColor::Yellow => 4,
            StarColor::Orange => 3,
            StarColor::Red => 2,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_code(code: i32) -> Option<StarColor> {
        StarColor::ALL.iter().copied().find(|c| c.code() == code)
    }
}

string_coded!(StarColor);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum GasKind {
    Hydrogen = 1,
    Methane = 2,
    Helium = 3,
    Ammonia = 4,
    Nitrogen = 5,
    CarbonDioxide = 6,
    Oxygen = 7,
    HydrogenChloride = 8,
    Chlorine = 9,
    Fluorine = 10,
    Steam = 11,
    SulfurDioxide = 12,
    HydrogenSulfide = 13,
}

impl GasKind {
    pub const ALL: [GasKind; 13] = [
        GasKind::Hydrogen,
        GasKind::Methane,
        GasKind::Helium,
        GasKind::Ammonia,
        GasKind::Nitrogen,
        GasKind::CarbonDioxide,
        GasKind::Oxygen,
        GasKind::HydrogenChloride,
        GasKind::Chlorine,
        GasKind::Fluorine,
        GasKind::Steam,
        GasKind::SulfurDioxide,
        GasKind::HydrogenSulfide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GasKind::Hydrogen => "Hydrogen",
            GasKind::Methane => "Methane",
            GasKind::Helium => "Helium",
            GasKind::Ammonia => "Ammonia",
            GasKind::Nitrogen => "Nitrogen",
            GasKind::CarbonDioxide => "Carbon Dioxide",
            GasKind::Oxygen => "Oxygen",
            GasKind::HydrogenChloride => "Hydrogen Chloride",
            GasKind::Chlorine => "Chlorine",
            GasKind::Fluorine => "Fluorine",
            GasKind::Steam => "Steam",
            GasKind::SulfurDioxide => "Sulfur Dioxide",
            GasKind::HydrogenSulfide => "Hydrogen Sulfide",
        }
    }

    /// Chemical formula used in reports.
    pub fn formula(&self) -> &'static str {
        match self {
            GasKind::Hydrogen => "H2",
            GasKind::Methane => "CH4",
            GasKind::Helium => "He",
            GasKind::Ammonia => "NH3",
            GasKind::Nitrogen => "N2",
            GasKind::CarbonDioxide => "CO2",
            GasKind::Oxygen => "O2",
            GasKind::HydrogenChloride => "HCl",
            GasKind::Chlorine => "Cl2",
            GasKind::Fluorine => "F2",
            GasKind::Steam => "H2O",
            GasKind::SulfurDioxide => "SO2",
            GasKind::HydrogenSulfide => "H2S",
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_code(code: i32) -> Option<GasKind> {
        GasKind::ALL.iter().copied().find(|g| g.code() == code)
    }
}

string_coded!(GasKind);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum PlanetSpecial {
    #[default]
    NotSpecial = 0,
    IdealHomePlanet = 1,
    IdealColonyPlanet = 2,
    RadioactiveHellhole = 3,
}

impl PlanetSpecial {
    pub const ALL: [PlanetSpecial; 4] = [
        PlanetSpecial::NotSpecial,
        PlanetSpecial::IdealHomePlanet,
        PlanetSpecial::IdealColonyPlanet,
        PlanetSpecial::RadioactiveHellhole,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlanetSpecial::NotSpecial => "not-special",
            PlanetSpecial::IdealHomePlanet => "ideal-home-planet",
            PlanetSpecial::IdealColonyPlanet => "ideal-colony-planet",
            PlanetSpecial::RadioactiveHellhole => "radioactive-hellhole",
        }
    }

    /// Marker shown in the planet listing.
    pub fn label(&self) -> &'static str {
        match self {
            PlanetSpecial::IdealHomePlanet => " HOM ",
            PlanetSpecial::IdealColonyPlanet => " COL ",
            PlanetSpecial::NotSpecial | PlanetSpecial::RadioactiveHellhole => "     ",
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_code(code: i32) -> Option<PlanetSpecial> {
        PlanetSpecial::ALL.iter().copied().find(|p| p.code() == code)
    }
}

string_coded!(PlanetSpecial);
