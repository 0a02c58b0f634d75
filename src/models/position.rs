use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer lattice position of a star system, in parsecs.
/// Generated galaxies use 0-based coordinates; the galactic centre sits
/// at (radius, radius, radius).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coords {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Coords { x, y, z }
    }

    pub fn distance_squared(&self, other: Coords) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// True if the point lies strictly inside the sphere of `radius`
    /// centred at (radius, radius, radius).
    pub fn within_galaxy(&self, radius: i32) -> bool {
        let centre = Coords::new(radius, radius, radius);
        self.distance_squared(centre) < radius * radius
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
