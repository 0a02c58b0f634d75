use tracing::debug;

use crate::models::constants::{MIN_WORMHOLE_LENGTH, WORMHOLE_THRESHOLD};
use crate::models::star::Star;
use crate::prng::Prng;

/// Link pairs of distant stars with natural wormholes.
///
/// Each star that is not a home system and has no wormhole yet gets one with
/// a small probability. Its partner is the first eligible star found by
/// scanning from a random offset, wrapping around the star list. Both ends
/// record each other. Returns the number of wormholes created.
pub fn pair_wormholes(rng: &mut Prng, stars: &mut [Star], desired_stars: i32) -> usize {
    let min_squared = MIN_WORMHOLE_LENGTH * MIN_WORMHOLE_LENGTH;
    let mut created = 0;

    for i in 0..stars.len() {
        if stars[i].home_system || stars[i].worm_here || rng.draw(100) <= WORMHOLE_THRESHOLD {
            continue;
        }

        let offset = rng.draw(desired_stars) as usize;
        let partner = (0..desired_stars as usize)
            .map(|k| (k + offset) % stars.len())
            .find(|&j| {
                let candidate = &stars[j];
                j != i
                    && !candidate.home_system
                    && !candidate.worm_here
                    && stars[i].distance_squared_to(candidate) >= min_squared
            });

        let Some(j) = partner else {
            // every candidate was too close or already linked
            continue;
        };

        let (here, there) = (stars[i].coords, stars[j].coords);
        stars[i].open_wormhole(there);
        stars[j].open_wormhole(here);
        debug!(from = %here, to = %there, "natural wormhole");
        created += 1;
    }

    created
}
