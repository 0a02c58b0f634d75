//! Deterministic random number generator
//!
//! Every random decision in galaxy generation comes from [`Prng::draw`].
//! The generator combines a congruential step (multiply by 16417) with a
//! shift-register step and XORs the two into the next state. Output
//! sequences are part of the saved-game compatibility contract, so the
//! bit mixing must never change.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};

/// State used before any explicit seeding.
pub const DEFAULT_STATE: u64 = 1_924_085_713;

/// Algorithm M generator. One instance per generation run; not shared
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prng {
    last: u64,
}

impl Default for Prng {
    fn default() -> Self {
        Prng { last: DEFAULT_STATE }
    }
}

impl Prng {
    /// Create a generator from `seed` and run the warm-up.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Prng { last: 0 };
        rng.seed(seed);
        rng
    }

    /// Create a generator seeded from the system clock.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(DEFAULT_STATE);
        Prng::seeded(nanos)
    }

    /// Reset the state to `value`, then discard a pseudo-random number of
    /// draws so that neighbouring seeds do not start out correlated.
    ///
    /// Zero is a fixed point of the state update, so a zero seed starts
    /// from [`DEFAULT_STATE`] instead.
    pub fn seed(&mut self, value: u64) {
        self.last = if value == 0 { DEFAULT_STATE } else { value };
        let discard = self.draw(100) + self.draw(200) + self.draw(300);
        for _ in 0..discard {
            self.draw(10);
        }
    }

    /// Advance the state word once and return it.
    fn step(&mut self) -> u64 {
        let s = self.last;

        let congruential = s.wrapping_add(s << 5).wrapping_add(s << 14);

        let mut shift_register = (s >> 15) ^ s;
        shift_register ^= shift_register << 17;

        self.last = congruential ^ shift_register;
        self.last
    }

    /// Return an integer in `[1, max]`. `max` must be at least 1.
    pub fn draw(&mut self, max: i32) -> i32 {
        debug_assert!(max >= 1, "draw called with max {}", max);
        let low = self.step() & 0xFFFF;
        ((low * max as u64) >> 16) as i32 + 1
    }
}

impl RngCore for Prng {
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Prng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Prng::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Prng::seeded(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_STATE: u64 = 0xf9e5_413b_a37e;
    const SECOND_STATE: u64 = 0xcd50_1ada_a16c_b237;
    const DEFAULT_DRAWS: [i32; 8] = [64, 70, 29, 62, 75, 73, 55, 54];
    const COFFEE_DRAWS: [i32; 8] = [29, 47, 47, 26, 67, 93, 71, 78];

    #[test]
    fn draws_stay_in_range() {
        let mut rng = Prng::seeded(42);
        for max in [1, 2, 3, 7, 10, 100, 1000] {
            for _ in 0..500 {
                let v = rng.draw(max);
                assert!(v >= 1 && v <= max, "draw({}) returned {}", max, v);
            }
        }
    }

    #[test]
    fn draw_of_one_is_always_one() {
        let mut rng = Prng::default();
        for _ in 0..100 {
            assert_eq!(rng.draw(1), 1);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Prng::seeded(0xC0FFEE);
        let mut b = Prng::seeded(0xC0FFEE);
        let xs: Vec<i32> = (0..64).map(|_| a.draw(1000)).collect();
        let ys: Vec<i32> = (0..64).map(|_| b.draw(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn neighbouring_seeds_diverge() {
        let mut a = Prng::seeded(1);
        let mut b = Prng::seeded(2);
        let xs: Vec<i32> = (0..16).map(|_| a.draw(1000)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.draw(1000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn step_matches_reference_mixing() {
        let mut rng = Prng::default();
        assert_eq!(rng.step(), FIRST_STATE);
        assert_eq!(rng.step(), SECOND_STATE);
    }

    #[test]
    fn reference_sequence_from_default_state() {
        let mut rng = Prng::default();
        let draws: Vec<i32> = (0..8).map(|_| rng.draw(100)).collect();
        assert_eq!(draws, DEFAULT_DRAWS);
    }

    #[test]
    fn reference_sequence_after_seeding() {
        let mut rng = Prng::seeded(0xC0FFEE);
        let draws: Vec<i32> = (0..8).map(|_| rng.draw(100)).collect();
        assert_eq!(draws, COFFEE_DRAWS);
    }

    #[test]
    fn seed_from_u64_matches_seeded() {
        let a = Prng::seed_from_u64(99);
        let b = Prng::seeded(99);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = Prng::seeded(0);
        assert_eq!(rng, Prng::seeded(DEFAULT_STATE));
        let draws: Vec<i32> = (0..16).map(|_| rng.draw(100)).collect();
        assert!(draws.iter().any(|&d| d != 1), "{draws:?}");
        assert_eq!(Prng::from_seed([0; 8]), Prng::seeded(DEFAULT_STATE));
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut rng = Prng::seeded(5);
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
