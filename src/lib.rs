//! Galaxy Generator
//!
//! Builds the star map for a play-by-mail space-empire strategy game.
//!
//! # Overview
//!
//! A galaxy is a sphere of star systems sized to the number of species it
//! is designed for. Each star gets a type, color and planets; a few pairs of
//! distant stars are joined by natural wormholes. Home systems for the
//! species are picked far apart and rebuilt from balanced templates so that
//! every player starts on equal footing.
//!
//! # Modules
//!
//! - [`prng`] - Deterministic random number generator
//! - [`models`] - Domain models (Galaxy, Star, Planet, setup file)
//! - [`services`] - Generators for stars, planets, atmospheres and templates
//! - [`io`] - Output abstractions and JSON persistence
//! - [`ui`] - Report formatting
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use galaxygen::{Galaxy, Prng};
//!
//! let mut rng = Prng::seeded(42);
//! let galaxy = Galaxy::generate(&mut rng, 9, false)?;
//! println!("{} stars", galaxy.stars.len());
//! # Ok::<(), galaxygen::GalaxyError>(())
//! ```

pub mod cli;
pub mod io;
pub mod logging;
pub mod models;
pub mod prng;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::errors::{GalaxyError, GalaxyResult};
pub use models::galaxy::Galaxy;
pub use prng::Prng;
