//! Domain models
//!
//! Stars, planets and the galaxy that holds them, plus the setup file the
//! galaxy is created from. Generation algorithms live in `services`.

pub mod constants;
pub mod errors;
pub mod galaxy;
pub mod planet;
pub mod position;
pub mod setup;
pub mod star;
