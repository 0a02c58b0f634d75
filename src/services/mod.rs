//! Generation services
//!
//! The algorithms that fill the models: planets and their atmospheres,
//! stars, home system templates, and the checks run over a finished galaxy.

pub mod atmosphere;
pub mod earth_like;
pub mod integrity;
pub mod planets;
pub mod retry;
pub mod stars;
pub mod templates;
