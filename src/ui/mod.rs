//! Report formatting
//!
//! Presenters turn stars and galaxies into the text shown by the `list`,
//! `scan` and `check` commands, keeping formatting out of the models.

pub mod presenters;
