use thiserror::Error;

/// Errors raised while generating, converting, loading or checking a galaxy.
#[derive(Debug, Error)]
pub enum GalaxyError {
    /// Designed species count outside the allowed range
    #[error("number of species must be between {min} and {max}, inclusive (got {count})")]
    SpeciesOutOfRange { count: i32, min: i32, max: i32 },
    /// Low-density adjustment pushed the species count out of range
    #[error("adjusted number of species must be between {min} and {max}, inclusive (got {count})")]
    AdjustedSpeciesOutOfRange { count: i32, min: i32, max: i32 },
    #[error("number of stars must be between {min} and {max}, inclusive (got {count})")]
    StarsOutOfRange { count: i32, min: i32, max: i32 },
    #[error("radius must be between {min} and {max} parsecs, inclusive (got {radius})")]
    RadiusOutOfRange { radius: i32, min: i32, max: i32 },
    #[error("galactic radius is too small for {stars} stars")]
    RadiusTooSmall { stars: i32 },
    #[error("galactic radius is too large for {stars} stars")]
    RadiusTooLarge { stars: i32 },
    #[error("minimum distance must be between {min} and {max} (got {distance})")]
    MinimumDistanceOutOfRange { distance: i32, min: i32, max: i32 },
    /// No star satisfies the home-system spacing rules
    #[error("all suitable systems are within {distance} parsecs of each other")]
    NoSuitableSystem { distance: i32 },
    #[error("there is no star system at x = {x}, y = {y}, z = {z}")]
    NoStarAt { x: i32, y: i32, z: i32 },
    #[error("no home system template for {planets} planets")]
    MissingTemplate { planets: usize },
    /// A bounded resampling loop ran out of attempts
    #[error("{what}: gave up after {attempts} attempts")]
    RetriesExhausted { what: &'static str, attempts: u32 },
    /// A generator produced a value it never should; indicates a logic defect
    #[error("assertion failed: {0}")]
    Assertion(String),
    #[error("player {player}: {reason}")]
    InvalidSetup { player: usize, reason: String },
    #[error("invalid setup: {0}")]
    InvalidSetupFile(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("integrity check found {problems} problem(s)")]
    IntegrityCheckFailed { problems: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using GalaxyError
pub type GalaxyResult<T> = Result<T, GalaxyError>;
