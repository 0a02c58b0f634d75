//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::constants::{MAX_SPECIES, MIN_SPECIES};
use crate::models::errors::{GalaxyError, GalaxyResult};
use crate::models::galaxy::ConversionRequest;
use crate::models::position::Coords;

#[derive(Parser, Debug)]
#[command(name = "galaxygen", about = "Galaxy generator for a space-empire strategy game")]
pub struct Cli {
    /// Directory holding galaxy.json and the HS<n>.json templates.
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Seed for the random number generator.
    #[arg(short = 's', long, global = true)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a setup file, a galaxy, or the home system templates.
    #[command(subcommand)]
    Create(CreateCommand),
    /// Convert star systems to home systems.
    Convert(ConvertArgs),
    /// List the stars, planets and wormholes of the galaxy.
    List(ListArgs),
    /// Show everything known about one star system.
    Scan(ScanArgs),
    /// Check the integrity of the galaxy file.
    Check,
}

#[derive(Subcommand, Debug)]
pub enum CreateCommand {
    /// Create a setup file ready to be filled out with player information.
    Setup(CreateSetupArgs),
    /// Create a new galaxy.
    Galaxy(CreateGalaxyArgs),
    /// Create the home system templates (HS3.json through HS9.json).
    Homes,
}

#[derive(Args, Debug)]
pub struct CreateSetupArgs {
    /// Name of the galaxy to be set up.
    #[arg(short = 'g', long)]
    pub galaxy_name: String,

    /// Name of the file to create.
    #[arg(short = 'f', long)]
    pub file_name: PathBuf,

    /// Number of player entries to create.
    #[arg(short = 'n', long)]
    pub number_of_players: usize,

    /// Forbid home systems near wormholes.
    #[arg(long)]
    pub forbid_nearby_wormholes: bool,

    /// Spread the stars out by pretending there are 50% more species.
    #[arg(long)]
    pub low_density: bool,

    /// Minimum distance between home systems.
    #[arg(short = 'd', long, default_value_t = 10)]
    pub minimum_distance: i32,
}

#[derive(Args, Debug)]
pub struct CreateGalaxyArgs {
    /// Number of species the galaxy is designed for.
    #[arg(short = 'n', long, default_value_t = 9)]
    pub number_of_species: i32,

    /// Spread the stars out by pretending there are 50% more species.
    #[arg(long)]
    pub low_density: bool,

    /// Create the galaxy from a setup file instead.
    #[arg(long, conflicts_with_all = ["number_of_species", "low_density"])]
    pub setup: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Convert picked systems, up to the designed number of species.
    #[arg(long)]
    pub all: bool,

    /// Convert one picked system.
    #[arg(long)]
    pub one: bool,

    /// Clear existing home system flags first.
    #[arg(long)]
    pub reset: bool,

    /// Convert picked systems until there are this many home systems.
    #[arg(short = 'n', long, default_value_t = 0)]
    pub add_up_to: usize,

    /// Minimum distance between home systems.
    #[arg(short = 'd', long, default_value_t = 10)]
    pub minimum_distance: i32,

    /// Keep home systems away from wormholes too.
    #[arg(long)]
    pub forbid_nearby_wormholes: bool,

    /// X coordinate of the system to convert.
    #[arg(short = 'x', long = "x-origin", allow_negative_numbers = true)]
    pub x: Option<i32>,

    /// Y coordinate of the system to convert.
    #[arg(short = 'y', long = "y-origin", allow_negative_numbers = true)]
    pub y: Option<i32>,

    /// Z coordinate of the system to convert.
    #[arg(short = 'z', long = "z-origin", allow_negative_numbers = true)]
    pub z: Option<i32>,
}

impl ConvertArgs {
    /// Resolve the flags into a single request, rejecting combinations that
    /// contradict each other.
    pub fn request(&self) -> GalaxyResult<ConversionRequest> {
        let coords = match (self.x, self.y, self.z) {
            (None, None, None) => None,
            (Some(x), Some(y), Some(z)) => Some(Coords::new(x, y, z)),
            _ => return Err(invalid("specify all three co-ordinates")),
        };

        if self.all && self.one {
            return Err(invalid("specify either all or one, not both"));
        }
        if coords.is_some() && self.all {
            return Err(invalid("specify either all or co-ordinates, not both"));
        }
        if coords.is_some() && self.one {
            return Err(invalid("specify either one or co-ordinates, not both"));
        }
        if coords.is_some() && self.add_up_to > 0 {
            return Err(invalid("specify either add-up-to or co-ordinates, not both"));
        }

        match (coords, self.add_up_to, self.all, self.one) {
            (Some(coords), _, _, _) => Ok(ConversionRequest::At(coords)),
            (None, n, _, _) if n > 0 => Ok(ConversionRequest::AddUpTo(n)),
            (None, _, true, _) => Ok(ConversionRequest::All),
            (None, _, _, true) => Ok(ConversionRequest::One),
            _ => Err(invalid(
                "specify --one, --all, --add-up-to or the co-ordinates of a system",
            )),
        }
    }
}

fn invalid(reason: &str) -> GalaxyError {
    GalaxyError::InvalidArguments(reason.to_string())
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Do not list planets.
    #[arg(short = 'p', long)]
    pub no_list_planets: bool,

    /// List only wormholes.
    #[arg(short = 'w', long)]
    pub only_wormholes: bool,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CreateSetupArgs {
    pub fn validate(&self) -> GalaxyResult<()> {
        let players = self.number_of_players as i32;
        if !(MIN_SPECIES..=MAX_SPECIES).contains(&players) {
            return Err(GalaxyError::SpeciesOutOfRange {
                count: players,
                min: MIN_SPECIES,
                max: MAX_SPECIES,
            });
        }
        if self.galaxy_name.trim().is_empty() {
            return Err(invalid("you must specify a valid galaxy name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("galaxygen").chain(args.iter().copied())).unwrap()
    }

    fn convert_args(args: &[&str]) -> ConvertArgs {
        let mut full = vec!["convert"];
        full.extend_from_slice(args);
        match parse(&full).command {
            Command::Convert(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_anywhere() {
        let cli = parse(&["list", "--data-dir", "/tmp/game", "--seed", "42"]);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/game"));
        assert_eq!(cli.seed, Some(42));
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn create_galaxy_defaults() {
        let cli = parse(&["create", "galaxy"]);
        match cli.command {
            Command::Create(CreateCommand::Galaxy(args)) => {
                assert_eq!(args.number_of_species, 9);
                assert!(!args.low_density);
                assert!(args.setup.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.data_dir, PathBuf::from("."));
    }

    #[test]
    fn setup_conflicts_with_species_count() {
        let result = Cli::try_parse_from([
            "galaxygen", "create", "galaxy", "-n", "5", "--setup", "setup.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn convert_requests() {
        assert_eq!(convert_args(&["--one"]).request().unwrap(), ConversionRequest::One);
        assert_eq!(convert_args(&["--all"]).request().unwrap(), ConversionRequest::All);
        assert_eq!(
            convert_args(&["-n", "4"]).request().unwrap(),
            ConversionRequest::AddUpTo(4)
        );
        assert_eq!(
            convert_args(&["-x", "1", "-y", "2", "-z", "3"]).request().unwrap(),
            ConversionRequest::At(Coords::new(1, 2, 3))
        );
        assert_eq!(convert_args(&[]).minimum_distance, 10);
    }

    #[test]
    fn convert_conflicts() {
        for args in [
            vec!["--one", "--all"],
            vec!["--all", "-x", "1", "-y", "2", "-z", "3"],
            vec!["--one", "-x", "1", "-y", "2", "-z", "3"],
            vec!["-x", "1"],
            vec![],
        ] {
            assert!(
                matches!(
                    convert_args(&args).request(),
                    Err(GalaxyError::InvalidArguments(_))
                ),
                "{args:?}"
            );
        }
    }

    #[test]
    fn scan_takes_three_coordinates() {
        match parse(&["scan", "4", "5", "6"]).command {
            Command::Scan(args) => assert_eq!((args.x, args.y, args.z), (4, 5, 6)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn create_setup_bounds() {
        let cli = parse(&["create", "setup", "-g", "alpha", "-f", "setup.json", "-n", "0"]);
        match cli.command {
            Command::Create(CreateCommand::Setup(args)) => {
                assert!(matches!(
                    args.validate(),
                    Err(GalaxyError::SpeciesOutOfRange { count: 0, .. })
                ));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
