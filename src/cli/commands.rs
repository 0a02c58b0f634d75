//! Command handlers
//!
//! Each handler loads what it needs from the data directory, does its work,
//! writes results back and reports through an [`OutputWriter`].

use std::path::Path;

use tracing::{info, warn};

use super::args::{
    Cli, Command, ConvertArgs, CreateCommand, CreateGalaxyArgs, CreateSetupArgs, ListArgs,
    ScanArgs,
};
use crate::io::persistence::{
    load_galaxy, load_setup, load_templates, save_galaxy, save_json, save_templates, GALAXY_FILE,
};
use crate::io::OutputWriter;
use crate::models::constants::{HOME_SEED, MAX_TEMPLATE_ATTEMPTS};
use crate::models::errors::{GalaxyError, GalaxyResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::Coords;
use crate::models::setup::SetupData;
use crate::prng::Prng;
use crate::services::integrity::{check_galaxy, verify_galaxy};
use crate::services::templates::build_home_templates;
use crate::ui::presenters::GalaxyPresenter;

/// Dispatch the parsed command line.
pub fn run(cli: &Cli, output: &mut dyn OutputWriter) -> GalaxyResult<()> {
    let data_dir = cli.data_dir.as_path();
    match &cli.command {
        Command::Create(CreateCommand::Setup(args)) => create_setup(args, cli.seed, output),
        Command::Create(CreateCommand::Galaxy(args)) => {
            create_galaxy(data_dir, args, cli.seed, output)
        }
        Command::Create(CreateCommand::Homes) => create_homes(data_dir, cli.seed, output),
        Command::Convert(args) => convert(data_dir, args, cli.seed, output),
        Command::List(args) => list(data_dir, args, output),
        Command::Scan(args) => scan(data_dir, args, output),
        Command::Check => check(data_dir, output),
    }
}

fn rng_for(seed: Option<u64>) -> Prng {
    match seed {
        Some(seed) => Prng::seeded(seed),
        None => Prng::from_time(),
    }
}

pub fn create_setup(
    args: &CreateSetupArgs,
    seed: Option<u64>,
    output: &mut dyn OutputWriter,
) -> GalaxyResult<()> {
    args.validate()?;
    let mut rng = rng_for(seed);
    let mut setup = SetupData::placeholder(&args.galaxy_name, args.number_of_players, &mut rng);
    setup.galaxy.forbid_nearby_wormholes = args.forbid_nearby_wormholes;
    setup.galaxy.low_density = args.low_density;
    setup.galaxy.minimum_distance = args.minimum_distance;
    setup.validate()?;

    save_json(&args.file_name, &setup)?;
    output.writeln(&format!(
        "Created setup file {} with {} players.",
        args.file_name.display(),
        setup.players.len()
    ));
    Ok(())
}

pub fn create_galaxy(
    data_dir: &Path,
    args: &CreateGalaxyArgs,
    seed: Option<u64>,
    output: &mut dyn OutputWriter,
) -> GalaxyResult<()> {
    let mut rng = rng_for(seed);
    let mut galaxy = match &args.setup {
        Some(path) => Galaxy::from_setup(&mut rng, &load_setup(path)?)?,
        None => Galaxy::generate(&mut rng, args.number_of_species, args.low_density)?,
    };
    galaxy.templates = load_templates(data_dir)?;
    verify_galaxy(&galaxy)?;

    let path = save_galaxy(data_dir, &galaxy)?;
    output.writeln(&format!(
        "This galaxy contains a total of {} stars and {} planets.",
        galaxy.number_of_stars, galaxy.number_of_planets
    ));
    match galaxy.number_of_wormholes {
        1 => output.writeln("The galaxy contains 1 natural wormhole."),
        n => output.writeln(&format!("The galaxy contains {n} natural wormholes.")),
    }
    output.writeln(&format!("Created {}.", path.display()));
    Ok(())
}

/// Build every home system template, export them, and store them in the
/// galaxy file when there is one.
pub fn create_homes(
    data_dir: &Path,
    seed: Option<u64>,
    output: &mut dyn OutputWriter,
) -> GalaxyResult<()> {
    let mut rng = Prng::seeded(seed.unwrap_or(HOME_SEED));
    let templates = build_home_templates(&mut rng, MAX_TEMPLATE_ATTEMPTS)?;

    for path in save_templates(data_dir, &templates)? {
        output.writeln(&format!("Created {}.", path.display()));
    }

    if data_dir.join(GALAXY_FILE).exists() {
        let mut galaxy = load_galaxy(data_dir)?;
        galaxy.templates = templates;
        let path = save_galaxy(data_dir, &galaxy)?;
        output.writeln(&format!("Updated {}.", path.display()));
    }
    Ok(())
}

pub fn convert(
    data_dir: &Path,
    args: &ConvertArgs,
    seed: Option<u64>,
    output: &mut dyn OutputWriter,
) -> GalaxyResult<()> {
    let request = args.request()?;
    let mut galaxy = load_galaxy(data_dir)?;
    if galaxy.templates.is_empty() {
        galaxy.templates = load_templates(data_dir)?;
        if galaxy.templates.is_empty() {
            warn!(dir = %data_dir.display(), "no home system templates found");
        }
    }

    if args.reset {
        let cleared = galaxy.reset_home_systems();
        info!(cleared, "reset home systems");
        output.writeln(&format!("Cleared {cleared} home systems."));
    }

    let mut rng = Prng::seeded(seed.unwrap_or(HOME_SEED));
    let converted = galaxy.convert_home_systems(
        request,
        args.minimum_distance,
        args.forbid_nearby_wormholes,
        &mut rng,
    )?;

    for coords in &converted {
        let orbit = galaxy
            .require_star(*coords)?
            .home_planet_index()
            .map_or(0, |i| i + 1);
        output.writeln(&format!(
            "Converted system {coords} to a home system, home planet is #{orbit}."
        ));
    }
    output.writeln(&format!(
        "Converted {} systems; the galaxy now has {} home systems.",
        converted.len(),
        galaxy.home_systems().count()
    ));

    verify_galaxy(&galaxy)?;
    save_galaxy(data_dir, &galaxy)?;
    Ok(())
}

pub fn list(data_dir: &Path, args: &ListArgs, output: &mut dyn OutputWriter) -> GalaxyResult<()> {
    let galaxy = load_galaxy(data_dir)?;
    if args.only_wormholes {
        GalaxyPresenter::show_wormholes(&galaxy, output);
    } else {
        GalaxyPresenter::show_list(&galaxy, !args.no_list_planets, output);
    }
    Ok(())
}

pub fn scan(data_dir: &Path, args: &ScanArgs, output: &mut dyn OutputWriter) -> GalaxyResult<()> {
    let galaxy = load_galaxy(data_dir)?;
    GalaxyPresenter::show_scan(&galaxy, Coords::new(args.x, args.y, args.z), output);
    Ok(())
}

pub fn check(data_dir: &Path, output: &mut dyn OutputWriter) -> GalaxyResult<()> {
    let galaxy = load_galaxy(data_dir)?;
    let problems = check_galaxy(&galaxy);
    if problems.is_empty() {
        output.writeln(&format!(
            "No problems found in {} stars.",
            galaxy.stars.len()
        ));
        return Ok(());
    }
    for problem in &problems {
        output.writeln(&format!("error: {problem}"));
    }
    Err(GalaxyError::IntegrityCheckFailed {
        problems: problems.len(),
    })
}
