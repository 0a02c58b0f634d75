use anyhow::Context;
use clap::Parser;

use galaxygen::cli::{self, Cli};
use galaxygen::io::ConsoleOutput;
use galaxygen::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level.as_deref());

    let mut output = ConsoleOutput;
    cli::run(&args, &mut output)
        .with_context(|| format!("data directory {}", args.data_dir.display()))?;
    Ok(())
}
