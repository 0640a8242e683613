use clap::Parser;
use floorkit::cli::{self, Cli};
use floorkit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let cli = Cli::parse();
    cli::run(cli)
}
