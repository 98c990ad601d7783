// src/bin/cli.rs
use sra_leaderboard::{cli, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {e}");
    }
    cli::run()?;
    Ok(())
}
