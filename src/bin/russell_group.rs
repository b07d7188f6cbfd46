// src/bin/russell_group.rs
use color_eyre::eyre::Result;

use degree_facts::{config::options::RunConfig, log, progress::ConsoleProgress, runner};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    runner::run_live(&RunConfig::russell_group(), &mut ConsoleProgress)?;
    Ok(())
}
