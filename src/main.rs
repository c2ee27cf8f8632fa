use anyhow::{Context, Result};
use datekit::cli::{self, CommandLine};
use datekit::logger;

fn main() -> Result<()> {
    let commands = CommandLine::parse_args();

    let config = commands.load_config()?;
    let logger = logger::init(&config.logging)?;
    let clock = commands.clock()?;

    let output = cli::run(&commands.command, &config, clock.as_ref());
    let flushed = logger.flush();

    let output = output?;
    if !output.is_empty() {
        println!("{}", output);
    }

    flushed.context("Failed to flush log file")?;
    Ok(())
}
