use anyhow::Result;
use clap::Parser;
use ridge::cli::{self, Args, RunConfig};
use ridge::logging;
use std::io;
use std::process::ExitCode;

fn try_main() -> Result<()> {
    let config = RunConfig::from(Args::parse());
    logging::init(config.verbosity)?;
    cli::run(&config, &mut io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ridge: {e:#}");
            ExitCode::FAILURE
        }
    }
}
