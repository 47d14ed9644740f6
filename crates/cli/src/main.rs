use std::{error::Error, path::PathBuf};

use euler1d_cli::{Config, DEFAULT_CONFIG, logging, run};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(logging::level_from_env())?;

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    let config = Config::load(&path)?;
    run(&config)?;

    Ok(())
}
