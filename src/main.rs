use std::{path::PathBuf, process::exit};

use clap::Parser;
use gspan2sdf::{config::Config, convert, error::Result};
use log::error;

/// Converts graphs from a gSpan dataset into SDF files, one file per graph.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// The gSpan file to read graphs from (e.g. mydata.gspan).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The directory to store the output SDF files in.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Shift every atom label up by one, so an atom labeled 0 (normally H)
    /// becomes He.
    #[arg(short, long, alias = "atom_shift")]
    atom_shift: bool,

    /// Shift the atom numbers in every bond up by one. Use this when the gSpan
    /// vertices are numbered from 0, since SDF numbers atoms from 1.
    #[arg(short, long, alias = "bond_shift")]
    bond_shift: bool,

    /// Show debug messages.
    #[arg(short, long)]
    verbose: bool,

    /// A TOML file with any of the above settings. Options given on the
    /// command line take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also convert the last graph when the input doesn't end with a blank
    /// line. Without this, such a graph is silently dropped.
    #[arg(long)]
    flush_last: bool,
}

impl Cli {
    fn load_config(self) -> Result<Config> {
        let file = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(file.merge(Config {
            input: self.input,
            output: self.output,
            atom_shift: self.atom_shift,
            bond_shift: self.bond_shift,
            verbose: self.verbose,
            flush_last: self.flush_last,
        }))
    }
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    let config = cli.load_config();

    let level = match &config {
        Ok(c) if c.verbose => "debug",
        Err(_) if verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level),
    )
    .format_timestamp(None)
    .init();

    if let Err(e) = config.and_then(Config::resolve).and_then(|c| convert(&c)) {
        error!("{e}");
        exit(1);
    }
}
