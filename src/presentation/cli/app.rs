use clap::Parser;
use std::path::PathBuf;

use crate::application::config::{AppConfig, LogConfig};

/// ghostproc: your process list, haunted
///
/// Shows every running process as a row drifting across the terminal.
/// Now and then a row is possessed and renamed; busy processes glow red.
#[derive(Parser, Debug)]
#[command(name = "ghostproc")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Milliseconds between animation ticks
    #[arg(short, long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Seed the haunting for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        AppConfig::new(
            self.tick_ms,
            self.seed,
            LogConfig {
                verbose: self.verbose,
                file: self.log_file,
            },
        )
    }
}
