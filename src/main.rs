use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use ghostproc::application::config::LogConfig;
use ghostproc::application::services::animator::haunt_snapshot;
use ghostproc::infrastructure::collectors::sysinfo_collector::SysinfoCollector;
use ghostproc::infrastructure::random::std_random::StdRandomSource;
use ghostproc::presentation::cli::app::Cli;
use ghostproc::presentation::tui::app::run_tui;

fn setup_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let filter = if log.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // The display owns the screen, so file logs must not carry colour codes.
    if let Some(ref path) = log.file {
        let file = File::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn report(prefix: &str, message: impl std::fmt::Display) {
    println!("{} {message}", prefix.red().bold());
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    if let Err(e) = setup_tracing(&config.log) {
        report("Error:", format!("{e:#}"));
        return ExitCode::FAILURE;
    }

    // Manual DI: main.rs is the only place that knows concrete types
    let collector = SysinfoCollector::new();

    // CPU usage is measured between two refreshes; give the first one time to age.
    tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
    let mut rng = StdRandomSource::from_option(config.seed);
    if let Some(seed) = config.seed {
        tracing::info!("Seeded haunting with {seed}");
    }
    let ghosts = match haunt_snapshot(&collector, &mut rng) {
        Ok(ghosts) => ghosts,
        Err(e) => {
            tracing::debug!("Process snapshot failed: {e:?}");
            report("Error:", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_tui(ghosts, Box::new(rng), config.tick_interval).await {
        report("Error running program:", format!("{e:#}"));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
