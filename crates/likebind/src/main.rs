#![forbid(unsafe_code)]

//! Headless driver for the profile screen.
//!
//! Creates the screen, prints its widgets, then taps the like button the
//! requested number of times and prints the widgets after each tap.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use likebind::{AppConfig, AppError, ProfileActivity, logging};
use likebind_runtime::ViewModelStore;

#[derive(Debug, Parser)]
#[command(name = "likebind", version, about = "Drive the bound profile screen")]
struct Cli {
    /// TOML config file; defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of like taps to perform.
    #[arg(long, default_value_t = 0)]
    taps: u32,

    /// Recreate the screen after tapping, keeping the view model.
    #[arg(long)]
    recreate: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

fn run(cli: Cli) -> Result<(), AppError> {
    logging::init(&cli.log_level, cli.json_logs)?;
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let store = ViewModelStore::new();
    let activity = ProfileActivity::on_create(&store, &config)?;
    print!("{}", activity.view());

    for tap in 1..=cli.taps {
        activity.like()?;
        println!("-- tap {tap}");
        print!("{}", activity.view());
    }

    if cli.recreate {
        drop(activity);
        let activity = ProfileActivity::on_create(&store, &config)?;
        println!("-- recreated");
        print!("{}", activity.view());
    }

    store.clear();
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("likebind: {err}");
            ExitCode::FAILURE
        }
    }
}
