//! `launcher-icons` CLI - Generate launcher and store-listing icons.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launcher_icons::{icons, Config, IconGenerator};

/// Generate transparent Android launcher icons and a store-listing icon
/// from a single source image.
#[derive(Parser, Debug)]
#[command(name = "launcher-icons")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image path. Defaults to the project's screenshot.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Android resource directory receiving the mipmap-* directories.
    #[arg(long, value_name = "DIR")]
    res_dir: Option<PathBuf>,

    /// Directory receiving app_icon_512.png.
    #[arg(long, value_name = "DIR")]
    store_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("launcher_icons={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    let defaults = Config::default();
    let config = Config {
        input: args.input.unwrap_or(defaults.input),
        res_dir: args.res_dir.unwrap_or(defaults.res_dir),
        store_dir: args.store_dir.unwrap_or(defaults.store_dir),
    };

    IconGenerator::new(config)
        .run_with(|icon| println!("Created: {}", icon.path.display()))
        .context("Failed to generate icons")?;

    println!("\n{}", icons::summary());

    Ok(())
}
