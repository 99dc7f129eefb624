//! Moon calculator command-line front end.
//!
//! Prints the moon sign and moon day for each date-time argument.
//!
//! # Usage
//!
//! ```bash
//! moon-calc 2000-01-21T00:00 2024-03-01T18:30
//! moon-calc --json 1990-06-15T12:30
//! moon-calc --config ./moon.toml 2021-01-15
//! ```
//!
//! # Environment Variables
//!
//! - `MOON_CONFIG`: configuration file, used when `--config` is not given
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use moon_rust::{MoonConfig, MoonReport};

struct Args {
    json: bool,
    config_path: Option<PathBuf>,
    inputs: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut json = false;
    let mut config_path = None;
    let mut inputs = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ => inputs.push(arg),
        }
    }

    if config_path.is_none() {
        config_path = env::var("MOON_CONFIG").ok().map(PathBuf::from);
    }

    Ok(Args {
        json,
        config_path,
        inputs,
    })
}

fn print_usage() {
    println!("Usage: moon-calc [--json] [--config <path>] <YYYY-MM-DDTHH:MM>...");
}

fn load_config(path: Option<&PathBuf>) -> Result<MoonConfig> {
    match path {
        Some(path) => MoonConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => MoonConfig::from_default_location_or_default()
            .context("Failed to load default configuration"),
    }
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = parse_args()?;
    if args.inputs.is_empty() {
        print_usage();
        bail!("No date-time given");
    }

    let config = load_config(args.config_path.as_ref())?;
    info!(
        "Using day count {:?}, labels {:?}",
        config.sign.day_count, config.output.labels
    );

    let mut failures = 0;
    for input in &args.inputs {
        match MoonReport::from_input(input, &config) {
            Ok(report) => {
                if args.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    for line in report.display_lines() {
                        println!("{}", line);
                    }
                }
            }
            Err(e) => {
                error!("{}", e);
                eprintln!("✗ {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} inputs could not be parsed", failures, args.inputs.len());
    }
    Ok(())
}
