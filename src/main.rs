mod ui;

use altpass::config::{self, Config, ConfigFile};
use altpass::options::MAX_LENGTH;
use altpass::{PartialOptions, Permutations};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "altpass",
    version,
    author,
    about = "Memorizable passwords that alternate between the left and right hands"
)]
struct Cli {
    /// Password length
    #[arg(short, long, value_name = "INTEGER>0", value_parser = clap::value_parser!(i64).range(1..=MAX_LENGTH as i64))]
    length: Option<i64>,

    /// Use the memorizable pattern or not
    #[arg(short, long, value_name = "true|false", value_parser = parse_bool)]
    memorizable: Option<bool>,

    /// Show permutation size; verbosity increases with v's
    #[arg(
        short,
        long,
        value_name = "vvv",
        num_args = 0..=1,
        default_missing_value = "",
        value_parser = parse_verbosity
    )]
    permutations: Option<u8>,

    /// Show password switches
    #[arg(short, long)]
    switches: bool,

    /// Show the configuration file, creating it if it does not exist
    #[arg(short = 'c', long)]
    create_config: bool,

    /// Configuration file to use instead of ~/.altpass.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s {
        "t" | "true" => Ok(true),
        "f" | "false" => Ok(false),
        _ => Err("must be one of true, t, false, f".to_string()),
    }
}

fn parse_verbosity(s: &str) -> Result<u8, String> {
    if !s.chars().all(|c| c == 'v') {
        return Err("must be v's".to_string());
    }
    u8::try_from(s.len() + 1).map_err(|_| "too many v's".to_string())
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_path()?,
    };

    let file = Config::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .unwrap_or_default();

    let flags = PartialOptions {
        length: cli.length,
        memorizable: cli.memorizable,
        verbosity: cli.permutations,
    };
    let options = file.options.merge(flags).validate()?;
    let switches = cli.switches || file.switches.unwrap_or(false);
    tracing::debug!(?options, switches, "effective options");

    if cli.create_config {
        return ui::show_or_create_config(&config_path, &ConfigFile::new(&options, switches));
    }

    let display_options = ui::DisplayOptions {
        color_support: ui::detect_color_support(),
    };

    let password = altpass::generate(&options)?;
    ui::display_password(&password);

    if options.verbosity > 0 {
        let permutations = Permutations::new(&options)?;
        ui::display_permutations(&permutations, options.verbosity, &display_options);
    }

    if switches {
        println!("{}", ui::switches_line(&options));
    }

    Ok(())
}

/// Log a failed run; `true` when the run succeeded.
fn finish(result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("{:#}", e);
            false
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "altpass=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if finish(run(Cli::parse())) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
