//! Logos CLI - argument analysis with traceable confidence scores.

use clap::Parser;
use logos_cli::commands;
use logos_cli::{Cli, Command, Formatter, Settings};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> logos_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;

    // Flags override the settings file
    let format = cli.format.map(Into::into).unwrap_or(settings.output.format);
    let color_enabled = !cli.no_color && settings.output.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Init => commands::execute_init(&settings, &formatter)?,
        Command::Ingest(args) => {
            commands::execute_ingest(args, &settings, &formatter)?;
        }
        Command::EvaluateArgument(args) => {
            commands::execute_evaluate_argument(args, &settings, &formatter)?;
        }
        Command::EvaluateEthics(args) => {
            commands::execute_evaluate_ethics(args, &settings, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` applies unless `-v` forces debug
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
