//! Svgpieces - chess piece SVG variant generator.
//!
//! Reads six source icons (`pawn.svg` .. `king.svg`) and writes a black and a
//! white variant of each (`bP.svg`, `wP.svg`, ...), either by text
//! substitution or by restyling shape elements in the parsed XML.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod piece;
pub mod pipeline;
pub mod recolor;

use clap::Parser;
use cli::{Cli, Command, ConvertArgs};
use config::{Config, load_config_file, resolve_config_path, same_directory, save_config};
use piece::{PieceColor, PieceKind, output_file_name};
use pipeline::{ConvertOptions, convert_all};
use std::path::Path;

pub use error::{Error, Result};

/// Main entry point for svgpieces CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.convert.verbose, cli.convert.quiet);

    if let Some(command) = cli.command {
        return handle_command(command, cli.config.as_deref());
    }

    let config = config::load_config(cli.config.as_deref())?;
    config::validate_config(&config)?;

    convert(&cli.convert, &config)
}

/// Merge CLI arguments over configuration into run options.
pub fn resolve_options(args: &ConvertArgs, config: &Config) -> ConvertOptions {
    ConvertOptions {
        source_dir: args
            .source_dir
            .clone()
            .unwrap_or_else(|| config.defaults.source_dir.clone()),
        target_dir: args
            .target_dir
            .clone()
            .unwrap_or_else(|| config.defaults.target_dir.clone()),
        pieces: args
            .pieces
            .clone()
            .unwrap_or_else(|| PieceKind::ALL.to_vec()),
        progress_enabled: !args.quiet && !args.no_progress,
    }
}

/// Run a conversion with the given arguments.
fn convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    let options = resolve_options(args, config);
    let strategy = args.strategy.unwrap_or(config.defaults.strategy);

    if same_directory(&options.source_dir, &options.target_dir) {
        return Err(Error::ConfigValidation {
            message: format!(
                "source and target directories must differ, both are '{}'",
                options.source_dir.display()
            ),
        });
    }

    let recolorer = recolor::recolorer_for(strategy, config);
    let summary = convert_all(&options, recolorer.as_ref())?;

    output::log_summary(&summary);

    if args.json {
        println!("{}", output::summary_json(&summary)?);
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Logs go to stderr so --json output on stdout stays parseable
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config_path),
        Command::Pieces => {
            print_pieces();
            Ok(())
        }
    }
}

fn print_pieces() {
    println!("{:<8} {:<5} {:<12} outputs", "piece", "code", "source");
    for kind in PieceKind::ALL {
        let outputs = PieceColor::ALL
            .map(|color| output_file_name(kind, color))
            .join(", ");
        println!(
            "{:<8} {:<5} {:<12} {outputs}",
            kind.name(),
            kind.code(),
            kind.source_file_name()
        );
    }
}

fn handle_config_command(action: cli::ConfigAction, config_path: Option<&Path>) -> Result<()> {
    use cli::ConfigAction;

    let path = resolve_config_path(config_path)?;

    match action {
        ConfigAction::Init => {
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config_file(&path)?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
