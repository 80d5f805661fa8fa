use crate::{
    commands::{Commands, ConvertArgs},
    error::CliError,
    settings::CliSettings,
};
use clap::Parser;
use filter_converter::{convert_with, parse_json};
use filter_model::Expression;
use std::{io::Read, path::Path};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod settings;

#[derive(Parser)]
#[command(
    name = "filterc",
    version = "0.1.0",
    about = "Renders filter expressions into backend filter clauses"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout only carries the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => {
            let clause = run_convert(&args)?;
            println!("{clause}");
        }
        Commands::Ast { input } => {
            let expression = read_expression(input.as_deref())?;
            let json =
                serde_json::to_string_pretty(&expression).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn run_convert(args: &ConvertArgs) -> Result<String, CliError> {
    let settings = CliSettings::resolve(args)?;
    let dialect = settings.dialect.build(settings.column.as_deref());
    let expression = read_expression(args.input.as_deref())?;

    info!("Converting filter expression for {}", dialect.name());
    debug!(?expression, "parsed filter expression");

    let clause = convert_with(&expression, dialect.as_ref(), &settings.converter_settings())?;
    Ok(clause)
}

fn read_expression(input: Option<&Path>) -> Result<Expression, CliError> {
    let source = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(parse_json(&source)?)
}
