//! OmicsDI RDF - XML export to Turtle converter

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use omicsdi_common::logging::{init_logging, LogConfig, LogLevel};
use omicsdi_rdf::registry::Registry;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "omicsdi-rdf")]
#[command(author, version, about = "Convert OmicsDI XML exports to RDF (Turtle)")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML file extending the built-in database tables
    #[arg(long, env = "OMICSDI_MAPPINGS", global = true)]
    mappings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one export to Turtle
    Convert {
        /// XML export, optionally gzip-compressed (.gz)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List known source and cross-reference databases
    Databases,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("omicsdi-rdf")
        .build();

    // Environment variables take precedence over flags
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The converter works without logging
    let guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = run(&cli) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {:#}", e);
        drop(guard);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let registry = Registry::load(cli.mappings.as_deref())?;

    match &cli.command {
        Command::Convert { input, output } => {
            let turtle = omicsdi_rdf::convert_file(input, &registry)?;
            match output {
                Some(path) => {
                    std::fs::write(path, &turtle)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(output = %path.display(), bytes = turtle.len(), "Wrote Turtle");
                },
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&turtle).context("Failed to write to stdout")?;
                    stdout.flush().context("Failed to write to stdout")?;
                },
            }
        },
        Command::Databases => print_databases(&registry)?,
    }

    Ok(())
}

fn print_databases(registry: &Registry) -> Result<()> {
    let mut out = std::io::stdout().lock();

    writeln!(out, "Source databases:")?;
    for (name, database) in registry.databases() {
        writeln!(out, "  {:<24} {}  {}", name, database.entity_prefix, database.homepage)?;
    }

    writeln!(out)?;
    writeln!(out, "Cross-reference databases:")?;
    for (name, templates) in registry.cross_references() {
        writeln!(
            out,
            "  {:<24} {}  {}",
            name,
            templates.identifiers_org.as_deref().unwrap_or("-"),
            templates.native.as_deref().unwrap_or("-"),
        )?;
    }

    Ok(())
}
