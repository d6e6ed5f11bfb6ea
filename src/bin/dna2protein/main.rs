mod cli;
mod error;
mod logging;

use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use dna2protein::{classify, summarize, translate, ValidationResult};

use crate::cli::{CheckArgs, Cli, Commands, InputArgs, TranslateArgs};
use crate::error::{CliError, Result};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("dna2protein v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::Check(args) => {
            info!("Dispatching to 'check' command.");
            run_check(args)
        }
        Commands::Translate(args) => {
            info!("Dispatching to 'translate' command.");
            run_translate(args)
        }
    };

    match &result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    result
}

fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(sequence) = &args.sequence {
        debug!("Using sequence given on the command line.");
        Ok(sequence.clone())
    } else if let Some(path) = &args.input {
        debug!("Reading sequence from {}", path.display());
        fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.clone(),
            source,
        })
    } else {
        debug!("Reading sequence from stdin.");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let summary = summarize(&raw);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        match &summary.status {
            ValidationResult::InvalidCharacters(chars) => writeln!(
                out,
                "{} nucleotides: {} ({})",
                summary.nucleotides, summary.message, chars
            )?,
            _ => writeln!(out, "{} nucleotides: {}", summary.nucleotides, summary.message)?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct TranslationReport<'a> {
    protein: &'a str,
    codons: usize,
}

fn run_translate(args: TranslateArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    if classify(&raw) == ValidationResult::PartialCodon {
        warn!("Sequence length is not a multiple of 3, trailing bases are ignored.");
    }
    let protein = translate(&raw)?;
    info!("Translated {} codons.", protein.chars().count());

    let mut rendered = if args.json {
        serde_json::to_string_pretty(&TranslationReport {
            protein: &protein,
            codons: protein.chars().count(),
        })?
    } else {
        protein
    };
    rendered.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| CliError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            info!("Protein sequence written to {}", path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}
