use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Translate DNA sequences into protein sequences using the standard genetic code.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the nucleotide count and validation status of a sequence.
    Check(CheckArgs),
    /// Translate a DNA sequence into a protein sequence (reading frame 1).
    Translate(TranslateArgs),
}

/// Where the DNA sequence is read from. Defaults to stdin.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// The DNA sequence itself. Whitespace is ignored, case does not matter.
    #[arg(short, long, value_name = "DNA", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Path to a plain-text file holding the DNA sequence.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `translate` subcommand.
#[derive(Args, Debug)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the protein sequence to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}
