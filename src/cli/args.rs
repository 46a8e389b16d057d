//! Command line argument parsing for the trnlp CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// trnlp - Turkish language detection, spelling correction and syllabication
#[derive(Parser, Debug, Clone)]
#[command(name = "trnlp")]
#[command(about = "Turkish language detection, spelling correction and syllabication")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TrnlpArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Lexicon file (word list, frequency file or .trlx binary)
    #[arg(short, long, value_name = "PATH", env = "TRNLP_LEXICON", global = true)]
    pub lexicon: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TrnlpArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decide whether a text is Turkish
    Detect(DetectArgs),

    /// Correct misspelled words
    Correct(CorrectArgs),

    /// Split the words of a text into syllables
    Syllabicate(SyllabicateArgs),

    /// Inspect and convert lexicon files
    Lexicon(LexiconArgs),
}

/// Arguments for language detection
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// Text to score; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Match ratio that must be exceeded
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for spelling correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Maximum edit distance to search (0, 1 or 2)
    #[arg(short = 'd', long)]
    pub max_distance: Option<usize>,

    /// Correct words on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Show every candidate of the winning distance
    #[arg(long)]
    pub candidates: bool,
}

/// Arguments for syllabication
#[derive(Parser, Debug, Clone)]
pub struct SyllabicateArgs {
    /// Text to split; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Also print each word joined with this separator
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,
}

/// Arguments for lexicon maintenance
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    #[command(subcommand)]
    pub command: LexiconCommand,
}

/// Lexicon subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LexiconCommand {
    /// Convert a word list or frequency file to the binary format
    Convert(ConvertArgs),

    /// Show lexicon statistics
    Stats(LexiconStatsArgs),
}

/// Arguments for lexicon conversion
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Source lexicon
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination binary lexicon
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for lexicon statistics
#[derive(Parser, Debug, Clone)]
pub struct LexiconStatsArgs {
    /// Lexicon to inspect; defaults to --lexicon
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Number of most frequent words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
