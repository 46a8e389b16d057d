//! Command implementations for the trnlp CLI.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::analysis::tokenize;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TrnlpConfig;
use crate::detection::LanguageDetector;
use crate::error::{Result, TrnlpError};
use crate::lexicon::{Lexicon, provider_for_path, save_binary};
use crate::spelling::SpellCorrector;
use crate::syllable::syllabicate;

/// Execute a CLI command.
pub fn execute_command(args: TrnlpArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Detect(detect_args) => detect(detect_args, &config, &args),
        Command::Correct(correct_args) => correct(correct_args, &config, &args),
        Command::Syllabicate(syllabicate_args) => syllabicate_text(syllabicate_args, &args),
        Command::Lexicon(lexicon_args) => match &lexicon_args.command {
            LexiconCommand::Convert(convert_args) => convert_lexicon(convert_args, &args),
            LexiconCommand::Stats(stats_args) => lexicon_stats(stats_args, &config, &args),
        },
    }
}

/// Load the configuration file, or the defaults when none was given.
fn load_config(args: &TrnlpArgs) -> Result<TrnlpConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            TrnlpConfig::from_file(path)
        }
        None => Ok(TrnlpConfig::default()),
    }
}

/// The lexicon path from `--lexicon` / `TRNLP_LEXICON`, else the config file.
fn resolve_lexicon_path(args: &TrnlpArgs, config: &TrnlpConfig) -> Result<PathBuf> {
    args.lexicon
        .clone()
        .or_else(|| config.lexicon_path.clone())
        .ok_or_else(|| {
            TrnlpError::lexicon_unavailable(
                "no lexicon given; pass --lexicon, set TRNLP_LEXICON or add lexicon_path to the config",
            )
        })
}

/// Load a lexicon with the provider matching its extension.
fn load_lexicon(path: &Path) -> Result<(Lexicon, &'static str)> {
    let provider = provider_for_path(path);
    let start = Instant::now();
    let lexicon = provider.load()?;
    info!(
        "loaded {} words from {} ({} provider) in {}ms",
        lexicon.len(),
        path.display(),
        provider.name(),
        start.elapsed().as_millis()
    );
    Ok((lexicon, provider.name()))
}

/// Join positional text, or read stdin when there is none.
fn input_text(parts: &[String]) -> Result<String> {
    if !parts.is_empty() {
        return Ok(parts.join(" "));
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Score a text against the lexicon.
fn detect(args: &DetectArgs, config: &TrnlpConfig, cli_args: &TrnlpArgs) -> Result<()> {
    let (lexicon, _) = load_lexicon(&resolve_lexicon_path(cli_args, config)?)?;

    let mut detector_config = config.detector;
    if let Some(threshold) = args.threshold {
        detector_config.threshold = threshold;
    }
    let detector = LanguageDetector::with_config(&lexicon, detector_config)?;

    let text = input_text(&args.text)?;
    let report = detector.detect(text.as_str())?;

    output_result(
        "Language detection",
        &DetectionResult {
            text: text.trim().to_string(),
            report,
            threshold: detector_config.threshold,
        },
        cli_args,
    )
}

/// Correct the given words.
fn correct(args: &CorrectArgs, config: &TrnlpConfig, cli_args: &TrnlpArgs) -> Result<()> {
    let (lexicon, _) = load_lexicon(&resolve_lexicon_path(cli_args, config)?)?;

    let mut corrector_config = config.corrector;
    if let Some(max_distance) = args.max_distance {
        corrector_config.max_distance = max_distance;
    }
    let corrector = SpellCorrector::with_config(&lexicon, corrector_config)?;

    let words: Vec<String> = args.words.iter().map(|word| word.to_lowercase()).collect();
    let start = Instant::now();
    let corrections = if args.parallel {
        corrector.corrections_parallel(&words)
    } else {
        words.iter().map(|word| corrector.correction(word)).collect()
    };
    debug!(
        "corrected {} words in {}ms",
        words.len(),
        start.elapsed().as_millis()
    );

    let candidates = args
        .candidates
        .then(|| words.iter().map(|word| corrector.candidates(word)).collect());
    let changed = corrections.iter().filter(|c| c.is_changed()).count();

    output_result(
        "Spelling correction",
        &CorrectionResults {
            corrections,
            changed,
            candidates,
        },
        cli_args,
    )
}

/// Split every word of a text into syllables.
fn syllabicate_text(args: &SyllabicateArgs, cli_args: &TrnlpArgs) -> Result<()> {
    let text = input_text(&args.text)?;

    let words = tokenize(&text)
        .into_iter()
        .map(|word| {
            let syllables = syllabicate(&word);
            let hyphenated = args
                .separator
                .as_deref()
                .map(|separator| syllables.join(separator));
            WordSyllables {
                word,
                syllables,
                hyphenated,
            }
        })
        .collect();

    output_result(
        "Syllabication",
        &SyllabicationResults { words },
        cli_args,
    )
}

/// Convert any readable lexicon into the binary format.
fn convert_lexicon(args: &ConvertArgs, cli_args: &TrnlpArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(TrnlpError::invalid_argument(format!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        )));
    }

    let (lexicon, provider) = load_lexicon(&args.input)?;
    save_binary(&lexicon, &args.output)?;
    info!("wrote {} words to {}", lexicon.len(), args.output.display());

    output_result(
        "Lexicon converted successfully",
        &ConversionResult {
            input: args.input.to_string_lossy().to_string(),
            output: args.output.to_string_lossy().to_string(),
            provider: provider.to_string(),
            words: lexicon.len(),
            total_frequency: lexicon.total_frequency(),
        },
        cli_args,
    )
}

/// Report size, total frequency and the most frequent words.
fn lexicon_stats(
    args: &LexiconStatsArgs,
    config: &TrnlpConfig,
    cli_args: &TrnlpArgs,
) -> Result<()> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => resolve_lexicon_path(cli_args, config)?,
    };
    let (lexicon, provider) = load_lexicon(&path)?;

    output_result(
        "Lexicon statistics",
        &LexiconStats {
            path: path.to_string_lossy().to_string(),
            provider: provider.to_string(),
            words: lexicon.len(),
            total_frequency: lexicon.total_frequency(),
            top_words: lexicon.most_frequent(args.top),
        },
        cli_args,
    )
}
