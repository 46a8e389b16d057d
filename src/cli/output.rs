//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TrnlpArgs};
use crate::detection::DetectionReport;
use crate::error::Result;
use crate::spelling::Correction;

/// Result structure for language detection.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionResult {
    pub text: String,
    #[serde(flatten)]
    pub report: DetectionReport,
    pub threshold: f64,
}

/// Result structure for spelling correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub corrections: Vec<Correction>,
    pub changed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Vec<(String, u64)>>>,
}

/// Syllables of a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSyllables {
    pub word: String,
    pub syllables: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyphenated: Option<String>,
}

/// Result structure for syllabication.
#[derive(Debug, Serialize, Deserialize)]
pub struct SyllabicationResults {
    pub words: Vec<WordSyllables>,
}

/// Result structure for lexicon conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResult {
    pub input: String,
    pub output: String,
    pub provider: String,
    pub words: usize,
    pub total_frequency: u64,
}

/// Lexicon statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconStats {
    pub path: String,
    pub provider: String,
    pub words: usize,
    pub total_frequency: u64,
    pub top_words: Vec<(String, u64)>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TrnlpArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TrnlpArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match std::any::type_name::<T>() {
        name if name.ends_with("CorrectionResults") => output_corrections_human(&value),
        name if name.ends_with("SyllabicationResults") => output_syllables_human(&value),
        name if name.ends_with("LexiconStats") => output_lexicon_stats_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output corrections in human format, one `original -> corrected` per line.
fn output_corrections_human(value: &serde_json::Value) -> Result<()> {
    let Some(corrections) = value.get("corrections").and_then(|c| c.as_array()) else {
        return output_generic_human(value);
    };
    let candidates = value.get("candidates").and_then(|c| c.as_array());

    for (i, correction) in corrections.iter().enumerate() {
        let original = correction
            .get("original")
            .and_then(|o| o.as_str())
            .unwrap_or_default();
        let corrected = correction
            .get("corrected")
            .and_then(|c| c.as_str())
            .unwrap_or_default();
        let distance = correction
            .get("distance")
            .and_then(|d| d.as_u64())
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{original} -> {corrected} (distance {distance})");

        if let Some(list) = candidates.and_then(|all| all.get(i)).and_then(|l| l.as_array()) {
            for candidate in list {
                if let Some(pair) = candidate.as_array()
                    && pair.len() >= 2
                {
                    let word = pair[0].as_str().unwrap_or_default();
                    let frequency = pair[1].as_u64().unwrap_or(0);
                    println!("  {word} ({frequency})");
                }
            }
        }
    }
    Ok(())
}

/// Output syllables in human format.
fn output_syllables_human(value: &serde_json::Value) -> Result<()> {
    let Some(words) = value.get("words").and_then(|w| w.as_array()) else {
        return output_generic_human(value);
    };

    for word in words {
        let text = word.get("word").and_then(|w| w.as_str()).unwrap_or_default();
        let syllables = word
            .get("syllables")
            .map(format_value)
            .unwrap_or_default();
        match word.get("hyphenated").and_then(|h| h.as_str()) {
            Some(hyphenated) => println!("{text}: {syllables} {hyphenated}"),
            None => println!("{text}: {syllables}"),
        }
    }
    Ok(())
}

/// Output lexicon statistics in human format.
fn output_lexicon_stats_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return output_generic_human(value);
    };

    println!("Lexicon Statistics:");
    println!("═══════════════════");

    if let Some(path) = obj.get("path").and_then(|p| p.as_str()) {
        println!("Path: {path}");
    }
    if let Some(provider) = obj.get("provider").and_then(|p| p.as_str()) {
        println!("Provider: {provider}");
    }
    if let Some(words) = obj.get("words").and_then(|w| w.as_u64()) {
        println!("Words: {words}");
    }
    if let Some(total) = obj.get("total_frequency").and_then(|t| t.as_u64()) {
        println!("Total frequency: {total}");
    }

    if let Some(top) = obj.get("top_words").and_then(|t| t.as_array())
        && !top.is_empty()
    {
        println!();
        println!("Most frequent:");
        println!("──────────────");
        for (rank, entry) in top.iter().enumerate() {
            if let Some(pair) = entry.as_array()
                && pair.len() >= 2
            {
                let word = pair[0].as_str().unwrap_or("unknown");
                let frequency = pair[1].as_u64().unwrap_or(0);
                println!("{:>4}. {word} ({frequency})", rank + 1);
            }
        }
    }
    Ok(())
}

/// Generic human output: one `key: value` line per field.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TrnlpArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
