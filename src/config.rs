//! Configuration shared by the library entry points and the CLI.
//!
//! Configuration files are JSON. Every field has a default, so a file only
//! needs to mention what it changes:
//!
//! ```json
//! { "detector": { "threshold": 0.7 }, "lexicon_path": "kelimeler.trlx" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detection::DetectorConfig;
use crate::error::Result;
use crate::spelling::CorrectorConfig;

/// Top-level trnlp configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrnlpConfig {
    /// Language detector settings.
    pub detector: DetectorConfig,
    /// Spelling corrector settings.
    pub corrector: CorrectorConfig,
    /// Lexicon file to load when none is given on the command line.
    pub lexicon_path: Option<PathBuf>,
}

impl TrnlpConfig {
    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TrnlpConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    ///
    /// A relative `lexicon_path` is resolved against the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_json(&fs::read_to_string(path)?)?;

        if let Some(lexicon_path) = &config.lexicon_path
            && lexicon_path.is_relative()
            && let Some(parent) = path.parent()
        {
            config.lexicon_path = Some(parent.join(lexicon_path));
        }

        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.detector.validate()?;
        self.corrector.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrnlpError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TrnlpConfig::default();
        assert_eq!(config.detector.threshold, 0.65);
        assert_eq!(config.detector.min_token_len, 2);
        assert_eq!(config.corrector.max_distance, 2);
        assert!(config.lexicon_path.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TrnlpConfig::from_json(r#"{ "detector": { "threshold": 0.8 } }"#).unwrap();
        assert_eq!(config.detector.threshold, 0.8);
        assert_eq!(config.detector.min_token_len, 2);
        assert_eq!(config.corrector, CorrectorConfig::default());

        let config = TrnlpConfig::from_json("{}").unwrap();
        assert_eq!(config, TrnlpConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = TrnlpConfig::from_json(r#"{ "corrector": { "max_distance": 5 } }"#).unwrap_err();
        assert!(matches!(err, TrnlpError::InvalidArgument(_)));

        let err = TrnlpConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TrnlpError::Json(_)));
    }

    #[test]
    fn test_relative_lexicon_path_is_resolved() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{ "lexicon_path": "words.trlx" }}"#).unwrap();
        temp_file.flush().unwrap();

        let config = TrnlpConfig::from_file(temp_file.path()).unwrap();
        let expected = temp_file.path().parent().unwrap().join("words.trlx");
        assert_eq!(config.lexicon_path, Some(expected));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = TrnlpConfig {
            corrector: CorrectorConfig { max_distance: 1 },
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(TrnlpConfig::from_json(&json).unwrap(), config);
    }
}
