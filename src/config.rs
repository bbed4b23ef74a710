// File: src/config.rs
use crate::core::types::DEFAULT_DICTIONARY;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_SHIFT: i64 = 5;

/// Settings for the command-line front end.
///
/// Loaded from a JSON file; any field left out takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordplayConfig {
    /// Words the counter looks for. Expected to be lowercase.
    pub dictionary: Vec<String>,
    /// Shift used when none is given on the command line.
    pub default_shift: i64,
}

impl Default for WordplayConfig {
    fn default() -> Self {
        Self {
            dictionary: DEFAULT_DICTIONARY.iter().map(|w| w.to_string()).collect(),
            default_shift: DEFAULT_SHIFT,
        }
    }
}

impl WordplayConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), words = config.dictionary.len(), "loaded config");
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Rejects empty dictionary entries, which would match every token.
    /// Entries with uppercase letters are kept but can never match, so
    /// they are only warned about.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dictionary(&self.dictionary)
    }
}

/// Checks a dictionary supplied from outside the crate: empty entries are
/// rejected, entries with uppercase letters only warned about.
pub fn validate_dictionary(dictionary: &[String]) -> Result<(), ConfigError> {
    if let Some(pos) = dictionary.iter().position(|w| w.is_empty()) {
        return Err(ConfigError::Validation(format!(
            "dictionary entry {} is empty",
            pos
        )));
    }
    for word in dictionary {
        if word.chars().any(char::is_uppercase) {
            warn!(word = %word, "dictionary entry is not lowercase and will never match");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_has_fourteen_words() {
        let config = WordplayConfig::default();
        assert_eq!(config.dictionary.len(), 14);
        assert_eq!(config.default_shift, 5);
    }

    #[test]
    fn missing_path_gives_default() {
        assert_eq!(WordplayConfig::load_or_default(None).unwrap(), WordplayConfig::default());
    }

    #[test]
    fn loads_full_file() {
        let file = write_config(r#"{ "dictionary": ["cat", "at"], "default_shift": -3 }"#);
        let config = WordplayConfig::load(file.path()).unwrap();
        assert_eq!(config.dictionary, vec!["cat", "at"]);
        assert_eq!(config.default_shift, -3);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(r#"{ "default_shift": 13 }"#);
        let config = WordplayConfig::load(file.path()).unwrap();
        assert_eq!(config.default_shift, 13);
        assert_eq!(config.dictionary.len(), 14);
    }

    #[test]
    fn unreadable_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordplayConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_config("{ dictionary: ");
        let result = WordplayConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn empty_entry_is_rejected() {
        let file = write_config(r#"{ "dictionary": ["ok", ""] }"#);
        match WordplayConfig::load(file.path()) {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("entry 1")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn uppercase_entry_is_allowed() {
        let config = WordplayConfig {
            dictionary: vec!["Below".into()],
            default_shift: 0,
        };
        assert!(config.validate().is_ok());
    }
}
