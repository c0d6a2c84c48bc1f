//! Editor behavior configuration.
//!
//! # Responsibility
//! - Describe host-tunable engine behavior (split mode, placeholder copy).
//! - Parse and validate JSON configuration supplied by hosts.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Placeholders are single-line and non-blank.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder shown when the document is a single empty block.
pub const DEFAULT_EMPTY_DOCUMENT_PLACEHOLDER: &str = "Start Writing From Here....";
/// Placeholder shown on an empty block that holds focus.
pub const DEFAULT_FOCUSED_BLOCK_PLACEHOLDER: &str = "You are here...";

/// What happens to the caret-right content when Enter is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Always insert an empty block after the source block.
    #[default]
    AppendEmpty,
    /// Move content right of the caret into the new block.
    AtCaret,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub split_mode: SplitMode,
    pub empty_document_placeholder: String,
    pub focused_block_placeholder: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            split_mode: SplitMode::default(),
            empty_document_placeholder: DEFAULT_EMPTY_DOCUMENT_PLACEHOLDER.to_string(),
            focused_block_placeholder: DEFAULT_FOCUSED_BLOCK_PLACEHOLDER.to_string(),
        }
    }
}

impl EditorConfig {
    /// Parses a JSON config document and validates it.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown fields.
    /// - `ConfigError::InvalidPlaceholder` for blank or multi-line placeholders.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_placeholder(
            &self.empty_document_placeholder,
            "empty_document_placeholder",
        )?;
        validate_placeholder(&self.focused_block_placeholder, "focused_block_placeholder")
    }
}

/// Errors from config parsing and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not a valid config JSON document.
    Parse(serde_json::Error),
    /// Placeholder is blank or spans multiple lines.
    InvalidPlaceholder { field: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid editor config: {err}"),
            Self::InvalidPlaceholder { field } => {
                write!(f, "`{field}` must be a non-blank single line")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidPlaceholder { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

fn validate_placeholder(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.trim().is_empty() || value.contains(['\n', '\r']) {
        return Err(ConfigError::InvalidPlaceholder { field });
    }
    Ok(())
}
