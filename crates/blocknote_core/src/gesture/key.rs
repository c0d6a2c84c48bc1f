//! Key-down classification for editor gestures.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Keys the engine reacts to. Everything else stays with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Enter,
    Backspace,
    ArrowUp,
    ArrowDown,
}

impl EditorKey {
    /// Canonical host key name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "Enter",
            Self::Backspace => "Backspace",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
        }
    }
}

/// Classifies a host key name. Returns `None` for keys the engine ignores.
///
/// Matching is case-insensitive and accepts the legacy `Up`/`Down` names.
pub fn parse_editor_key(raw: &str) -> Option<EditorKey> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "enter" | "return" => Some(EditorKey::Enter),
        "backspace" => Some(EditorKey::Backspace),
        "arrowup" | "up" => Some(EditorKey::ArrowUp),
        "arrowdown" | "down" => Some(EditorKey::ArrowDown),
        _ => None,
    }
}

/// Strict key parse for inputs that must name an editor key.
pub fn require_editor_key(raw: &str) -> Result<EditorKey, UnknownKeyError> {
    parse_editor_key(raw).ok_or_else(|| UnknownKeyError(raw.trim().to_string()))
}

/// Key name is not one of the editor keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyError(pub String);

impl Display for UnknownKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported key `{}`; expected Enter|Backspace|ArrowUp|ArrowDown",
            self.0
        )
    }
}

impl Error for UnknownKeyError {}
