//! Gesture script parsing.
//!
//! One gesture per line:
//!
//! ```text
//! key <block> <Enter|Backspace|ArrowUp|ArrowDown> [caret]
//! input <block> <text...>
//! focus <block>
//! drag-start <block>
//! drag-over <block>
//! drag-leave
//! drop <block>
//! drag-end
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use blocknote_core::{require_editor_key, BlockId, Gesture, UnknownKeyError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Script parse failure with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub kind: ScriptErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    UnknownKey(UnknownKeyError),
    InvalidCaret(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ScriptErrorKind::UnknownCommand(command) => write!(f, "unknown command `{command}`"),
            ScriptErrorKind::MissingArgument(name) => write!(f, "missing argument <{name}>"),
            ScriptErrorKind::UnexpectedArgument(value) => {
                write!(f, "unexpected argument `{value}`")
            }
            ScriptErrorKind::UnknownKey(err) => write!(f, "{err}"),
            ScriptErrorKind::InvalidCaret(value) => {
                write!(f, "caret must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ScriptErrorKind::UnknownKey(err) => Some(err),
            _ => None,
        }
    }
}

/// Parses a whole script into gestures.
pub fn parse_script(source: &str) -> Result<Vec<Gesture>, ScriptError> {
    let mut gestures = Vec::new();
    for (index, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let gesture = parse_line(line).map_err(|kind| ScriptError {
            line: index + 1,
            kind,
        })?;
        gestures.push(gesture);
    }
    Ok(gestures)
}

fn parse_line(line: &str) -> Result<Gesture, ScriptErrorKind> {
    let (command, rest) = next_word(line);
    match command {
        "key" => {
            let (block, rest) = required_word(rest, "block")?;
            let (key, rest) = required_word(rest, "key")?;
            let key = require_editor_key(key).map_err(ScriptErrorKind::UnknownKey)?;
            let (caret, rest) = next_word(rest);
            let caret_offset = if caret.is_empty() {
                0
            } else {
                caret
                    .parse::<usize>()
                    .map_err(|_| ScriptErrorKind::InvalidCaret(caret.to_string()))?
            };
            no_more(rest)?;
            Ok(Gesture::KeyDown {
                block_id: BlockId::from(block),
                key,
                caret_offset,
            })
        }
        "input" => {
            let (block, rest) = required_word(rest, "block")?;
            let content = rest.strip_prefix(char::is_whitespace).unwrap_or(rest);
            Ok(Gesture::Input {
                block_id: BlockId::from(block),
                content: content.to_string(),
            })
        }
        "focus" => single_block(rest).map(|block_id| Gesture::Focus { block_id }),
        "drag-start" => single_block(rest).map(|block_id| Gesture::DragStart { block_id }),
        "drag-over" => single_block(rest).map(|block_id| Gesture::DragOver { block_id }),
        "drop" => single_block(rest).map(|block_id| Gesture::Drop { block_id }),
        "drag-leave" => no_more(rest).map(|()| Gesture::DragLeave),
        "drag-end" => no_more(rest).map(|()| Gesture::DragEnd),
        other => Err(ScriptErrorKind::UnknownCommand(other.to_string())),
    }
}

fn single_block(rest: &str) -> Result<BlockId, ScriptErrorKind> {
    let (block, rest) = required_word(rest, "block")?;
    no_more(rest)?;
    Ok(BlockId::from(block))
}

fn next_word(input: &str) -> (&str, &str) {
    let trimmed = input.trim_start();
    match trimmed.find(char::is_whitespace) {
        Some(end) => (&trimmed[..end], &trimmed[end..]),
        None => (trimmed, ""),
    }
}

fn required_word<'a>(
    input: &'a str,
    name: &'static str,
) -> Result<(&'a str, &'a str), ScriptErrorKind> {
    match next_word(input) {
        ("", _) => Err(ScriptErrorKind::MissingArgument(name)),
        found => Ok(found),
    }
}

fn no_more(rest: &str) -> Result<(), ScriptErrorKind> {
    let extra = rest.trim();
    if extra.is_empty() {
        Ok(())
    } else {
        Err(ScriptErrorKind::UnexpectedArgument(extra.to_string()))
    }
}
