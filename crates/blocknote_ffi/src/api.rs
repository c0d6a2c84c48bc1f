//! FFI use-case API for Flutter-facing editor calls.
//!
//! # Responsibility
//! - Expose editing sessions to the host UI through sync, string-typed calls.
//! - Translate host gesture events into engine gestures and return render
//!   state plus the focus/caret directive in one envelope.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every session owns exactly one engine; sessions never share state.
//! - Failures are reported as `ok=false` envelopes, never as panics.

use blocknote_core::{
    core_version as core_version_inner, dispatch_gesture, init_logging as init_logging_inner,
    parse_editor_key, ping as ping_inner, BlockId, BlockSequenceEngine, EditorConfig,
    EditorSnapshot, FocusDirective, Gesture, GestureOutcome, UuidBlockIdGenerator,
};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use uuid::Uuid;

type Session = BlockSequenceEngine<UuidBlockIdGenerator>;

static SESSIONS: OnceLock<Mutex<HashMap<String, Session>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBlockItem {
    pub block_id: String,
    pub content: String,
    /// Placeholder to display while the block is empty.
    pub placeholder: Option<String>,
    pub is_focused: bool,
    /// Styling hint: block is being dragged.
    pub is_dragged: bool,
    /// Styling hint: block is the hovered drop target.
    pub is_drop_target: bool,
}

/// Focus/caret instruction for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorFocusDirective {
    pub block_id: String,
    /// `start|end|unspecified`.
    pub cursor_hint: String,
}

/// Response envelope shared by all editor calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorStateResponse {
    /// Whether the call reached a live session.
    pub ok: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
    pub session_id: String,
    /// Blocks in document order (empty on failure).
    pub blocks: Vec<EditorBlockItem>,
    pub focused_block_id: Option<String>,
    pub dragged_block_id: Option<String>,
    pub drop_target_block_id: Option<String>,
    /// Present when focus changed during this call.
    pub directive: Option<EditorFocusDirective>,
    /// Host should cancel the native handling of the triggering event.
    pub prevent_default: bool,
}

impl EditorStateResponse {
    fn from_snapshot(
        session_id: &str,
        message: impl Into<String>,
        snapshot: EditorSnapshot,
        outcome: GestureOutcome,
    ) -> Self {
        Self {
            ok: true,
            message: message.into(),
            session_id: session_id.to_string(),
            blocks: snapshot
                .blocks
                .into_iter()
                .map(|block| EditorBlockItem {
                    block_id: block.id.to_string(),
                    content: block.content,
                    placeholder: block.placeholder,
                    is_focused: block.is_focused,
                    is_dragged: block.is_dragged,
                    is_drop_target: block.is_drop_target,
                })
                .collect(),
            focused_block_id: Some(snapshot.focused_block_id.to_string()),
            dragged_block_id: snapshot.dragged_block_id.map(|id| id.to_string()),
            drop_target_block_id: snapshot.drop_target_block_id.map(|id| id.to_string()),
            directive: outcome.directive.map(to_focus_directive),
            prevent_default: outcome.prevent_default,
        }
    }

    fn failure(session_id: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            session_id: session_id.to_string(),
            blocks: Vec::new(),
            focused_block_id: None,
            dragged_block_id: None,
            drop_target_block_id: None,
            directive: None,
            prevent_default: false,
        }
    }
}

/// Opens a new editing session with one empty seed block.
///
/// `config_json` is an optional editor config document; blank means defaults.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Returns `ok=false` with the parse error for an invalid config.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_open_session(config_json: Option<String>) -> EditorStateResponse {
    let config = match config_json.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match EditorConfig::from_json_str(raw) {
            Ok(config) => config,
            Err(err) => {
                return EditorStateResponse::failure("", format!("editor_open_session failed: {err}"))
            }
        },
        _ => EditorConfig::default(),
    };

    let session_id = Uuid::new_v4().to_string();
    let engine = BlockSequenceEngine::with_config(config, UuidBlockIdGenerator);
    let snapshot = engine.snapshot();
    lock_sessions().insert(session_id.clone(), engine);
    info!("event=session_open module=ffi status=ok");

    EditorStateResponse::from_snapshot(
        &session_id,
        "Session opened.",
        snapshot,
        GestureOutcome::default(),
    )
}

/// Closes a session. Returns `false` when the session was unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_close_session(session_id: String) -> bool {
    let closed = lock_sessions().remove(session_id.trim()).is_some();
    if closed {
        info!("event=session_close module=ffi status=ok");
    }
    closed
}

/// Returns current render state without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_snapshot(session_id: String) -> EditorStateResponse {
    match with_session(&session_id, |engine| engine.snapshot()) {
        Ok(snapshot) => EditorStateResponse::from_snapshot(
            &session_id,
            "Snapshot.",
            snapshot,
            GestureOutcome::default(),
        ),
        Err(err) => EditorStateResponse::failure(&session_id, format!("editor_snapshot failed: {err}")),
    }
}

/// Reports a key-down inside one block.
///
/// Keys other than `Enter|Backspace|ArrowUp|ArrowDown` are passed through
/// untouched (`prevent_default=false`). `caret_offset` is in characters.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_key_down(
    session_id: String,
    block_id: String,
    key: String,
    caret_offset: u32,
) -> EditorStateResponse {
    let Some(key) = parse_editor_key(&key) else {
        return match with_session(&session_id, |engine| engine.snapshot()) {
            Ok(snapshot) => EditorStateResponse::from_snapshot(
                &session_id,
                "Key passed through.",
                snapshot,
                GestureOutcome::default(),
            ),
            Err(err) => {
                EditorStateResponse::failure(&session_id, format!("editor_key_down failed: {err}"))
            }
        };
    };
    run_gesture(
        &session_id,
        "editor_key_down",
        Gesture::KeyDown {
            block_id: BlockId::new(block_id),
            key,
            caret_offset: caret_offset as usize,
        },
    )
}

/// Reports new plain-text content for one block.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_input(session_id: String, block_id: String, content: String) -> EditorStateResponse {
    run_gesture(
        &session_id,
        "editor_input",
        Gesture::Input {
            block_id: BlockId::new(block_id),
            content,
        },
    )
}

/// Reports that a block element received input focus.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_focus(session_id: String, block_id: String) -> EditorStateResponse {
    run_gesture(
        &session_id,
        "editor_focus",
        Gesture::Focus {
            block_id: BlockId::new(block_id),
        },
    )
}

/// Drag started on one block.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_drag_start(session_id: String, block_id: String) -> EditorStateResponse {
    run_gesture(
        &session_id,
        "editor_drag_start",
        Gesture::DragStart {
            block_id: BlockId::new(block_id),
        },
    )
}

/// Dragged pointer hovers one block.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_drag_over(session_id: String, block_id: String) -> EditorStateResponse {
    run_gesture(
        &session_id,
        "editor_drag_over",
        Gesture::DragOver {
            block_id: BlockId::new(block_id),
        },
    )
}

/// Dragged pointer left the hovered block.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_drag_leave(session_id: String) -> EditorStateResponse {
    run_gesture(&session_id, "editor_drag_leave", Gesture::DragLeave)
}

/// Dragged block dropped onto one block.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_drop(session_id: String, block_id: String) -> EditorStateResponse {
    run_gesture(
        &session_id,
        "editor_drop",
        Gesture::Drop {
            block_id: BlockId::new(block_id),
        },
    )
}

/// Drag gesture ended or was aborted.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_drag_end(session_id: String) -> EditorStateResponse {
    run_gesture(&session_id, "editor_drag_end", Gesture::DragEnd)
}

fn run_gesture(session_id: &str, operation: &str, gesture: Gesture) -> EditorStateResponse {
    let result = with_session(session_id, |engine| {
        let outcome = dispatch_gesture(engine, gesture);
        (outcome, engine.snapshot())
    });
    match result {
        Ok((outcome, snapshot)) => {
            EditorStateResponse::from_snapshot(session_id, "OK.", snapshot, outcome)
        }
        Err(err) => EditorStateResponse::failure(session_id, format!("{operation} failed: {err}")),
    }
}

fn with_session<T>(session_id: &str, f: impl FnOnce(&mut Session) -> T) -> Result<T, String> {
    let mut sessions = lock_sessions();
    match sessions.get_mut(session_id.trim()) {
        Some(engine) => Ok(f(engine)),
        None => {
            warn!("event=session_lookup module=ffi status=error reason=unknown_session");
            Err(format!("unknown editor session `{}`", session_id.trim()))
        }
    }
}

fn lock_sessions() -> std::sync::MutexGuard<'static, HashMap<String, Session>> {
    // Engine calls never panic, so a poisoned registry still holds valid state.
    SESSIONS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn to_focus_directive(directive: FocusDirective) -> EditorFocusDirective {
    EditorFocusDirective {
        block_id: directive.focus_block_id.to_string(),
        cursor_hint: directive.cursor_hint.as_str().to_string(),
    }
}
