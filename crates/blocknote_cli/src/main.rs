//! CLI entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `blocknote_core` linkage.
//! - Replay gesture scripts against a deterministic engine and print the
//!   resulting render state as JSON.
//!
//! # Environment
//! - `BLOCKNOTE_LOG_DIR`: absolute log directory; logging stays off when unset.
//! - `BLOCKNOTE_LOG_LEVEL`: log level, defaults to the build-mode default.
//! - `BLOCKNOTE_CONFIG`: path to an editor config JSON document.

mod script;

use blocknote_core::{
    default_log_level, dispatch_gesture, init_logging, BlockSequenceEngine, ConfigError,
    EditorConfig, EditorSnapshot, SequentialBlockIdGenerator,
};
use clap::{Parser, Subcommand};
use log::info;
use script::{parse_script, ScriptError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "BLOCKNOTE_LOG_DIR";
const LOG_LEVEL_ENV: &str = "BLOCKNOTE_LOG_LEVEL";
const CONFIG_ENV: &str = "BLOCKNOTE_CONFIG";

#[derive(Debug, Parser)]
#[command(
    name = "blocknote_cli",
    version,
    about = "Block editor engine probe and gesture replay"
)]
struct Cli {
    /// Without a subcommand, prints the core ping and version.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a gesture script and print the final render state as JSON
    Replay {
        /// Script file path, or `-` to read from stdin
        source: String,
    },
}

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Logging(String),
    Config(ConfigError),
    Script(ScriptError),
    Render(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Script(err) => write!(f, "script error at {err}"),
            Self::Render(err) => write!(f, "cannot render snapshot: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Logging(_) => None,
            Self::Config(err) => Some(err),
            Self::Script(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ScriptError> for CliError {
    fn from(value: ScriptError) -> Self {
        Self::Script(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        None => {
            println!("blocknote_core ping={}", blocknote_core::ping());
            println!("blocknote_core version={}", blocknote_core::core_version());
            ExitCode::SUCCESS
        }
        Some(Command::Replay { source }) => match run_replay(&source) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("blocknote_cli: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_replay(source: &str) -> Result<String, CliError> {
    init_logging_from_env()?;
    let config = load_config_from_env()?;
    let script = read_source(source)?;
    let snapshot = replay(&script, config)?;
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

fn replay(script: &str, config: EditorConfig) -> Result<EditorSnapshot, CliError> {
    let gestures = parse_script(script)?;
    let mut engine = BlockSequenceEngine::with_config(config, SequentialBlockIdGenerator::new());
    let gesture_count = gestures.len();
    for gesture in gestures {
        dispatch_gesture(&mut engine, gesture);
    }
    info!(
        "event=script_replay module=cli status=ok gestures={} block_count={}",
        gesture_count,
        engine.document().len()
    );
    Ok(engine.snapshot())
}

fn read_source(source: &str) -> Result<String, CliError> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read_to_string(source)?)
}

fn init_logging_from_env() -> Result<(), CliError> {
    let Some(log_dir) = non_blank_env(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = non_blank_env(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &log_dir).map_err(CliError::Logging)
}

fn load_config_from_env() -> Result<EditorConfig, CliError> {
    match non_blank_env(CONFIG_ENV) {
        Some(path) => Ok(EditorConfig::from_json_str(&std::fs::read_to_string(path)?)?),
        None => Ok(EditorConfig::default()),
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{read_source, replay, Cli, CliError, Command};
    use blocknote_core::{EditorConfig, SplitMode};
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn cli_without_subcommand_runs_smoke_probe() {
        let cli = Cli::try_parse_from(["blocknote_cli"]).expect("bare invocation parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_replay_source() {
        let cli = Cli::try_parse_from(["blocknote_cli", "replay", "-"]).expect("replay parses");
        assert!(matches!(
            cli.command,
            Some(Command::Replay { ref source }) if source == "-"
        ));
    }

    #[test]
    fn cli_rejects_replay_without_source_and_unknown_subcommands() {
        assert!(Cli::try_parse_from(["blocknote_cli", "replay"]).is_err());
        assert!(Cli::try_parse_from(["blocknote_cli", "explode"]).is_err());
    }

    #[test]
    fn replay_reorders_blocks_by_drag() {
        let script = "\
key 1 Enter
key 2 Enter
drag-start 3
drag-over 1
drop 1
drag-end
";
        let snapshot = replay(script, EditorConfig::default()).expect("replay should succeed");

        assert_eq!(snapshot.ids(), vec!["3", "1", "2"]);
        assert_eq!(snapshot.focused_block_id.as_str(), "3");
        assert!(snapshot.dragged_block_id.is_none());
    }

    #[test]
    fn replay_deletes_empty_block_and_keeps_text() {
        let script = "\
input 1 x
key 1 Enter
key 2 Enter
input 3 y
key 2 Backspace
";
        let snapshot = replay(script, EditorConfig::default()).expect("replay should succeed");

        assert_eq!(snapshot.ids(), vec!["1", "3"]);
        assert_eq!(snapshot.blocks[0].content, "x");
        assert_eq!(snapshot.blocks[1].content, "y");
        assert_eq!(snapshot.focused_block_id.as_str(), "1");
    }

    #[test]
    fn replay_honors_split_mode() {
        let config = EditorConfig {
            split_mode: SplitMode::AtCaret,
            ..EditorConfig::default()
        };
        let snapshot =
            replay("input 1 hello\nkey 1 Enter 4", config).expect("replay should succeed");

        assert_eq!(snapshot.blocks[0].content, "hell");
        assert_eq!(snapshot.blocks[1].content, "o");
    }

    #[test]
    fn replay_surfaces_script_errors() {
        let err = replay("key 1 Enter\nwiggle", EditorConfig::default())
            .expect_err("unknown command must fail");
        assert!(matches!(err, CliError::Script(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn read_source_loads_script_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "key 1 Enter").expect("write script");
        let path = file.path().to_str().expect("utf-8 temp path");

        let script = read_source(path).expect("script file should load");

        assert_eq!(script.trim(), "key 1 Enter");
    }
}
