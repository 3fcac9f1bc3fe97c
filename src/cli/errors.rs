use std::io;

use pocket_config::ConfigError;
use pocket_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failure of a single shell command. Reported, never fatal.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Errors that stop the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("readline failure: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("storage error: {0}")]
    Core(#[from] CoreError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

pub type CommandResult = Result<(), CommandError>;
