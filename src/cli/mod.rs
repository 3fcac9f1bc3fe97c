pub mod commands;
pub mod context;
pub mod errors;
pub mod forms;
pub mod formatters;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod system_clock;

pub use context::{CliMode, LoopControl, ShellContext};
pub use errors::{CliError, CommandError};
pub use shell::{run_cli, SCRIPT_ENV};
