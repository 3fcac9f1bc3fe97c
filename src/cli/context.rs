//! Shell state and command dispatch.

use std::path::{Path, PathBuf};

use dialoguer::theme::ColorfulTheme;
use pocket_config::{paths, Config, ConfigManager};
use pocket_core::{ledger_warnings, LedgerBook};
use pocket_domain::{Locale, TransactionFilter};
use pocket_storage_json::{FileBackend, JsonLedgerStorage};
use strsim::levenshtein;

use super::commands;
use super::errors::{CliError, CommandError, CommandResult};
use super::formatters::LocaleFormatter;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
use super::shell::parse_command_line;
use super::system_clock::SystemClock;
use crate::view::{JsonRenderer, Renderer, TextRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub app_dir: PathBuf,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub book: LedgerBook,
    /// Criteria applied by `history`, kept for the whole session.
    pub history_filter: TransactionFilter,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_app_dir(mode, &paths::app_data_dir())
    }

    /// Builds a shell whose config and ledger live under `app_dir`.
    pub fn with_app_dir(mode: CliMode, app_dir: &Path) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(app_dir)?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, path = %config_manager.config_path().display(), "config unreadable, using defaults");
                Config::default()
            }
        };
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        let book = open_book(app_dir, &config)?;
        tracing::debug!(
            app_dir = %app_dir.display(),
            transactions = book.ledger().len(),
            "shell context ready"
        );

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            app_dir: app_dir.to_path_buf(),
            config_manager,
            config,
            book,
            history_filter: TransactionFilter::default(),
            last_command: None,
            running: true,
        })
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.config.locale)
    }

    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::from_config(&self.config)
    }

    pub fn renderer(&self, json: bool) -> Box<dyn Renderer> {
        if json {
            Box::new(JsonRenderer)
        } else {
            Box::new(TextRenderer::new(self.formatter()).with_locale(self.locale()))
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.config.resolve_data_dir(&self.app_dir)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn prompt(&self) -> String {
        "pocketbook> ".into()
    }

    pub fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Applies a configuration change, reopening the ledger when its
    /// location moved.
    pub fn update_config(&mut self, key: &str, value: &str) -> CommandResult {
        let mut updated = self.config.clone();
        updated.set(key, value)?;
        let relocated = updated.storage_key != self.config.storage_key
            || updated.data_dir != self.config.data_dir;
        if relocated {
            self.book = open_book(&self.app_dir, &updated).map_err(|err| match err {
                CliError::Core(err) => CommandError::Core(err),
                other => CommandError::Message(other.to_string()),
            })?;
            self.history_filter.clear();
        }
        self.config = updated;
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled,
        });
        self.persist_config()
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let raw = &tokens[0];
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            tracing::debug!(command, args = args.len(), "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_info("Use `help <command>` for usage details.");
            }
            other => {
                tracing::debug!(error = ?other, command = ?self.last_command, "command failed");
                cli_io::print_error(other);
            }
        }
    }
}

fn open_book(app_dir: &Path, config: &Config) -> Result<LedgerBook, CliError> {
    let backend = FileBackend::new(config.resolve_data_dir(app_dir))?;
    let storage = JsonLedgerStorage::with_key(backend, config.storage_key.clone());
    let book = LedgerBook::open(Box::new(storage), Box::new(SystemClock::from_env()));
    if let Some(location) = book.set_aside() {
        cli_io::print_warning(format!(
            "Stored ledger could not be read and was moved to {location}. Starting with an empty ledger."
        ));
    }
    for warning in ledger_warnings(book.ledger()) {
        tracing::warn!("{warning}");
    }
    Ok(book)
}
