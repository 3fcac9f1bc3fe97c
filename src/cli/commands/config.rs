use pocket_config::Config;

use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const CONFIG_USAGE: &str =
    "config [show|set <locale|currency|recent_limit|color|storage_key|data_dir> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: {CONFIG_USAGE}"
                )));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            context.update_config(&key, value.trim())?;
            let shown = context.config.get(&key)?;
            io::print_success(format!("{key} set to `{shown}`."));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`. usage: {CONFIG_USAGE}"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Configuration");
    let width = Config::KEYS.iter().map(|key| key.len()).max().unwrap_or_default();
    for key in Config::KEYS {
        let value = context
            .config
            .get(key)
            .unwrap_or_else(|err| format!("<{err}>"));
        println!("  {key:<width$} : {value}");
    }
    println!("  {:<width$} : {}", "ledger file", context.data_dir().display());
    println!(
        "  {:<width$} : {}",
        "config file",
        context.config_manager.config_path().display()
    );
}
