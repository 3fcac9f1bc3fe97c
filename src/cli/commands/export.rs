use std::path::PathBuf;

use pocket_storage_json::save_ledger_to_path;

use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "export",
        "Write a pretty-printed copy of the ledger to a JSON file",
        "export <path>",
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(CommandError::InvalidArguments("usage: export <path>".into()));
    };
    let path = PathBuf::from(*path);
    save_ledger_to_path(context.book.ledger(), &path)?;
    tracing::info!(path = %path.display(), transactions = context.book.ledger().len(), "ledger exported");
    io::print_success(format!(
        "Exported {} transactions to {}.",
        context.book.ledger().len(),
        path.display()
    ));
    Ok(())
}
