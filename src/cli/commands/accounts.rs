use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::view::AccountsView;

use super::split_json_flag;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "accounts",
        "Show per-account balances, liquid assets and net worth",
        "accounts [--json]",
        cmd_accounts,
    )]
}

fn cmd_accounts(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (json, rest) = split_json_flag(args);
    if let Some(extra) = rest.first() {
        return Err(CommandError::InvalidArguments(format!(
            "unexpected argument `{extra}`"
        )));
    }
    let view = AccountsView::build(context.book.ledger(), context.locale());
    output::block(&context.renderer(json).accounts(&view));
    Ok(())
}
