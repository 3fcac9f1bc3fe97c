use pocket_core::SummaryService;

use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::view::DashboardView;

use super::split_json_flag;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "dashboard",
        "Show balance, this month's totals and recent transactions",
        "dashboard [--json]",
        cmd_dashboard,
    )]
}

fn cmd_dashboard(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (json, rest) = split_json_flag(args);
    if let Some(extra) = rest.first() {
        return Err(CommandError::InvalidArguments(format!(
            "unexpected argument `{extra}`"
        )));
    }
    let summary = SummaryService::dashboard(
        context.book.ledger(),
        context.book.today(),
        context.config.recent_limit,
    );
    let view = DashboardView::from(summary);
    output::block(&context.renderer(json).dashboard(&view));
    Ok(())
}
