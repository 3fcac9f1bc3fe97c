use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::forms::parse_kind;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::view::CategoryView;

use super::split_json_flag;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "categories",
        "List categories for a transaction type, or all of them",
        "categories [income|expense] [--json]",
        cmd_categories,
    )]
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (json, rest) = split_json_flag(args);
    let kind = match rest.as_slice() {
        [] => None,
        [kind] => Some(parse_kind(kind)?),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: categories [income|expense]".into(),
            ))
        }
    };
    let view = CategoryView::build(kind, context.locale());
    output::block(&context.renderer(json).categories(&view));
    Ok(())
}
