use pocket_core::CategoryService;
use pocket_domain::{Locale, TransactionFilter, TransactionKind};

use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::forms::{parse_date, parse_kind};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::view::HistoryView;

use super::split_json_flag;

const HISTORY_USAGE: &str =
    "history [--type T] [--category C] [--from YYYY-MM-DD] [--to YYYY-MM-DD] [--json] | history clear";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "history",
        "List transactions, narrowing the session filter with flags (`all` resets one)",
        HISTORY_USAGE,
        cmd_history,
    )]
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.first().is_some_and(|arg| arg.eq_ignore_ascii_case("clear")) {
        context.history_filter.clear();
        output::info("History filter cleared.");
    } else {
        let (_, rest) = split_json_flag(args);
        let today = context.book.today();
        context.history_filter = apply_flags(
            context.history_filter.clone(),
            &rest,
            context.locale(),
            today,
        )?;
    }

    let (json, _) = split_json_flag(args);
    let view = HistoryView::build(context.book.ledger(), &context.history_filter);
    output::block(&context.renderer(json).history(&view));
    Ok(())
}

/// Applies `--flag value` pairs on top of `filter`. The values `all`, `none`
/// and the empty string remove a criterion.
pub(crate) fn apply_flags(
    mut filter: TransactionFilter,
    args: &[&str],
    locale: Locale,
    today: chrono::NaiveDate,
) -> Result<TransactionFilter, CommandError> {
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter.next().ok_or_else(|| {
            CommandError::InvalidArguments(format!("`{flag}` needs a value. usage: {HISTORY_USAGE}"))
        })?;
        let reset = is_reset(value);
        match *flag {
            "--type" => {
                filter.kind = if reset { None } else { Some(parse_kind(value)?) };
            }
            "--category" => {
                filter = if reset {
                    filter.category("")
                } else {
                    let label = resolve_filter_category(filter.kind, locale, value);
                    filter.category(label)
                };
            }
            "--from" => {
                filter.date_from = if reset { None } else { Some(parse_date(value, today)?) };
            }
            "--to" => {
                filter.date_to = if reset { None } else { Some(parse_date(value, today)?) };
            }
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `{other}`. usage: {HISTORY_USAGE}"
                )))
            }
        }
    }
    Ok(filter)
}

fn is_reset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all") || value.eq_ignore_ascii_case("none")
}

/// Matches a typed category against the dropdown choices, ignoring case.
fn resolve_filter_category(kind: Option<TransactionKind>, locale: Locale, input: &str) -> String {
    match kind {
        Some(kind) => CategoryService::resolve(kind, locale, input),
        None => CategoryService::filter_choices(locale)
            .into_iter()
            .find(|label| label.eq_ignore_ascii_case(input.trim()))
            .map(str::to_string)
            .unwrap_or_else(|| input.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn flags_set_each_criterion() {
        let filter = apply_flags(
            TransactionFilter::new(),
            &["--type", "expense", "--category", "food", "--from", "2024-05-01", "--to", "today"],
            Locale::English,
            today(),
        )
        .unwrap();
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.category.as_deref(), Some("Food"));
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(filter.date_to, Some(today()));
    }

    #[test]
    fn all_resets_a_single_criterion() {
        let start = TransactionFilter::new()
            .kind(TransactionKind::Income)
            .category("Gift");
        let filter = apply_flags(start, &["--category", "all"], Locale::English, today()).unwrap();
        assert_eq!(filter.kind, Some(TransactionKind::Income));
        assert!(filter.category.is_none());
    }

    #[test]
    fn bad_input_is_reported() {
        let base = TransactionFilter::new;
        assert!(apply_flags(base(), &["--type"], Locale::English, today()).is_err());
        assert!(apply_flags(base(), &["--month", "5"], Locale::English, today()).is_err());
        assert!(apply_flags(base(), &["--from", "May"], Locale::English, today()).is_err());
    }
}
