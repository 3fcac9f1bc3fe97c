use chrono::NaiveDate;
use pocket_core::{CategoryService, CurrencyFormatter, TransactionDraft};
use pocket_domain::Locale;

use crate::cli::context::{CliMode, ShellContext};
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::forms::{
    parse_amount, parse_date, parse_kind, resolve_account, FormResult, TransactionWizard,
};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::view::Labels;

const ADD_USAGE: &str = concat!(
    "add <income|expense> <amount> <category> <account> [date|today] [description...]\n",
    "                amount uses the locale's separators: 5,000.50 (en-US) or 5.000,50 (id-ID)"
);

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "add",
        "Record an income or expense (prompts for fields when run without arguments)",
        ADD_USAGE,
        cmd_add,
    )]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() {
        if context.mode == CliMode::Script {
            return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
        }
        let wizard = TransactionWizard::new(&context.theme, context.locale(), context.book.today());
        match wizard.run()? {
            FormResult::Completed(draft) => draft,
            FormResult::Cancelled => {
                io::print_info("Transaction cancelled.");
                return Ok(());
            }
        }
    } else {
        draft_from_args(args, context.locale(), context.book.today())?
    };

    record(context, draft)
}

/// Builds a draft from the scripted form of `add`, normalizing category and
/// account labels. Unknown labels are kept and reported.
pub(crate) fn draft_from_args(
    args: &[&str],
    locale: Locale,
    today: NaiveDate,
) -> Result<TransactionDraft, CommandError> {
    let [kind, amount, category, account, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
    };
    let kind = parse_kind(kind)?;
    let amount = parse_amount(amount, locale)?;

    let (date, description) = match rest.split_first() {
        Some((first, tail)) if looks_like_date(first) => (parse_date(first, today)?, tail),
        _ => (today, rest),
    };

    let category = CategoryService::resolve(kind, locale, category);
    if !CategoryService::is_valid(kind, &category) {
        io::print_warning(format!(
            "`{category}` is not a standard {kind} category; it is recorded as typed."
        ));
    }

    let (account, known) = resolve_account(account, locale);
    if known.is_none() {
        io::print_warning(format!(
            "`{account}` is not a known account; it will not count toward account balances."
        ));
    }

    Ok(TransactionDraft {
        kind: Some(kind),
        amount: Some(amount),
        category,
        account,
        description: description.join(" "),
        date: Some(date),
    })
}

/// `today` or anything shaped like `YYYY-MM-DD`, valid or not, so a typo in
/// the date is reported instead of swallowed into the description.
fn looks_like_date(token: &str) -> bool {
    token.eq_ignore_ascii_case("today")
        || (token.len() == 10
            && token
                .chars()
                .enumerate()
                .all(|(idx, c)| if idx == 4 || idx == 7 { c == '-' } else { c.is_ascii_digit() }))
}

fn record(context: &mut ShellContext, draft: TransactionDraft) -> CommandResult {
    let receipt = context.book.record(draft)?;
    let txn = &receipt.transaction;
    let formatter = context.formatter();
    io::print_success(format!(
        "{}: {} {} {} ({})",
        Labels::for_locale(context.locale()).transaction_added,
        txn.kind,
        formatter.format_amount(txn.amount, ""),
        txn.category,
        txn.account
    ));
    if let Some(err) = &receipt.warning {
        io::print_warning(format!(
            "The transaction is kept for this session but could not be saved: {err}"
        ));
    }
    Ok(())
}
