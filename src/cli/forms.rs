//! Input parsing and the interactive wizard behind `add`.
//!
//! The parsers are shared by the scripted form of `add` and the wizard, so a
//! value rejected in one is rejected in the other.

use std::fmt;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use pocket_core::{CategoryService, TransactionDraft};
use pocket_domain::{Account, Locale, TransactionKind};

use crate::cli::errors::CommandError;

/// Outcome of an interactive form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::InvalidArguments(err.message)
    }
}

pub fn parse_kind(input: &str) -> Result<TransactionKind, ValidationError> {
    input
        .parse()
        .map_err(|err: pocket_domain::UnknownKind| ValidationError::new(err.to_string()))
}

/// Accepts a non-negative decimal written with the locale's separators:
/// `5,000.50` in English, `5.000,50` in Indonesian. Grouping is optional but
/// must come in threes, so `5.000` is never read as five in `id-ID`.
pub fn parse_amount(input: &str, locale: Locale) -> Result<f64, ValidationError> {
    let text = input.trim();
    let (group, decimal) = match locale {
        Locale::English => (',', '.'),
        Locale::Indonesian => ('.', ','),
    };
    let not_a_number = || ValidationError::new(format!("`{text}` is not a number"));

    let (whole, fraction) = match text.split_once(decimal) {
        Some((_, fraction)) if fraction.contains(decimal) || fraction.contains(group) => {
            return Err(not_a_number());
        }
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    if whole.contains(group) && !grouped_in_threes(whole.trim_start_matches(['-', '+']), group) {
        return Err(ValidationError::new(format!(
            "`{text}` is ambiguous in {}: group digits in threes (`{}`) and use `{decimal}` for decimals",
            locale.tag(),
            match locale {
                Locale::English => "5,000.50",
                Locale::Indonesian => "5.000,50",
            }
        )));
    }

    let mut normalized: String = whole.chars().filter(|c| *c != group).collect();
    if let Some(fraction) = fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    let amount: f64 = normalized.parse().map_err(|_| not_a_number())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::new(format!(
            "amount must be zero or more, got `{text}`"
        )));
    }
    Ok(amount)
}

fn grouped_in_threes(digits: &str, group: char) -> bool {
    let mut parts = digits.split(group);
    let lead_ok = parts
        .next()
        .is_some_and(|lead| (1..=3).contains(&lead.len()) && lead.chars().all(|c| c.is_ascii_digit()));
    lead_ok && parts.all(|part| part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
}

/// Reads `YYYY-MM-DD`, or `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ValidationError::new(format!("`{input}` is not a date (expected YYYY-MM-DD)")))
}

/// Resolves an account name typed in any locale and any case to the label of
/// the session locale. Unknown names come back unchanged with `None`.
pub fn resolve_account(input: &str, locale: Locale) -> (String, Option<Account>) {
    let input = input.trim();
    let found = Account::ALL.into_iter().find(|account| {
        Locale::ALL
            .into_iter()
            .any(|candidate| account.label(candidate).eq_ignore_ascii_case(input))
    });
    match found {
        Some(account) => (account.label(locale).to_string(), Some(account)),
        None => (input.to_string(), None),
    }
}

/// Step-by-step prompts for a new transaction.
pub struct TransactionWizard<'a> {
    theme: &'a ColorfulTheme,
    locale: Locale,
    today: NaiveDate,
}

impl<'a> TransactionWizard<'a> {
    pub fn new(theme: &'a ColorfulTheme, locale: Locale, today: NaiveDate) -> Self {
        Self {
            theme,
            locale,
            today,
        }
    }

    pub fn run(&self) -> Result<FormResult<TransactionDraft>, CommandError> {
        let kinds = ["Income", "Expense"];
        let Some(kind_idx) = Select::with_theme(self.theme)
            .with_prompt("Type")
            .items(&kinds)
            .default(1)
            .interact_opt()?
        else {
            return Ok(FormResult::Cancelled);
        };
        let kind = TransactionKind::ALL[kind_idx];

        let amount_text: String = Input::with_theme(self.theme)
            .with_prompt("Amount")
            .validate_with(|input: &String| parse_amount(input, self.locale).map(|_| ()))
            .interact_text()?;
        let amount = parse_amount(&amount_text, self.locale)?;

        let categories = CategoryService::choices(kind, self.locale);
        let Some(category_idx) = Select::with_theme(self.theme)
            .with_prompt("Category")
            .items(&categories)
            .default(0)
            .interact_opt()?
        else {
            return Ok(FormResult::Cancelled);
        };

        let accounts: Vec<&str> = Account::ALL
            .into_iter()
            .map(|account| account.label(self.locale))
            .collect();
        let Some(account_idx) = Select::with_theme(self.theme)
            .with_prompt("Account")
            .items(&accounts)
            .default(0)
            .interact_opt()?
        else {
            return Ok(FormResult::Cancelled);
        };

        let today = self.today;
        let date_text: String = Input::with_theme(self.theme)
            .with_prompt("Date (YYYY-MM-DD)")
            .default(today.format("%Y-%m-%d").to_string())
            .validate_with(move |input: &String| parse_date(input, today).map(|_| ()))
            .interact_text()?;
        let date = parse_date(&date_text, today)?;

        let description: String = Input::with_theme(self.theme)
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;

        Ok(FormResult::Completed(TransactionDraft {
            kind: Some(kind),
            amount: Some(amount),
            category: categories[category_idx].to_string(),
            account: accounts[account_idx].to_string(),
            description,
            date: Some(date),
        }))
    }
}
