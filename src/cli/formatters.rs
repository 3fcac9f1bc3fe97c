use chrono::{Datelike, NaiveDate};
use pocket_config::Config;
use pocket_core::{CurrencyFormatter, DateFormatter};
use pocket_domain::Locale;

const INDONESIAN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Number and date formatting for the session locale.
///
/// Indonesian output follows `id-ID` conventions (`Rp 5.000.000`,
/// `1 Mei 2024`); everything else uses `en-US` (`$5,000,000.00`,
/// `May 1, 2024`).
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    locale: Locale,
    currency: String,
}

impl LocaleFormatter {
    pub fn new(locale: Locale, currency: impl Into<String>) -> Self {
        Self {
            locale,
            currency: currency.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Locale::from_tag(&config.locale), config.currency.clone())
    }

    /// Formats `amount` in the session currency.
    pub fn money(&self, amount: f64) -> String {
        self.format_amount(amount, &self.currency)
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let code = if currency.is_empty() {
            self.currency.as_str()
        } else {
            currency
        };
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let fraction = cents % 100;

        let number = match self.locale {
            Locale::Indonesian => {
                let mut text = group_digits(whole, '.');
                if fraction != 0 {
                    let digits = format!("{fraction:02}");
                    text.push(',');
                    text.push_str(digits.trim_end_matches('0'));
                }
                text
            }
            Locale::English => format!("{}.{fraction:02}", group_digits(whole, ',')),
        };

        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!("{sign}{}{number}", currency_symbol(code))
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::Indonesian => format!(
                "{} {} {}",
                date.day(),
                INDONESIAN_MONTHS[date.month0() as usize],
                date.year()
            ),
            Locale::English => date.format("%b %-d, %Y").to_string(),
        }
    }
}

fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "IDR" => "Rp ".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        other => format!("{other} "),
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn indonesian_rupiah_has_no_fraction_for_whole_amounts() {
        let fmt = LocaleFormatter::new(Locale::Indonesian, "IDR");
        assert_eq!(fmt.money(5_000_000.0), "Rp 5.000.000");
        assert_eq!(fmt.money(-200_000.0), "-Rp 200.000");
        assert_eq!(fmt.money(15_000.5), "Rp 15.000,5");
        assert_eq!(fmt.money(0.0), "Rp 0");
    }

    #[test]
    fn english_uses_two_fraction_digits() {
        let fmt = LocaleFormatter::new(Locale::English, "USD");
        assert_eq!(fmt.money(5_000_000.0), "$5,000,000.00");
        assert_eq!(fmt.money(-12.5), "-$12.50");
        assert_eq!(fmt.money(999.999), "$1,000.00");
        assert_eq!(fmt.format_amount(12.0, "CHF"), "CHF 12.00");
    }

    #[test]
    fn dates_follow_locale() {
        let en = LocaleFormatter::new(Locale::English, "USD");
        let id = LocaleFormatter::new(Locale::Indonesian, "IDR");
        assert_eq!(en.format_date(d(2024, 5, 1)), "May 1, 2024");
        assert_eq!(id.format_date(d(2024, 5, 1)), "1 Mei 2024");
        assert_eq!(id.format_date(d(2024, 8, 17)), "17 Agu 2024");
    }

    #[test]
    fn group_digits_inserts_separators() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1_000, '.'), "1.000");
        assert_eq!(group_digits(12_345_678, ','), "12,345,678");
    }
}
