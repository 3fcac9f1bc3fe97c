use pocket_domain::{all_categories, categories_for, is_known_category, Locale, TransactionKind};

/// Choice lists derived from the fixed category taxonomy.
pub struct CategoryService;

impl CategoryService {
    /// Categories offered when entering a transaction of `kind`.
    pub fn choices(kind: TransactionKind, locale: Locale) -> Vec<&'static str> {
        categories_for(kind, locale)
    }

    /// Every category, sorted, for history filtering.
    pub fn filter_choices(locale: Locale) -> Vec<&'static str> {
        all_categories(locale)
    }

    pub fn is_valid(kind: TransactionKind, label: &str) -> bool {
        is_known_category(kind, label)
    }

    /// Resolves user input to a category label of `kind`, ignoring ASCII case.
    /// Falls back to the trimmed input when nothing matches.
    pub fn resolve(kind: TransactionKind, locale: Locale, input: &str) -> String {
        let input = input.trim();
        Self::choices(kind, locale)
            .into_iter()
            .find(|label| label.eq_ignore_ascii_case(input))
            .map(str::to_string)
            .unwrap_or_else(|| input.to_string())
    }
}
