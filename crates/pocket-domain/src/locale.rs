use std::fmt;

use serde::{Deserialize, Serialize};

/// Label language for accounts, categories and formatted output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Indonesian,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Indonesian];

    /// Resolves a BCP 47 style tag (`en-US`, `id-ID`, `id`) to a supported locale.
    /// Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "id" | "in" => Locale::Indonesian,
            _ => Locale::English,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en-US",
            Locale::Indonesian => "id-ID",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_reads_primary_subtag() {
        assert_eq!(Locale::from_tag("id-ID"), Locale::Indonesian);
        assert_eq!(Locale::from_tag("id_ID"), Locale::Indonesian);
        assert_eq!(Locale::from_tag("ID"), Locale::Indonesian);
        assert_eq!(Locale::from_tag("en-GB"), Locale::English);
        assert_eq!(Locale::from_tag(""), Locale::English);
        assert_eq!(Locale::from_tag("fr-FR"), Locale::English);
    }
}
