//! On-disk catalog schema.

use parlance_core::plural::PluralCategory;
use serde::Deserialize;
use std::collections::HashMap;

/// One `<locale>.toml` catalog file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogFile {
    /// Simple key-to-template entries.
    #[serde(default)]
    pub messages: HashMap<String, String>,
    /// Plural entries keyed by the singular source text.
    #[serde(default)]
    pub plurals: HashMap<String, PluralForms>,
}

/// Templates per plural category. Any category may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluralForms {
    pub zero: Option<String>,
    pub one: Option<String>,
    pub two: Option<String>,
    pub few: Option<String>,
    pub many: Option<String>,
    pub other: Option<String>,
}

impl PluralForms {
    /// Template for `category`, falling back to `other` when the exact
    /// category is missing.
    pub fn select(&self, category: PluralCategory) -> Option<&str> {
        let exact = match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => self.other.as_deref(),
        };
        exact.or(self.other.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_falls_back_to_other() {
        let forms = PluralForms {
            one: Some("1 item".into()),
            other: Some("{0} items".into()),
            ..Default::default()
        };
        assert_eq!(forms.select(PluralCategory::One), Some("1 item"));
        assert_eq!(forms.select(PluralCategory::Few), Some("{0} items"));
        assert_eq!(forms.select(PluralCategory::Other), Some("{0} items"));
    }

    #[test]
    fn test_select_without_other_can_miss() {
        let forms = PluralForms {
            one: Some("1 item".into()),
            ..Default::default()
        };
        assert_eq!(forms.select(PluralCategory::One), Some("1 item"));
        assert_eq!(forms.select(PluralCategory::Many), None);
    }

    #[test]
    fn test_catalog_file_from_toml() {
        let file: CatalogFile = toml::from_str(
            r#"
            [messages]
            "Hello" = "Bonjour"
            "It's {0}" = "C'est {0}"

            [plurals."{0} file imported"]
            one = "{0} fichier importé"
            other = "{0} fichiers importés"
            "#,
        )
        .unwrap();
        assert_eq!(file.messages.len(), 2);
        assert_eq!(file.messages["Hello"], "Bonjour");
        assert_eq!(
            file.plurals["{0} file imported"].select(PluralCategory::One),
            Some("{0} fichier importé")
        );
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let file: CatalogFile = toml::from_str("").unwrap();
        assert!(file.messages.is_empty());
        assert!(file.plurals.is_empty());
    }
}
