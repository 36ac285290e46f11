//! The resolution pipeline: locale, template, plural form, parameters.

use crate::locale::Locale;
use crate::plural;
use crate::template::substitute;
use crate::traits::Catalog;
use std::fmt::Display;
use std::sync::Arc;

/// Resolves translation keys to localized, parameter-substituted strings.
///
/// The key is source-language text and doubles as the fallback template, so
/// resolution never fails: every missing piece (catalog entry, plural rule,
/// parameter) degrades to a literal. Stateless and reentrant — the catalog
/// is read-only shared state and the default locale is fixed at
/// construction, so one `Translator` can serve any number of concurrent
/// callers.
pub struct Translator {
    catalog: Arc<dyn Catalog>,
    default_locale: Locale,
}

impl Translator {
    pub fn new(catalog: Arc<dyn Catalog>, default_locale: Locale) -> Self {
        Self {
            catalog,
            default_locale,
        }
    }

    /// The locale used when neither the caller nor the recipient supplies
    /// one.
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Translate `key` in the default locale.
    pub fn translate(&self, key: &str, params: &[&dyn Display]) -> String {
        self.resolve(None, key, None, params)
    }

    /// Translate `key` in an explicit locale.
    pub fn translate_in(&self, locale: &Locale, key: &str, params: &[&dyn Display]) -> String {
        self.resolve(Some(locale), key, None, params)
    }

    /// Translate a singular/plural pair in the default locale.
    pub fn translate_plural(
        &self,
        singular: &str,
        plural: &str,
        count: i64,
        params: &[&dyn Display],
    ) -> String {
        self.resolve(None, singular, Some((plural, count)), params)
    }

    /// Translate a singular/plural pair in an explicit locale.
    pub fn translate_plural_in(
        &self,
        locale: &Locale,
        singular: &str,
        plural: &str,
        count: i64,
        params: &[&dyn Display],
    ) -> String {
        self.resolve(Some(locale), singular, Some((plural, count)), params)
    }

    /// Full resolution pipeline.
    ///
    /// `key` is both the lookup key and the fallback text. Pluralization is
    /// all-or-nothing: `plural` carries the plural source text together with
    /// the count. When `params` is empty and a count is present, the count
    /// becomes parameter `{0}` — plural messages overwhelmingly display it,
    /// and passing it twice is error-prone.
    pub fn resolve(
        &self,
        locale: Option<&Locale>,
        key: &str,
        plural: Option<(&str, i64)>,
        params: &[&dyn Display],
    ) -> String {
        let locale = locale.unwrap_or(&self.default_locale);

        let (template, count) = match plural {
            None => {
                let template = self
                    .catalog
                    .lookup(locale, key)
                    .unwrap_or_else(|| key.to_string());
                (template, None)
            }
            Some((plural_key, count)) => {
                let category = plural::category_for(locale, count);
                let template = self
                    .catalog
                    .lookup_plural(locale, key, category)
                    .unwrap_or_else(|| {
                        // No catalog entry at all: pick the source text by
                        // plain cardinality. Approximate for languages with
                        // more than two categories; kept deliberately — see
                        // DESIGN.md.
                        if count == 1 {
                            key.to_string()
                        } else {
                            plural_key.to_string()
                        }
                    });
                (template, Some(count))
            }
        };

        let rendered: Vec<String> = if params.is_empty() {
            count.map(|c| vec![c.to_string()]).unwrap_or_default()
        } else {
            params.iter().map(|p| p.to_string()).collect()
        };

        substitute(&template, &rendered)
    }
}
