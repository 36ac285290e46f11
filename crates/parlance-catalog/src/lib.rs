//! # parlance-catalog
//!
//! TOML-file-backed implementation of the `Catalog` collaborator: a
//! directory of `<locale>.toml` files, one per locale, keyed by
//! source-language text.
//!
//! ```toml
//! [messages]
//! "Hello" = "Bonjour"
//! "See you {0}" = "À bientôt {0}"
//!
//! [plurals."{0} file imported"]
//! one = "{0} fichier importé"
//! other = "{0} fichiers importés"
//! ```

mod file;

pub use file::PluralForms;

use file::CatalogFile;
use parlance_core::error::ParlanceError;
use parlance_core::locale::Locale;
use parlance_core::plural::PluralCategory;
use parlance_core::traits::Catalog;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// In-memory catalog keyed by locale, loadable from a directory of TOML
/// files. Read-only once built; share it as `Arc<dyn Catalog>`.
///
/// Lookups fall back regionally: `pt-BR` entries win over `pt`, and a
/// locale with no file of its own is served by its bare language.
#[derive(Debug, Default)]
pub struct FileCatalog {
    locales: HashMap<Locale, CatalogFile>,
}

impl FileCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.toml` file in `dir`; the file stem is the locale tag.
    ///
    /// Files whose stem is not a locale tag are skipped with a warning. A
    /// file that fails to parse fails the whole load, naming the file.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ParlanceError> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem,
                None => continue,
            };
            let locale: Locale = match stem.parse() {
                Ok(locale) => locale,
                Err(_) => {
                    warn!("skipping {}: file stem is not a locale tag", path.display());
                    continue;
                }
            };

            let content = std::fs::read_to_string(&path)?;
            let file: CatalogFile = toml::from_str(&content).map_err(|e| {
                ParlanceError::Catalog(format!("failed to parse {}: {e}", path.display()))
            })?;
            debug!(
                "loaded {} ({} messages, {} plural entries)",
                path.display(),
                file.messages.len(),
                file.plurals.len()
            );
            catalog.locales.insert(locale, file);
        }

        Ok(catalog)
    }

    /// Insert a simple message.
    pub fn insert_message(&mut self, locale: &Locale, key: &str, template: &str) {
        self.locales
            .entry(locale.clone())
            .or_default()
            .messages
            .insert(key.to_string(), template.to_string());
    }

    /// Insert plural-form templates.
    pub fn insert_plural(&mut self, locale: &Locale, key: &str, forms: PluralForms) {
        self.locales
            .entry(locale.clone())
            .or_default()
            .plurals
            .insert(key.to_string(), forms);
    }

    /// Registered locales, sorted by tag.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.locales.keys().collect();
        locales.sort_by_key(|l| l.to_string());
        locales
    }

    /// Whether no locale has been loaded.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Number of simple messages for the exact locale tag.
    pub fn message_count(&self, locale: &Locale) -> usize {
        self.locales.get(locale).map_or(0, |f| f.messages.len())
    }

    /// Number of plural entries for the exact locale tag.
    pub fn plural_count(&self, locale: &Locale) -> usize {
        self.locales.get(locale).map_or(0, |f| f.plurals.len())
    }

    /// Candidate files for a lookup: exact tag first, then bare language.
    fn candidates<'a>(&'a self, locale: &Locale) -> impl Iterator<Item = &'a CatalogFile> {
        let exact = self.locales.get(locale);
        let bare = match locale.region() {
            Some(_) => self.locales.get(&locale.language_only()),
            None => None,
        };
        exact.into_iter().chain(bare)
    }
}

impl Catalog for FileCatalog {
    fn lookup(&self, locale: &Locale, key: &str) -> Option<String> {
        self.candidates(locale)
            .find_map(|file| file.messages.get(key))
            .cloned()
    }

    fn lookup_plural(
        &self,
        locale: &Locale,
        key: &str,
        category: PluralCategory,
    ) -> Option<String> {
        self.candidates(locale)
            .find_map(|file| file.plurals.get(key).and_then(|forms| forms.select(category)))
            .map(str::to_string)
    }
}
