use crate::error::ParlanceError;
use crate::locale::Locale;
use crate::plural::PluralCategory;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;

/// Translation store — the lookup half of the resolution pipeline.
///
/// Implementations own file parsing, storage format, and reloads. Lookups
/// must be pure and non-blocking: [`crate::translator::Translator::resolve`]
/// calls them on the caller's thread with no await point.
pub trait Catalog: Send + Sync {
    /// Template for `key` in `locale`, if the catalog has one.
    fn lookup(&self, locale: &Locale, key: &str) -> Option<String>;

    /// Plural-form template for `key` in `locale` under `category`.
    fn lookup_plural(
        &self,
        locale: &Locale,
        key: &str,
        category: PluralCategory,
    ) -> Option<String>;
}

/// Per-recipient locale preferences.
pub trait LocaleSource: Send + Sync {
    /// The recipient's preferred locale, or `None` when no preference is
    /// stored and the process default applies.
    fn locale_for(&self, recipient: &str) -> Option<Locale>;
}

/// Message transport — delivers resolved text to a recipient.
#[async_trait]
pub trait Delivery: Send + Sync {
    /// Human-readable transport name.
    fn name(&self) -> &str;

    /// Deliver final text to the recipient.
    async fn deliver(&self, recipient: &str, text: &str) -> Result<(), ParlanceError>;
}

/// A deferred unit of work handed to the host scheduler.
pub type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Host-provided deferred execution.
///
/// The messenger only delegates to it; tick length and execution order are
/// the host's concern.
pub trait Scheduler: Send + Sync {
    /// Run `job` on the next scheduling tick.
    fn run_next_tick(&self, job: Job);

    /// Run `job` after `ticks` scheduling ticks.
    fn run_later(&self, ticks: u64, job: Job);
}
