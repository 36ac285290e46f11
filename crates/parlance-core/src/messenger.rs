//! Resolution-then-handoff glue: translate for a specific recipient and
//! pass the result to the delivery transport.

use crate::error::ParlanceError;
use crate::traits::{Delivery, Job, LocaleSource, Scheduler};
use crate::translator::Translator;
use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

/// Sends translated messages to recipients.
///
/// Locale fallback order: the recipient's stored preference, then the
/// translator's default. Callers needing an explicit locale go through
/// [`Translator`] directly. Transport and scheduling stay behind their
/// traits — this type only resolves and hands off.
pub struct Messenger {
    translator: Arc<Translator>,
    locales: Arc<dyn LocaleSource>,
    delivery: Arc<dyn Delivery>,
    scheduler: Arc<dyn Scheduler>,
}

impl Messenger {
    pub fn new(
        translator: Arc<Translator>,
        locales: Arc<dyn LocaleSource>,
        delivery: Arc<dyn Delivery>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            translator,
            locales,
            delivery,
            scheduler,
        }
    }

    /// Translate `key` for the recipient and deliver it.
    pub async fn send(
        &self,
        recipient: &str,
        key: &str,
        params: &[&dyn Display],
    ) -> Result<(), ParlanceError> {
        let text = self.resolve_for(recipient, key, None, params);
        self.delivery.deliver(recipient, &text).await
    }

    /// Translate a singular/plural pair for the recipient and deliver it.
    pub async fn send_plural(
        &self,
        recipient: &str,
        singular: &str,
        plural: &str,
        count: i64,
        params: &[&dyn Display],
    ) -> Result<(), ParlanceError> {
        let text = self.resolve_for(recipient, singular, Some((plural, count)), params);
        self.delivery.deliver(recipient, &text).await
    }

    /// Resolve now, deliver on the next scheduler tick.
    ///
    /// The text is fixed at call time; only the transport is deferred.
    /// Deferred delivery failures are logged, never surfaced.
    pub fn send_next_tick(&self, recipient: &str, key: &str, params: &[&dyn Display]) {
        let text = self.resolve_for(recipient, key, None, params);
        self.scheduler.run_next_tick(self.delivery_job(recipient, text));
    }

    /// Resolve now, deliver after `ticks` scheduler ticks.
    pub fn send_later(&self, ticks: u64, recipient: &str, key: &str, params: &[&dyn Display]) {
        let text = self.resolve_for(recipient, key, None, params);
        self.scheduler.run_later(ticks, self.delivery_job(recipient, text));
    }

    fn resolve_for(
        &self,
        recipient: &str,
        key: &str,
        plural: Option<(&str, i64)>,
        params: &[&dyn Display],
    ) -> String {
        let locale = self.locales.locale_for(recipient);
        self.translator.resolve(locale.as_ref(), key, plural, params)
    }

    fn delivery_job(&self, recipient: &str, text: String) -> Job {
        let delivery = Arc::clone(&self.delivery);
        let recipient = recipient.to_string();
        Box::pin(async move {
            if let Err(e) = delivery.deliver(&recipient, &text).await {
                warn!(
                    "deferred delivery to {recipient} via {} failed: {e}",
                    delivery.name()
                );
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::plural::PluralCategory;
    use crate::traits::Catalog;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapCatalog(HashMap<(String, String), String>);

    impl Catalog for MapCatalog {
        fn lookup(&self, locale: &Locale, key: &str) -> Option<String> {
            self.0.get(&(locale.to_string(), key.to_string())).cloned()
        }

        fn lookup_plural(
            &self,
            _locale: &Locale,
            _key: &str,
            _category: PluralCategory,
        ) -> Option<String> {
            None
        }
    }

    struct MapLocales(HashMap<String, Locale>);

    impl LocaleSource for MapLocales {
        fn locale_for(&self, recipient: &str) -> Option<Locale> {
            self.0.get(recipient).cloned()
        }
    }

    #[derive(Default)]
    struct RecordingDelivery {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Delivery for RecordingDelivery {
        fn name(&self) -> &str {
            "recording"
        }

        async fn deliver(&self, recipient: &str, text: &str) -> Result<(), ParlanceError> {
            self.sent
                .lock()
                .unwrap()
                .push((recipient.to_string(), text.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingScheduler {
        jobs: Mutex<Vec<(Option<u64>, Job)>>,
    }

    impl Scheduler for RecordingScheduler {
        fn run_next_tick(&self, job: Job) {
            self.jobs.lock().unwrap().push((None, job));
        }

        fn run_later(&self, ticks: u64, job: Job) {
            self.jobs.lock().unwrap().push((Some(ticks), job));
        }
    }

    fn fixture() -> (Arc<RecordingDelivery>, Arc<RecordingScheduler>, Messenger) {
        let mut messages = HashMap::new();
        messages.insert(("en".to_string(), "Hello".to_string()), "Hello there".to_string());
        messages.insert(("fr".to_string(), "Hello".to_string()), "Bonjour".to_string());
        messages.insert(("es".to_string(), "Hello".to_string()), "Hola".to_string());

        let translator = Arc::new(Translator::new(
            Arc::new(MapCatalog(messages)),
            "en".parse().unwrap(),
        ));

        let mut prefs = HashMap::new();
        prefs.insert("carlos".to_string(), "es".parse().unwrap());

        let delivery = Arc::new(RecordingDelivery::default());
        let scheduler = Arc::new(RecordingScheduler::default());
        let messenger = Messenger::new(
            Arc::clone(&translator),
            Arc::new(MapLocales(prefs)),
            Arc::clone(&delivery) as Arc<dyn Delivery>,
            Arc::clone(&scheduler) as Arc<dyn Scheduler>,
        );
        (delivery, scheduler, messenger)
    }

    #[tokio::test]
    async fn test_send_uses_recipient_locale() {
        let (delivery, _scheduler, messenger) = fixture();
        messenger.send("carlos", "Hello", &[]).await.unwrap();
        let sent = delivery.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), &[("carlos".to_string(), "Hola".to_string())]);
    }

    #[tokio::test]
    async fn test_send_falls_back_to_default_locale() {
        let (delivery, _scheduler, messenger) = fixture();
        messenger.send("stranger", "Hello", &[]).await.unwrap();
        let sent = delivery.sent.lock().unwrap();
        assert_eq!(sent[0].1, "Hello there");
    }

    #[tokio::test]
    async fn test_locale_fallback_order() {
        // Explicit beats context beats default, each returning a
        // distinguishable string from its own catalog entry.
        let (delivery, _scheduler, messenger) = fixture();

        let fr: Locale = "fr".parse().unwrap();
        assert_eq!(messenger.translator.translate_in(&fr, "Hello", &[]), "Bonjour");

        messenger.send("carlos", "Hello", &[]).await.unwrap();
        messenger.send("stranger", "Hello", &[]).await.unwrap();
        let sent = delivery.sent.lock().unwrap();
        assert_eq!(sent[0].1, "Hola");
        assert_eq!(sent[1].1, "Hello there");
    }

    #[tokio::test]
    async fn test_send_plural_without_catalog_entry() {
        let (delivery, _scheduler, messenger) = fixture();
        messenger
            .send_plural("stranger", "{0} task due", "{0} tasks due", 3, &[])
            .await
            .unwrap();
        let sent = delivery.sent.lock().unwrap();
        assert_eq!(sent[0].1, "3 tasks due");
    }

    #[tokio::test]
    async fn test_send_later_defers_transport_not_resolution() {
        let (delivery, scheduler, messenger) = fixture();
        messenger.send_later(5, "carlos", "Hello", &[]);

        // Nothing delivered until the host fires the job.
        assert!(delivery.sent.lock().unwrap().is_empty());

        let (ticks, job) = scheduler.jobs.lock().unwrap().pop().unwrap();
        assert_eq!(ticks, Some(5));
        job.await;

        let sent = delivery.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), &[("carlos".to_string(), "Hola".to_string())]);
    }

    #[tokio::test]
    async fn test_send_next_tick_enqueues_one_job() {
        let (delivery, scheduler, messenger) = fixture();
        messenger.send_next_tick("stranger", "Hello", &[]);

        let (ticks, job) = scheduler.jobs.lock().unwrap().pop().unwrap();
        assert_eq!(ticks, None);
        job.await;
        assert_eq!(delivery.sent.lock().unwrap()[0].1, "Hello there");
    }
}
