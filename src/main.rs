use clap::{Parser, Subcommand};
use parlance_catalog::FileCatalog;
use parlance_core::{config, locale::Locale, translator::Translator};
use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "parlance",
    version,
    about = "Locale-aware message translation for chat agents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a translation key to its localized string.
    Resolve {
        /// The translation key (source-language text, also the fallback).
        key: String,
        /// Positional parameters substituted into {0}, {1}, ...
        params: Vec<String>,
        /// Explicit locale; defaults to the configured default locale.
        #[arg(short, long)]
        locale: Option<Locale>,
        /// Plural source text; pluralization needs --count too.
        #[arg(long, requires = "count")]
        plural: Option<String>,
        /// Item count driving plural-form selection.
        #[arg(long, requires = "plural")]
        count: Option<i64>,
    },
    /// List loaded catalog locales.
    Locales,
    /// Validate that every catalog file parses.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.parlance.log_level)),
        )
        .init();

    match cli.command {
        Commands::Resolve {
            key,
            params,
            locale,
            plural,
            count,
        } => {
            // Resolution must not fail on a missing catalog; fall back to
            // an empty one and let the key text carry the message.
            let catalog = FileCatalog::load_dir(&cfg.i18n.catalog_dir).unwrap_or_else(|e| {
                warn!("no catalogs loaded from {}: {e}", cfg.i18n.catalog_dir);
                FileCatalog::new()
            });
            let translator = Translator::new(Arc::new(catalog), cfg.i18n.default_locale.clone());

            let param_refs: Vec<&dyn Display> =
                params.iter().map(|p| p as &dyn Display).collect();
            let plural_pair = plural.as_deref().zip(count);

            println!(
                "{}",
                translator.resolve(locale.as_ref(), &key, plural_pair, &param_refs)
            );
        }
        Commands::Locales => {
            let catalog = FileCatalog::load_dir(&cfg.i18n.catalog_dir)?;
            if catalog.is_empty() {
                println!("no catalogs loaded from {}", cfg.i18n.catalog_dir);
            } else {
                for locale in catalog.locales() {
                    println!(
                        "  {locale}: {} messages, {} plural entries",
                        catalog.message_count(locale),
                        catalog.plural_count(locale)
                    );
                }
            }
        }
        Commands::Check => match FileCatalog::load_dir(&cfg.i18n.catalog_dir) {
            Ok(catalog) => {
                println!(
                    "ok: {} locales in {}",
                    catalog.locales().len(),
                    cfg.i18n.catalog_dir
                );
            }
            Err(e) => anyhow::bail!("catalog check failed: {e}"),
        },
    }

    Ok(())
}
