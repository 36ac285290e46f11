use thiserror::Error;

/// Top-level error type for parlance.
///
/// Note that [`crate::translator::Translator`] never produces one of these:
/// resolution degrades to literals instead of failing. Errors come from the
/// collaborators around it — catalog loading, configuration, delivery.
#[derive(Debug, Error)]
pub enum ParlanceError {
    /// Error loading or parsing a catalog.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Error from a delivery transport.
    #[error("delivery error: {0}")]
    Delivery(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A locale tag that could not be parsed.
    #[error("invalid locale tag: {0}")]
    Locale(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
