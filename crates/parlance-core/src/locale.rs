use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParlanceError;

/// A language tag selecting which catalog and which plural rules apply.
///
/// Holds a lowercase primary language subtag and an optional uppercase
/// region subtag; `pt_BR`, `pt-br`, and `pt-BR` all parse to the same value.
/// Subtags beyond the second are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Build a locale from explicit subtags.
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: region.map(|r| r.to_ascii_uppercase()),
        }
    }

    /// The primary language subtag, lowercase (`"pt"`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region subtag, uppercase (`"BR"`), if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// This locale with the region stripped (`pt-BR` -> `pt`).
    pub fn language_only(&self) -> Locale {
        Locale {
            language: self.language.clone(),
            region: None,
        }
    }
}

impl FromStr for Locale {
    type Err = ParlanceError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut parts = tag.split(['-', '_']).filter(|p| !p.is_empty());
        let language = match parts.next() {
            Some(lang) if lang.chars().all(|c| c.is_ascii_alphabetic()) => lang,
            _ => return Err(ParlanceError::Locale(tag.to_string())),
        };
        Ok(Self::new(language, parts.next()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
