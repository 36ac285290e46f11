//! # parlance-core
//!
//! Locale resolution, plural rules, template substitution, and the
//! collaborator seams (catalog, locale source, delivery, scheduler) for the
//! parlance translation facility.

pub mod config;
pub mod error;
pub mod locale;
pub mod messenger;
pub mod plural;
pub mod template;
pub mod traits;
pub mod translator;
