//! Plural-rule registry.
//!
//! Maps a locale's language to a pure function from count to plural
//! category. Keeping the rules in a table (rather than branching per
//! language at call sites) means adding a language is one table row.
//!
//! Invariants:
//! 1. Every rule maps any `i64` to exactly one category.
//! 2. Same `(locale, count)` always yields the same category.
//! 3. Negative counts categorize by absolute value.

use crate::locale::Locale;
use std::fmt;

/// Grammatical plural class selecting which template variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Category name as it appears in catalog files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pure function mapping a count to a plural category.
pub type PluralFn = fn(i64) -> PluralCategory;

/// Language families sharing a rule, keyed by primary language subtag.
static RULES: &[(&[&str], PluralFn)] = &[
    (
        &[
            "en", "de", "nl", "sv", "da", "no", "nb", "nn", "it", "es", "pt", "el", "fi", "et",
            "hu", "tr", "he", "bg",
        ],
        one_other,
    ),
    (&["fr", "hi", "bn"], zero_one),
    (&["ru", "uk", "sr", "hr", "bs", "be"], east_slavic),
    (&["pl"], polish),
    (&["cs", "sk"], czech),
    (&["ar"], arabic),
    (&["zh", "ja", "ko", "th", "vi", "id", "ms"], invariant),
];

/// The plural rule for a locale's language, if one is registered.
///
/// Region subtags do not affect pluralization. `None` means no rule table
/// covers that language; callers fall back to plain cardinality.
pub fn rule_for(locale: &Locale) -> Option<PluralFn> {
    RULES
        .iter()
        .find(|(languages, _)| languages.contains(&locale.language()))
        .map(|&(_, rule)| rule)
}

/// Categorize `count` under the locale's plural rules.
///
/// Languages with no registered rule use plain cardinality (1 is `One`,
/// everything else `Other`). This is a known approximation for languages
/// with more than two categories; it is kept as an explicit tier so missing
/// rule coverage degrades the same way a missing catalog entry does.
pub fn category_for(locale: &Locale, count: i64) -> PluralCategory {
    match rule_for(locale) {
        Some(rule) => rule(count),
        None => one_other(count),
    }
}

// ---- Rule implementations ----

fn one_other(count: i64) -> PluralCategory {
    if count.unsigned_abs() == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// French, Hindi, Bengali: 0 and 1 are both singular.
fn zero_one(count: i64) -> PluralCategory {
    if count.unsigned_abs() <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// Russian, Ukrainian, Serbo-Croatian: one/few/many by the last two digits.
fn east_slavic(count: i64) -> PluralCategory {
    let n = count.unsigned_abs();
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Polish: like East Slavic, but 1 alone is singular.
fn polish(count: i64) -> PluralCategory {
    let n = count.unsigned_abs();
    let mod10 = n % 10;
    let mod100 = n % 100;

    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Czech, Slovak: few covers exactly 2 to 4.
fn czech(count: i64) -> PluralCategory {
    let n = count.unsigned_abs();
    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&n) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

/// Arabic: the full six-category scheme.
fn arabic(count: i64) -> PluralCategory {
    let n = count.unsigned_abs();
    let mod100 = n % 100;
    match n {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ if (3..=10).contains(&mod100) => PluralCategory::Few,
        _ if (11..=99).contains(&mod100) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}

/// CJK and friends: no grammatical plural.
fn invariant(_count: i64) -> PluralCategory {
    PluralCategory::Other
}
