//! BCP 47 locale tags and the comparisons used when matching them.

use std::fmt;
use std::str::FromStr;

use unic_langid::{LanguageIdentifier, langid, subtags};

use crate::error::LocaleError;

/// Tag of the locale used when nothing else resolves.
pub const FALLBACK_TAG: &str = "en-US";

/// A language identifier such as `en`, `fr-CA` or `zh-Hant-TW`.
///
/// Parsing canonicalizes casing, so `EN-us` and `en-US` are the same tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag(LanguageIdentifier);

impl LocaleTag {
    /// The invariant locale (`und`). Never a valid match target.
    pub fn invariant() -> Self {
        Self(LanguageIdentifier::default())
    }

    /// The hardcoded `en-US` fallback.
    pub fn fallback() -> Self {
        Self(langid!("en-US"))
    }

    pub fn is_invariant(&self) -> bool {
        self.0.language == subtags::Language::default()
    }

    /// Primary language subtag, e.g. `fr` for `fr-CA`.
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|r| r.as_str())
    }

    /// Same language, script and region.
    pub fn is_same_culture_as(&self, other: &LocaleTag) -> bool {
        self.0.language == other.0.language
            && self.0.script == other.0.script
            && self.0.region == other.0.region
    }

    /// Same primary language, whatever the region.
    pub fn is_same_language_as(&self, other: &LocaleTag) -> bool {
        self.0.language == other.0.language
    }

    pub fn as_langid(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        tag.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|source| LocaleError::Invalid {
                tag: tag.to_string(),
                source,
            })
    }
}

impl From<LanguageIdentifier> for LocaleTag {
    fn from(id: LanguageIdentifier) -> Self {
        Self(id)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
