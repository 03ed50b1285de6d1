use std::sync::Arc;

use verba_core::{I18nSettings, LocaleTag};

use super::catalog::SupportedLocales;

/// The locales a request runs under.
///
/// `content` drives formatting of user-facing content, `ui` picks the
/// translated strings and therefore always has translations (or is the
/// `en-US` fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCulture {
    pub content: LocaleTag,
    pub ui: LocaleTag,
}

impl RequestCulture {
    pub fn uniform(locale: LocaleTag) -> Self {
        Self {
            content: locale.clone(),
            ui: locale,
        }
    }
}

impl Default for RequestCulture {
    fn default() -> Self {
        Self::uniform(LocaleTag::fallback())
    }
}

/// A client preference that resolved against the supported locales.
struct PreferenceMatch {
    exact: LocaleTag,
    closest: LocaleTag,
}

/// Picks the culture of each request from the client's language list.
///
/// Resolution order: the first client preference that resolves, then the
/// configured default locale, then `en-US`.
pub struct LocaleNegotiator {
    locales: Arc<dyn SupportedLocales>,
    settings: I18nSettings,
}

impl LocaleNegotiator {
    pub fn new(locales: Arc<dyn SupportedLocales>, settings: I18nSettings) -> Self {
        Self { locales, settings }
    }

    pub fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// Decides the culture for a request. `None` when internationalization
    /// is disabled.
    ///
    /// `languages` are the client's tokens, most preferred first, e.g.
    /// `["fr-CA", "fr;q=0.8"]`. Quality factors are ignored, only order
    /// matters. Tokens that do not parse are skipped.
    pub fn select_for_request<S: AsRef<str>>(&self, languages: &[S]) -> Option<RequestCulture> {
        if self.settings.disable_intl {
            return None;
        }

        if let Some(found) = self.match_preferences(languages) {
            let content = if self.settings.mixed_mode {
                found.exact
            } else {
                found.closest.clone()
            };
            return Some(RequestCulture {
                content,
                ui: found.closest,
            });
        }

        let locale = self
            .configured_default()
            .unwrap_or_else(LocaleTag::fallback);
        Some(RequestCulture::uniform(locale))
    }

    /// Writes the decision into `culture`; leaves it alone when disabled.
    pub fn apply<S: AsRef<str>>(&self, languages: &[S], culture: &mut RequestCulture) {
        if let Some(selected) = self.select_for_request(languages) {
            *culture = selected;
        }
    }

    /// Best supported locale for `candidate`: same culture, then same
    /// language, then `en-US` for any English variant.
    ///
    /// Ties go to the first supported locale in catalog order.
    pub fn closest_match(&self, candidate: &LocaleTag) -> Option<LocaleTag> {
        if candidate.is_invariant() {
            return None;
        }

        let supported = self.locales.supported_locales();
        let fallback = LocaleTag::fallback();

        supported
            .iter()
            .find(|l| l.is_same_culture_as(candidate))
            .or_else(|| supported.iter().find(|l| l.is_same_language_as(candidate)))
            .cloned()
            .or_else(|| candidate.is_same_language_as(&fallback).then_some(fallback))
    }

    fn match_preferences<S: AsRef<str>>(&self, languages: &[S]) -> Option<PreferenceMatch> {
        languages.iter().find_map(|token| {
            let exact = parse_preference(token.as_ref())?;
            let closest = self.closest_match(&exact)?;
            Some(PreferenceMatch { exact, closest })
        })
    }

    fn configured_default(&self) -> Option<LocaleTag> {
        let tag = self.settings.default_locale.as_deref()?;
        self.closest_match(&tag.parse().ok()?)
    }
}

/// `de-DE;q=0.5` -> `de-DE`
fn parse_preference(token: &str) -> Option<LocaleTag> {
    let tag = token.split(';').next().unwrap_or(token);
    tag.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LocaleTag {
        s.parse().unwrap()
    }

    fn negotiator(supported: &[&str], settings: I18nSettings) -> LocaleNegotiator {
        let locales: Vec<LocaleTag> = supported.iter().map(|s| tag(s)).collect();
        LocaleNegotiator::new(Arc::new(locales), settings)
    }

    fn closest(supported: &[&str], candidate: &str) -> Option<String> {
        negotiator(supported, I18nSettings::default())
            .closest_match(&tag(candidate))
            .map(|l| l.to_string())
    }

    fn mixed() -> I18nSettings {
        I18nSettings {
            mixed_mode: true,
            ..I18nSettings::default()
        }
    }

    fn with_default(locale: &str) -> I18nSettings {
        I18nSettings {
            default_locale: Some(locale.to_string()),
            ..I18nSettings::default()
        }
    }

    fn culture(content: &str, ui: &str) -> RequestCulture {
        RequestCulture {
            content: tag(content),
            ui: tag(ui),
        }
    }

    const NONE: &[&str] = &[];

    #[test]
    fn test_closest_prefers_exact_culture() {
        assert_eq!(closest(&["fr-CA", "fr-FR"], "fr-CA").as_deref(), Some("fr-CA"));
        assert_eq!(closest(&["fr-FR", "fr-CA"], "fr-CA").as_deref(), Some("fr-CA"));
    }

    #[test]
    fn test_closest_falls_back_to_same_language() {
        assert_eq!(closest(&["fr-FR"], "fr-BE").as_deref(), Some("fr-FR"));
        assert_eq!(closest(&["de-DE", "fr"], "fr-BE").as_deref(), Some("fr"));
        // first in catalog order wins
        assert_eq!(closest(&["es-ES", "es-MX"], "es").as_deref(), Some("es-ES"));
    }

    #[test]
    fn test_closest_ultimate_fallback() {
        assert_eq!(closest(&[], "en-AU").as_deref(), Some("en-US"));
        assert_eq!(closest(&["de-DE"], "en").as_deref(), Some("en-US"));
        assert_eq!(closest(&["en-GB"], "en-AU").as_deref(), Some("en-GB"));
        assert_eq!(closest(&[], "de-DE"), None);
    }

    #[test]
    fn test_closest_never_matches_invariant() {
        let n = negotiator(&["en-US"], I18nSettings::default());
        assert_eq!(n.closest_match(&LocaleTag::invariant()), None);
    }

    #[test]
    fn test_skips_malformed_tokens() {
        let n = negotiator(&["de-DE"], I18nSettings::default());
        let selected = n.select_for_request(&["xx-##-invalid", "de-DE;q=0.5"]);
        assert_eq!(selected, Some(culture("de-DE", "de-DE")));

        let selected = n.select_for_request(&["", "*", " de-at ;q=0.9"]);
        assert_eq!(selected, Some(culture("de-DE", "de-DE")));
    }

    #[test]
    fn test_first_resolving_preference_wins() {
        let n = negotiator(&["fr-FR", "it-IT"], I18nSettings::default());
        let selected = n.select_for_request(&["ja-JP", "it;q=0.9", "fr-FR;q=0.8"]);
        assert_eq!(selected, Some(culture("it-IT", "it-IT")));
    }

    #[test]
    fn test_quality_factors_do_not_reorder() {
        let n = negotiator(&["fr-FR", "it-IT"], I18nSettings::default());
        let selected = n.select_for_request(&["it-IT;q=0.1", "fr-FR;q=1.0"]);
        assert_eq!(selected, Some(culture("it-IT", "it-IT")));
    }

    #[test]
    fn test_disabled_leaves_culture_untouched() {
        let settings = I18nSettings {
            disable_intl: true,
            mixed_mode: true,
            default_locale: Some("fr".to_string()),
            ..I18nSettings::default()
        };
        let n = negotiator(&["fr-FR"], settings);
        assert_eq!(n.select_for_request(&["fr-FR"]), None);

        let mut current = culture("ja-JP", "ja-JP");
        n.apply(&["fr-FR"], &mut current);
        assert_eq!(current, culture("ja-JP", "ja-JP"));
    }

    #[test]
    fn test_apply_overwrites_when_enabled() {
        let n = negotiator(&["fr-FR"], I18nSettings::default());
        let mut current = RequestCulture::default();
        n.apply(&["fr-CA"], &mut current);
        assert_eq!(current, culture("fr-FR", "fr-FR"));
    }

    #[test]
    fn test_mixed_mode_keeps_exact_content_locale() {
        let n = negotiator(&["pt-PT"], mixed());
        assert_eq!(n.select_for_request(&["pt-BR"]), Some(culture("pt-BR", "pt-PT")));

        let n = negotiator(&["pt-PT"], I18nSettings::default());
        assert_eq!(n.select_for_request(&["pt-BR"]), Some(culture("pt-PT", "pt-PT")));
    }

    #[test]
    fn test_mixed_mode_with_english_fallback() {
        let n = negotiator(&[], mixed());
        assert_eq!(n.select_for_request(&["en-AU"]), Some(culture("en-AU", "en-US")));
    }

    #[test]
    fn test_configured_default_is_matched() {
        let n = negotiator(&["es-ES", "en-US"], with_default("es"));
        assert_eq!(n.select_for_request(NONE), Some(culture("es-ES", "es-ES")));

        // unsupported client languages also end up on the default
        assert_eq!(n.select_for_request(&["ja-JP", "ko"]), Some(culture("es-ES", "es-ES")));
    }

    #[test]
    fn test_falls_back_to_en_us() {
        let n = negotiator(&[], I18nSettings::default());
        assert_eq!(n.select_for_request(NONE), Some(culture("en-US", "en-US")));

        // malformed default is treated as absent
        let n = negotiator(&["fr-FR"], with_default("not a locale"));
        assert_eq!(n.select_for_request(&["de"]), Some(culture("en-US", "en-US")));

        // default that matches nothing
        let n = negotiator(&["fr-FR"], with_default("ja"));
        assert_eq!(n.select_for_request(NONE), Some(culture("en-US", "en-US")));
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!(parse_preference("de-DE;q=0.5"), Some(tag("de-DE")));
        assert_eq!(parse_preference(" en ; q=1"), Some(tag("en")));
        assert_eq!(parse_preference(";q=0.5"), None);
        assert_eq!(parse_preference("xx-##-invalid"), None);
    }
}
