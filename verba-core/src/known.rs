//! The locale database: every tag a catalog build will probe for.
//!
//! Neutral tags come first, followed by regional ones. A translation set for a
//! tag that is not listed here is never discovered.

use std::sync::OnceLock;

use crate::locale::LocaleTag;

pub const KNOWN_LOCALES: &[&str] = &[
    // neutral
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en",
    "es", "et", "eu", "fa", "fi", "fil", "fr", "ga", "gl", "gu", "he", "hi", "hr", "hu", "hy",
    "id", "is", "it", "ja", "ka", "kk", "km", "kn", "ko", "ky", "lo", "lt", "lv", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "nb", "ne", "nl", "nn", "pa", "pl", "ps", "pt", "ro", "ru",
    "si", "sk", "sl", "sq", "sr", "sv", "sw", "ta", "te", "th", "tr", "uk", "ur", "uz", "vi",
    "zh", "zh-Hans", "zh-Hant", "zu",
    // regional
    "af-ZA", "am-ET", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO", "ar-KW", "ar-LB",
    "ar-LY", "ar-MA", "ar-OM", "ar-QA", "ar-SA", "ar-SY", "ar-TN", "ar-YE", "az-AZ", "be-BY",
    "bg-BG", "bn-BD", "bn-IN", "bs-BA", "ca-ES", "cs-CZ", "cy-GB", "da-DK", "de-AT", "de-CH",
    "de-DE", "de-LI", "de-LU", "el-CY", "el-GR", "en-AU", "en-BZ", "en-CA", "en-GB", "en-IE",
    "en-IN", "en-JM", "en-MY", "en-NZ", "en-PH", "en-SG", "en-TT", "en-US", "en-ZA", "en-ZW",
    "es-419", "es-AR", "es-BO", "es-CL", "es-CO", "es-CR", "es-DO", "es-EC", "es-ES", "es-GT",
    "es-HN", "es-MX", "es-NI", "es-PA", "es-PE", "es-PR", "es-PY", "es-SV", "es-US", "es-UY",
    "es-VE", "et-EE", "eu-ES", "fa-IR", "fi-FI", "fil-PH", "fr-BE", "fr-CA", "fr-CH", "fr-FR",
    "fr-LU", "fr-MC", "ga-IE", "gl-ES", "gu-IN", "he-IL", "hi-IN", "hr-BA", "hr-HR", "hu-HU",
    "hy-AM", "id-ID", "is-IS", "it-CH", "it-IT", "ja-JP", "ka-GE", "kk-KZ", "km-KH", "kn-IN",
    "ko-KR", "ky-KG", "lo-LA", "lt-LT", "lv-LV", "mk-MK", "ml-IN", "mn-MN", "mr-IN", "ms-BN",
    "ms-MY", "mt-MT", "my-MM", "nb-NO", "ne-NP", "nl-BE", "nl-NL", "nn-NO", "pa-IN", "pl-PL",
    "ps-AF", "pt-AO", "pt-BR", "pt-PT", "ro-MD", "ro-RO", "ru-RU", "ru-UA", "si-LK", "sk-SK",
    "sl-SI", "sq-AL", "sr-Cyrl-RS", "sr-Latn-RS", "sv-FI", "sv-SE", "sw-KE", "ta-IN", "ta-LK",
    "te-IN", "th-TH", "tr-TR", "uk-UA", "ur-PK", "uz-UZ", "vi-VN", "zh-CN", "zh-HK", "zh-MO",
    "zh-SG", "zh-TW", "zh-Hans-CN", "zh-Hant-TW", "zu-ZA",
];

static KNOWN: OnceLock<Vec<LocaleTag>> = OnceLock::new();

/// [`KNOWN_LOCALES`] parsed, in table order.
pub fn known_locales() -> &'static [LocaleTag] {
    KNOWN.get_or_init(|| {
        KNOWN_LOCALES
            .iter()
            .filter_map(|tag| tag.parse().ok())
            .collect()
    })
}
