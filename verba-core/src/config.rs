//! Service settings, loaded from YAML with `${VAR:default}` substitution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use dotenvy::dotenv;
use regex::Regex;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub i18n: I18nSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Switches read by the locale negotiator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Leave the request culture untouched.
    pub disable_intl: bool,
    /// Use the client's exact tag for content even when only a
    /// neighbouring locale has translations.
    pub mixed_mode: bool,
    /// Used when the client sends nothing usable.
    pub default_locale: Option<String>,
    /// Directory holding one `<tag>.toml` translation file per locale.
    pub resources_dir: PathBuf,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            disable_intl: false,
            mixed_mode: false,
            default_locale: None,
            resources_dir: PathBuf::from("./locales"),
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_from_file(path)
    }
}

/// Replaces `${VAR}` and `${VAR:default}` with environment values.
fn replace_vars(content: &str) -> String {
    // a missing .env is normal outside development
    let _ = dotenv();

    static VAR_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = VAR_REGEX.get_or_init(|| {
        Regex::new(r"\$\{([A-Z0-9_]+)(?::([^\}]*))?\}").expect("Invalid regex pattern")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        env::var(&caps[1])
            .unwrap_or_else(|_| caps.get(2).map_or("", |m| m.as_str()).to_string())
    })
    .into_owned()
}

pub fn load_from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_str(&replace_vars(content))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_vars() {
        unsafe {
            env::set_var("VERBA_TEST_LOCALE", "fr-CA");
        }
        assert_eq!(replace_vars("x: ${VERBA_TEST_LOCALE}"), "x: fr-CA");
        assert_eq!(replace_vars("x: ${VERBA_TEST_UNSET:es}"), "x: es");
        assert_eq!(replace_vars("x: ${VERBA_TEST_UNSET_NO_DEFAULT}"), "x: ");
    }

    #[test]
    fn test_load_settings() {
        let yaml = r#"
        server:
          addr: ${VERBA_TEST_ADDR:127.0.0.1:3000}
        i18n:
          mixed_mode: true
          default_locale: es
          resources_dir: /srv/locales
        logger:
          level: DEBUG
        "#;

        let settings: Settings = load_from_str(yaml).unwrap();
        assert_eq!(settings.server.addr, "127.0.0.1:3000");
        assert!(settings.i18n.mixed_mode);
        assert!(!settings.i18n.disable_intl);
        assert_eq!(settings.i18n.default_locale.as_deref(), Some("es"));
        assert_eq!(settings.i18n.resources_dir, PathBuf::from("/srv/locales"));
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let settings: Settings = load_from_str("{}").unwrap();
        assert_eq!(settings.server.addr, "0.0.0.0:8080");
        assert!(!settings.i18n.disable_intl);
        assert!(settings.i18n.default_locale.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/this/path/should/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
