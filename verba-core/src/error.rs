use thiserror::Error;

/// A language tag that could not be turned into a [`LocaleTag`](crate::LocaleTag).
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("empty locale tag")]
    Empty,
    #[error("invalid locale tag {tag:?}: {source}")]
    Invalid {
        tag: String,
        #[source]
        source: unic_langid::LanguageIdentifierError,
    },
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}
