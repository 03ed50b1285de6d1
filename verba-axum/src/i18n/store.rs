use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use verba_core::LocaleTag;

/// Translations of one locale: key to template.
pub type ResourceSet = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where translated resources live.
///
/// Lookups are exact: asking for `fr-CA` never yields the `fr` set.
pub trait ResourceStore: Send + Sync {
    fn resource_set(&self, locale: &LocaleTag) -> Result<Option<ResourceSet>, StoreError>;
}

/// One `<tag>.toml` file per locale, e.g. `locales/pt-BR.toml`.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ResourceStore for DirStore {
    fn resource_set(&self, locale: &LocaleTag) -> Result<Option<ResourceSet>, StoreError> {
        let path = self.dir.join(format!("{locale}.toml"));
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let set = toml::from_str(&content).map_err(|source| StoreError::Parse { path, source })?;
        Ok(Some(set))
    }
}

/// Resource sets held in memory, keyed by canonical tag text.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sets: HashMap<String, ResourceSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the translations for `tag`. Tags that do not parse are ignored.
    pub fn with<I, K, V>(mut self, tag: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if let Ok(locale) = tag.parse::<LocaleTag>() {
            let set = entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect();
            self.sets.insert(locale.to_string(), set);
        }
        self
    }
}

impl ResourceStore for MemoryStore {
    fn resource_set(&self, locale: &LocaleTag) -> Result<Option<ResourceSet>, StoreError> {
        Ok(self.sets.get(&locale.to_string()).cloned())
    }
}
