use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use tracing::{info, warn};
use verba_core::LocaleTag;
use verba_core::known::known_locales;

use super::store::{ResourceSet, ResourceStore};

/// Anything that can list the locales translations exist for.
pub trait SupportedLocales: Send + Sync {
    fn supported_locales(&self) -> &[LocaleTag];
}

impl SupportedLocales for Vec<LocaleTag> {
    fn supported_locales(&self) -> &[LocaleTag] {
        self
    }
}

struct Discovered {
    locales: Vec<LocaleTag>,
    sets: HashMap<String, ResourceSet>,
}

/// The locales that have translated resources.
///
/// Discovery probes the store once per candidate locale, which is slow, so it
/// runs lazily on first access and the result is kept for the lifetime of the
/// catalog. Build one per process and share it behind an `Arc`.
pub struct LocaleCatalog {
    store: Arc<dyn ResourceStore>,
    candidates: Vec<LocaleTag>,
    discovered: OnceLock<Discovered>,
}

impl LocaleCatalog {
    /// Probes every tag of the known-locale table.
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self::with_candidates(store, known_locales().iter().cloned())
    }

    pub fn with_candidates(
        store: Arc<dyn ResourceStore>,
        candidates: impl IntoIterator<Item = LocaleTag>,
    ) -> Self {
        Self {
            store,
            candidates: candidates.into_iter().collect(),
            discovered: OnceLock::new(),
        }
    }

    /// Supported locales, sorted by tag text.
    pub fn locales(&self) -> &[LocaleTag] {
        &self.discovered().locales
    }

    /// Looks up `key` in the translations of `locale`, filling `{name}`
    /// placeholders from `args`.
    pub fn translate(&self, locale: &LocaleTag, key: &str, args: &[(&str, &str)]) -> String {
        let Some(set) = self.discovered().sets.get(&locale.to_string()) else {
            return format!("[Missing Lang: {}]", locale);
        };

        let Some(template) = set.get(key) else {
            return format!("[Missing Key: {}]", key);
        };

        args.iter().fold(template.clone(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
    }

    fn discovered(&self) -> &Discovered {
        self.discovered.get_or_init(|| self.discover())
    }

    fn discover(&self) -> Discovered {
        let started = Instant::now();
        let mut sets = HashMap::new();

        for locale in self.candidates.iter().filter(|l| !l.is_invariant()) {
            let key = locale.to_string();
            if sets.contains_key(&key) {
                continue;
            }
            match self.store.resource_set(locale) {
                Ok(Some(set)) => {
                    sets.insert(key, set);
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping locale {}: {}", locale, e),
            }
        }

        let mut locales: Vec<LocaleTag> = sets
            .keys()
            .filter_map(|tag| tag.parse().ok())
            .collect();
        locales.sort_by_cached_key(|l| l.to_string());

        info!(
            "Discovered {} supported locales in {:?}",
            locales.len(),
            started.elapsed()
        );
        Discovered { locales, sets }
    }
}

impl SupportedLocales for LocaleCatalog {
    fn supported_locales(&self) -> &[LocaleTag] {
        self.locales()
    }
}
