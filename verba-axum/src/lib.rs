pub mod i18n;
pub use i18n::catalog::{LocaleCatalog, SupportedLocales};
pub use i18n::middleware::{CURRENT_CULTURE, current_culture, handle_i18n};
pub use i18n::negotiator::{LocaleNegotiator, RequestCulture};
pub use i18n::store::{DirStore, MemoryStore, ResourceSet, ResourceStore, StoreError};

pub mod server;
pub use server::WebServer;

pub use verba_core::{I18nSettings, LocaleTag, Settings};
