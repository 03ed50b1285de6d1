//! Core types for request locale negotiation.

pub mod config;
pub mod error;
pub mod known;
pub mod locale;

pub use config::{I18nSettings, ServerSettings, Settings};
pub use error::{ConfigError, LocaleError};
pub use locale::LocaleTag;
