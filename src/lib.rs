//! Locale dictionaries with fallback translation, and a catalog of locale
//! display metadata.

mod collection;
mod dictionary;
mod error;
mod navigator;
mod resolver;

pub mod catalog;
pub mod config;
pub mod context;

pub use catalog::LocaleCatalogEntry;
pub use collection::LocaleCollection;
pub use config::Config;
pub use dictionary::LocaleDictionary;
pub use error::LocaleError;
pub use navigator::{MemoryNavigator, Navigator, Route};
pub use resolver::{resolve, LocaleResolver};

/// The locale used when a translation is missing in the current locale.
pub static DEFAULT_LOCALE: &str = "en";

/// The token replaced by the value given to a translation.
pub static PLACEHOLDER: &str = "$$$";
