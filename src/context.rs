//! The process-wide locale context.
//!
//! [`provide`] installs a [`LocaleResolver`] for the whole application,
//! [`use_locale`] hands it out to the code that renders text. Using the
//! context before anything is provided is a setup mistake and fails with
//! [`LocaleError::NotInitialized`].

use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{error::LocaleError, LocaleResolver};

static LOCALE_CONTEXT: Lazy<RwLock<Option<Arc<LocaleResolver>>>> = Lazy::new(|| RwLock::new(None));

/// Install `resolver` as the current context, replacing any previous one.
pub fn provide(resolver: LocaleResolver) -> Arc<LocaleResolver> {
    let resolver = Arc::new(resolver);
    *LOCALE_CONTEXT.write() = Some(Arc::clone(&resolver));
    resolver
}

/// Get the provided resolver.
pub fn use_locale() -> Result<Arc<LocaleResolver>, LocaleError> {
    LOCALE_CONTEXT
        .read()
        .as_ref()
        .cloned()
        .ok_or(LocaleError::NotInitialized)
}

/// Remove the provided resolver, returning it.
pub fn reset() -> Option<Arc<LocaleResolver>> {
    LOCALE_CONTEXT.write().take()
}

/// Translate `key` with the provided resolver.
pub fn t(key: &str, value: Option<&str>) -> Result<String, LocaleError> {
    Ok(use_locale()?.resolve(key, value))
}

/// Switch the locale of the provided resolver.
pub fn change_locale(locale: &str) -> Result<()> {
    use_locale()?.change_locale(locale)
}
