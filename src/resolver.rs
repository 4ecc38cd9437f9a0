//! Translation lookup with locale fallback.
//!
//! A key is looked up in the current locale, then in the fallback locale,
//! and finally resolves to the key itself, so a missing translation never
//! breaks the rendered text.

use std::{collections::HashMap, sync::Arc};

use anyhow::Result;

use crate::{navigator::Navigator, LocaleCollection, LocaleDictionary, DEFAULT_LOCALE, PLACEHOLDER};

/// Resolve `key` against `dictionaries`.
///
/// `current_locale` falls back to `fallback_locale` when it's `None` or empty.
/// A non-empty `value` replaces every [`PLACEHOLDER`] of the translated text,
/// a key without translation is returned unchanged.
///
/// ```
/// use locale_kit::{resolve, LocaleCollection, LocaleDictionary};
///
/// let dictionaries = LocaleCollection::new(vec![
///     LocaleDictionary::from_entries("en", [("greeting", "Hello $$$")]),
///     LocaleDictionary::from_entries("fr", [("greeting", "Bonjour $$$")]),
/// ]);
/// assert_eq!(
///     resolve("greeting", &dictionaries, Some("fr"), "en", Some("Alice")),
///     "Bonjour Alice"
/// );
/// assert_eq!(
///     resolve("greeting", &dictionaries, Some("de"), "en", Some("Alice")),
///     "Hello Alice"
/// );
/// assert_eq!(resolve("missing", &dictionaries, Some("fr"), "en", None), "missing");
/// ```
pub fn resolve(
    key: &str,
    dictionaries: &LocaleCollection,
    current_locale: Option<&str>,
    fallback_locale: &str,
    value: Option<&str>,
) -> String {
    let index = dictionaries.index();
    let find = |code: &str| index.get(code).and_then(|&pos| dictionaries.get(pos));
    let locale = current_locale
        .filter(|locale| !locale.is_empty())
        .unwrap_or(fallback_locale);
    translate(lookup(find, key, locale, fallback_locale), key, value)
}

/// Walk the fallback chain: current locale, then fallback locale.
fn lookup<'a, F>(find: F, key: &str, locale: &str, fallback_locale: &str) -> Option<&'a str>
where
    F: Fn(&str) -> Option<&'a LocaleDictionary>,
{
    if let Some(text) = find(locale).and_then(|dictionary| dictionary.get(key)) {
        return Some(text);
    }
    if locale != fallback_locale {
        if let Some(text) = find(fallback_locale).and_then(|dictionary| dictionary.get(key)) {
            tracing::debug!(key, locale, fallback_locale, "translation from fallback locale");
            return Some(text);
        }
    }
    tracing::debug!(key, locale, "missing translation, use the key");
    None
}

// Only translated text takes the value, the raw key is kept as is.
fn translate(text: Option<&str>, key: &str, value: Option<&str>) -> String {
    match (text, value) {
        (Some(text), Some(value)) if !value.is_empty() => text.replace(PLACEHOLDER, value),
        (Some(text), _) => text.to_owned(),
        (None, _) => key.to_owned(),
    }
}

/// Translate keys for the locale currently reported by a [`Navigator`].
pub struct LocaleResolver {
    dictionaries: LocaleCollection,
    // Locale code and the position of its dictionary.
    index: HashMap<String, usize>,
    fallback_locale: String,
    navigator: Arc<dyn Navigator>,
}

impl LocaleResolver {
    pub fn new(dictionaries: LocaleCollection, navigator: Arc<dyn Navigator>) -> Self {
        let index = dictionaries
            .index()
            .into_iter()
            .map(|(code, pos)| (code.to_owned(), pos))
            .collect();
        LocaleResolver {
            dictionaries,
            index,
            fallback_locale: String::from(DEFAULT_LOCALE),
            navigator,
        }
    }

    /// Replace the fallback locale, which defaults to [`DEFAULT_LOCALE`].
    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    pub fn dictionaries(&self) -> &LocaleCollection {
        &self.dictionaries
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// The active locale code, or the fallback locale if the navigator has none.
    pub fn current_locale(&self) -> String {
        self.navigator
            .current_code()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| self.fallback_locale.clone())
    }

    /// Translate `key` in the current locale.
    pub fn resolve(&self, key: &str, value: Option<&str>) -> String {
        self.resolve_in(&self.current_locale(), key, value)
    }

    /// Translate `key` in `locale` rather than the current locale.
    pub fn resolve_in(&self, locale: &str, key: &str, value: Option<&str>) -> String {
        let locale = if locale.is_empty() {
            self.fallback_locale.as_str()
        } else {
            locale
        };
        let text = lookup(
            |code| self.dictionary(code),
            key,
            locale,
            &self.fallback_locale,
        );
        translate(text, key, value)
    }

    /// The locale codes with a dictionary, in input order.
    pub fn available_locales(&self) -> Vec<&str> {
        self.dictionaries.codes()
    }

    /// Switch to `locale`, staying on the current path.
    pub fn change_locale(&self, locale: &str) -> Result<()> {
        let path = self.navigator.current_path();
        tracing::info!(locale, path = path.as_str(), "change locale");
        self.navigator.navigate(&path, locale)
    }

    fn dictionary(&self, code: &str) -> Option<&LocaleDictionary> {
        self.index
            .get(code)
            .and_then(|&pos| self.dictionaries.get(pos))
    }
}

impl std::fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleResolver")
            .field("locales", &self.dictionaries.codes())
            .field("fallback_locale", &self.fallback_locale)
            .field("current_locale", &self.current_locale())
            .finish()
    }
}
