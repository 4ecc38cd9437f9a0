use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LocaleError;

/// The translations of a single locale, tagged with its locale code.
///
/// On disk a dictionary is a flat JSON object or TOML table whose
/// `locale` attribute names the locale and whose other keys are
/// translation keys:
///
/// ```json
/// { "locale": "fr_FR", "greeting": "Bonjour $$$" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocaleDictionary {
    locale: String,
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

static LOCALE_KEY: &str = "locale";

// The loose shape accepted from dictionary files, values are normalized later.
#[derive(Deserialize)]
struct RawDictionary {
    locale: Option<String>,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl LocaleDictionary {
    pub fn new(locale: impl Into<String>) -> Self {
        LocaleDictionary {
            locale: locale.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Build a dictionary from `(key, text)` pairs.
    pub fn from_entries<K, V, I>(locale: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut dictionary = LocaleDictionary::new(locale);
        for (key, text) in entries {
            dictionary.insert(key, text);
        }
        dictionary
    }

    /// Parse a JSON dictionary. `inferred_locale` is used when the
    /// document has no `locale` attribute.
    pub fn from_json_str(
        json: &str,
        inferred_locale: Option<&str>,
    ) -> Result<Self, LocaleError> {
        let raw = serde_json::from_str::<RawDictionary>(json)?;
        Self::from_raw(raw, inferred_locale)
    }

    /// Parse a TOML dictionary. `inferred_locale` is used when the
    /// document has no `locale` attribute.
    pub fn from_toml_str(
        content: &str,
        inferred_locale: Option<&str>,
    ) -> Result<Self, LocaleError> {
        let raw = toml::from_str::<RawDictionary>(content)?;
        Self::from_raw(raw, inferred_locale)
    }

    /// Load a `.json` or `.toml` dictionary file. The file stem is the
    /// locale code if the file doesn't declare one.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary `{}`", path.display()))?;
        let stem = path.file_stem().and_then(|stem| stem.to_str());
        let dictionary = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content, stem),
            _ => Self::from_json_str(&content, stem),
        }
        .with_context(|| format!("Failed to parse dictionary `{}`", path.display()))?;
        Ok(dictionary)
    }

    fn from_raw(raw: RawDictionary, inferred_locale: Option<&str>) -> Result<Self, LocaleError> {
        let locale = raw
            .locale
            .filter(|locale| !locale.is_empty())
            .or_else(|| inferred_locale.map(str::to_owned))
            .ok_or(LocaleError::MissingLocaleTag)?;

        let entries = raw
            .entries
            .into_iter()
            .filter_map(|(key, value)| entry_text(&locale, &key, value).map(|text| (key, text)))
            .collect();
        Ok(LocaleDictionary { locale, entries })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Insert a translation. Inserting `locale` retags the dictionary.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> &mut Self {
        let key = key.into();
        if key == LOCALE_KEY {
            self.locale = text.into();
        } else {
            self.entries.insert(key, text.into());
        }
        self
    }

    /// Get the text of `key`. The `locale` key gives the locale code.
    ///
    /// An empty text counts as a missing translation.
    pub fn get(&self, key: &str) -> Option<&str> {
        let text = if key == LOCALE_KEY {
            Some(self.locale.as_str())
        } else {
            self.entries.get(key).map(String::as_str)
        };
        text.filter(|text| !text.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Falsy values (`null`, `false`, `0`) are dropped so the lookup falls
// through to the next locale, other scalars keep their textual form.
fn entry_text(locale: &str, key: &str, value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Bool(true) => Some(String::from("true")),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(false) => None,
        Value::Array(_) | Value::Object(_) => {
            tracing::warn!(locale, key, "skip non-text dictionary entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::LocaleDictionary;
    use crate::error::LocaleError;

    #[test]
    fn test_parse_json_dictionary() {
        let dictionary = LocaleDictionary::from_json_str(
            r#"{"locale": "fr_FR", "greeting": "Bonjour $$$", "farewell": "Au revoir"}"#,
            None,
        )
        .unwrap();
        assert_eq!(dictionary.locale(), "fr_FR");
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("greeting"), Some("Bonjour $$$"));
        assert_eq!(dictionary.get("farewell"), Some("Au revoir"));
        assert_eq!(dictionary.get("locale"), Some("fr_FR"));
    }

    #[test]
    fn test_parse_toml_dictionary() {
        let dictionary = LocaleDictionary::from_toml_str(
            r#"
locale = "de"
greeting = "Hallo $$$"
"#,
            Some("ignored"),
        )
        .unwrap();
        assert_eq!(dictionary.locale(), "de");
        assert_eq!(dictionary.get("greeting"), Some("Hallo $$$"));
    }

    #[test]
    fn test_infer_locale() {
        let dictionary =
            LocaleDictionary::from_json_str(r#"{"greeting": "Hola"}"#, Some("es")).unwrap();
        assert_eq!(dictionary.locale(), "es");

        let dictionary =
            LocaleDictionary::from_json_str(r#"{"locale": "", "greeting": "Hola"}"#, Some("es"))
                .unwrap();
        assert_eq!(dictionary.locale(), "es");

        assert!(matches!(
            LocaleDictionary::from_json_str(r#"{"greeting": "Hola"}"#, None),
            Err(LocaleError::MissingLocaleTag)
        ));
    }

    #[test]
    fn test_falsy_values_are_missing() {
        let dictionary = LocaleDictionary::from_json_str(
            r#"{
                "locale": "en",
                "empty": "",
                "null": null,
                "no": false,
                "zero": 0,
                "yes": true,
                "count": 42,
                "nested": {"a": "b"},
                "list": ["a"]
            }"#,
            None,
        )
        .unwrap();
        assert_eq!(dictionary.get("empty"), None);
        assert_eq!(dictionary.get("null"), None);
        assert_eq!(dictionary.get("no"), None);
        assert_eq!(dictionary.get("zero"), None);
        assert_eq!(dictionary.get("nested"), None);
        assert_eq!(dictionary.get("list"), None);
        assert_eq!(dictionary.get("yes"), Some("true"));
        assert_eq!(dictionary.get("count"), Some("42"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            LocaleDictionary::from_json_str("[1, 2]", Some("en")),
            Err(LocaleError::InvalidJsonDictionary(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ja.json");
        fs::write(&path, r#"{"greeting": "こんにちは"}"#).unwrap();

        let dictionary = LocaleDictionary::load(&path).unwrap();
        assert_eq!(dictionary.locale(), "ja");
        assert_eq!(dictionary.get("greeting"), Some("こんにちは"));

        assert!(LocaleDictionary::load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_insert() {
        let mut dictionary = LocaleDictionary::new("en");
        dictionary.insert("a", "A").insert("b", "B");
        assert_eq!(dictionary.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(dictionary.contains_key("a"));
        assert!(!dictionary.contains_key("c"));
        assert_eq!(
            serde_json::to_string(&dictionary).unwrap(),
            r#"{"locale":"en","a":"A","b":"B"}"#
        );

        dictionary.insert("locale", "en_GB");
        assert_eq!(dictionary.locale(), "en_GB");
        assert_eq!(dictionary.get("locale"), Some("en_GB"));
        assert_eq!(dictionary.len(), 2);
    }
}
