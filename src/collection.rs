use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::LocaleDictionary;

/// An ordered list of locale dictionaries, one per supported locale.
///
/// The order only decides which dictionary wins when two of them share a
/// locale code (the later one) and the order of [`LocaleCollection::codes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleCollection {
    dictionaries: Vec<LocaleDictionary>,
}

impl LocaleCollection {
    pub fn new(dictionaries: Vec<LocaleDictionary>) -> Self {
        let mut collection = LocaleCollection {
            dictionaries: Vec::with_capacity(dictionaries.len()),
        };
        for dictionary in dictionaries {
            collection.push(dictionary);
        }
        collection
    }

    /// Load every `*.json` and `*.toml` dictionary in `dir`, in file name order.
    /// Subdirectories are not visited.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut collection = LocaleCollection::default();
        for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to read dictionaries in `{}`", dir.display()))?;
            let path = entry.path();
            let is_dictionary = matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("json" | "toml")
            );
            if path.is_file() && is_dictionary {
                collection.push(LocaleDictionary::load(path)?);
            }
        }
        tracing::info!(
            dir = %dir.display(),
            count = collection.len(),
            "loaded locale dictionaries"
        );
        Ok(collection)
    }

    /// Append `dictionary`. It shadows an earlier dictionary with the same code.
    pub fn push(&mut self, dictionary: LocaleDictionary) {
        if self.codes().contains(&dictionary.locale()) {
            tracing::warn!(
                locale = dictionary.locale(),
                "duplicated locale dictionary, the later one wins"
            );
        }
        self.dictionaries.push(dictionary);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocaleDictionary> {
        self.dictionaries.iter()
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    /// The locale codes of this collection in input order.
    ///
    /// A code declared twice is reported once, at its first position.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::with_capacity(self.dictionaries.len());
        for dictionary in &self.dictionaries {
            if !codes.contains(&dictionary.locale()) {
                codes.push(dictionary.locale());
            }
        }
        codes
    }

    /// Map each locale code to the index of its dictionary, the last
    /// dictionary wins on duplicated codes.
    pub(crate) fn index(&self) -> HashMap<&str, usize> {
        let mut index = HashMap::with_capacity(self.dictionaries.len());
        for (position, dictionary) in self.dictionaries.iter().enumerate() {
            index.insert(dictionary.locale(), position);
        }
        index
    }

    pub(crate) fn get(&self, position: usize) -> Option<&LocaleDictionary> {
        self.dictionaries.get(position)
    }
}

impl From<Vec<LocaleDictionary>> for LocaleCollection {
    fn from(dictionaries: Vec<LocaleDictionary>) -> Self {
        LocaleCollection::new(dictionaries)
    }
}

impl FromIterator<LocaleDictionary> for LocaleCollection {
    fn from_iter<T: IntoIterator<Item = LocaleDictionary>>(iter: T) -> Self {
        LocaleCollection::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LocaleCollection {
    type Item = &'a LocaleDictionary;
    type IntoIter = std::slice::Iter<'a, LocaleDictionary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
