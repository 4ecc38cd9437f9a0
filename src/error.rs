use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("resolver used without being initialized, call `context::provide` first")]
    NotInitialized,
    #[error("Invalid JSON dictionary: {0}")]
    InvalidJsonDictionary(#[from] serde_json::Error),
    #[error("Invalid TOML dictionary: {0}")]
    InvalidTomlDictionary(#[from] toml::de::Error),
    #[error("Dictionary has no `locale` attribute and no file name to infer it from")]
    MissingLocaleTag,
    #[error("Invalid format of `{}`: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
