//! Message bundles: per-locale translated strings loaded from JSON files.
//!
//! Each supported locale has exactly one file, `<messages_dir>/<code>.json`,
//! holding an object keyed by message id. Values are either strings or
//! nested objects that group related messages (`admin.categories.title`).
//! Bundles are read fresh for every request configuration; nothing is cached.

use crate::error::AppError;
use crate::i18n::Locale;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Translated strings for one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBundle {
    messages: Map<String, Value>,
}

impl MessageBundle {
    /// Parse a bundle from raw JSON. The root must be an object.
    pub fn from_json(locale: Locale, raw: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(raw).map_err(|e| AppError::BundleMalformed {
            locale: locale.code(),
            reason: e.to_string(),
        })?;

        match value {
            Value::Object(messages) => Ok(Self { messages }),
            other => Err(AppError::BundleMalformed {
                locale: locale.code(),
                reason: format!("expected a JSON object at the root, found {}", kind(&other)),
            }),
        }
    }

    /// Look up a message by dot-separated key.
    ///
    /// Returns `None` when any segment is missing or the leaf is not a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.messages.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }

    /// Translate a key, falling back to the key itself when it is missing.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(text) => text,
            None => {
                warn!("Missing message '{}'", key);
                key
            }
        }
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Translation context for one request: the resolved locale and its bundle.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub locale: Locale,
    pub messages: MessageBundle,
}

impl RequestConfig {
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.t(key)
    }
}

/// File name of a locale's bundle.
fn bundle_file(locale: Locale) -> &'static str {
    match locale {
        Locale::Fa => "fa.json",
        Locale::En => "en.json",
        Locale::Ar => "ar.json",
    }
}

/// Path of a locale's bundle inside `messages_dir`.
pub fn bundle_path(messages_dir: &Path, locale: Locale) -> PathBuf {
    messages_dir.join(bundle_file(locale))
}

/// Load the message bundle for a validated locale.
///
/// # Errors
/// * `AppError::BundleUnavailable` if the file cannot be read
/// * `AppError::BundleMalformed` if the file is not a JSON object
pub async fn load_messages(
    messages_dir: &Path,
    locale: Locale,
) -> Result<RequestConfig, AppError> {
    let path = bundle_path(messages_dir, locale);

    let raw = tokio::fs::read(&path)
        .await
        .map_err(|source| AppError::BundleUnavailable {
            locale: locale.code(),
            path: path.clone(),
            source,
        })?;

    let messages = MessageBundle::from_json(locale, &raw)?;
    debug!("Loaded {} message groups for '{}'", messages.len(), locale);

    Ok(RequestConfig { locale, messages })
}

/// Request-configuration hook: validate the requested locale, then load its
/// bundle.
pub async fn request_config(
    messages_dir: &Path,
    requested: &str,
) -> Result<RequestConfig, AppError> {
    let locale = Locale::resolve(requested)?;
    load_messages(messages_dir, locale).await
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
