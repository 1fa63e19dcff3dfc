//! Emoji catalog loaded from a manifest.
//!
//! The catalog is built once at startup and shared read-only (behind an
//! [`Arc`]) by the codec, edit sessions and the keyboard picker. A manifest is
//! a flat JSON array of records:
//!
//! ```json
//! [
//!   { "text": "smile", "resourceName": "smile.png", "dynamicName": "smile.gif" }
//! ]
//! ```
//!
//! Loading is all-or-nothing: a missing file, malformed JSON, a repeated
//! token or a token that could never appear inside `[token]` fails the whole
//! catalog. Callers treat that as a fatal startup error.

use crate::codec::is_valid_token;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A single emoji definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Emoji {
    token: String,
    static_resource: PathBuf,
    animated_resource: PathBuf,
}

impl Emoji {
    /// Create an emoji definition, checking that the token is placeholder-safe.
    pub fn new(
        token: impl Into<String>,
        static_resource: impl Into<PathBuf>,
        animated_resource: impl Into<PathBuf>,
    ) -> Result<Self> {
        let token = token.into();
        if !is_valid_token(&token) {
            return Err(Error::InvalidToken(token));
        }
        Ok(Self {
            token,
            static_resource: static_resource.into(),
            animated_resource: animated_resource.into(),
        })
    }

    /// Short name used inside placeholders.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Path of the still image.
    #[must_use]
    pub fn static_resource(&self) -> &Path {
        &self.static_resource
    }

    /// Path of the animated image.
    #[must_use]
    pub fn animated_resource(&self) -> &Path {
        &self.animated_resource
    }

    /// The `[token]` placeholder for this emoji.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.token)
    }
}

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    text: String,
    #[serde(rename = "resourceName")]
    resource_name: String,
    #[serde(rename = "dynamicName")]
    dynamic_name: String,
}

/// Ordered, immutable registry of emoji.
#[derive(Clone, Debug, Default)]
pub struct EmojiCatalog {
    emojis: Vec<Arc<Emoji>>,
    by_token: HashMap<String, usize>,
}

impl EmojiCatalog {
    /// Build a catalog from emoji definitions, keeping their order.
    pub fn from_emojis(emojis: impl IntoIterator<Item = Emoji>) -> Result<Self> {
        let mut catalog = Self::default();
        for emoji in emojis {
            if catalog.by_token.contains_key(emoji.token()) {
                return Err(Error::DuplicateToken(emoji.token));
            }
            catalog
                .by_token
                .insert(emoji.token.clone(), catalog.emojis.len());
            catalog.emojis.push(Arc::new(emoji));
        }
        Ok(catalog)
    }

    /// Parse a manifest. Resource names are kept exactly as written.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_records(serde_json::from_str(json)?, None)
    }

    /// Parse a manifest from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_records(serde_json::from_reader(reader)?, None)
    }

    /// Load a manifest file. Relative resource names are resolved against the
    /// directory containing the manifest.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let records = serde_json::from_str(&json)?;
        let catalog = Self::from_records(records, path.parent())?;
        tracing::debug!(
            manifest = %path.display(),
            count = catalog.len(),
            "loaded emoji catalog"
        );
        Ok(catalog)
    }

    fn from_records(records: Vec<ManifestRecord>, root: Option<&Path>) -> Result<Self> {
        let resolve = |name: String| match root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        };
        let emojis = records
            .into_iter()
            .map(|record| {
                Emoji::new(
                    record.text,
                    resolve(record.resource_name),
                    resolve(record.dynamic_name),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_emojis(emojis)
    }

    /// Find the emoji for a token.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&Arc<Emoji>> {
        self.by_token.get(token).map(|&idx| &self.emojis[idx])
    }

    /// All emoji in manifest order (the picker grid order).
    #[must_use]
    pub fn all(&self) -> &[Arc<Emoji>] {
        &self.emojis
    }

    /// Number of emoji.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// Check if the catalog has no emoji.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}
