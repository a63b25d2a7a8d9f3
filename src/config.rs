//! Application configuration.
//!
//! The browser points at a collection root directory. Tag source files live
//! in `<root>/tag_files` and image binaries in `<root>/data/bin`. The root
//! is persisted to a small JSON config file so the chosen collection
//! survives restarts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::BrowserError;

/// How raw image bytes are obtained for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetrievalMode {
    /// Read `<image_dir>/<image_id>` from disk
    #[default]
    Filesystem,
    /// Decode the record's `encoded_bytes` field as standard base64
    Embedded,
}

/// Retrieval variant compiled into this build. Collections that embed
/// their images in the tag records are browsed with the
/// `embedded-images` feature enabled.
#[cfg(feature = "embedded-images")]
pub const RETRIEVAL_MODE: RetrievalMode = RetrievalMode::Embedded;
#[cfg(not(feature = "embedded-images"))]
pub const RETRIEVAL_MODE: RetrievalMode = RetrievalMode::Filesystem;

/// Persisted application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Root directory of the image collection
    pub collection_root: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            collection_root: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Directory holding the `*.json` tag source files.
    pub fn tag_dir(&self) -> PathBuf {
        self.collection_root.join("tag_files")
    }

    /// Directory holding the raw image binaries, keyed by image id.
    pub fn image_dir(&self) -> PathBuf {
        self.collection_root.join("data").join("bin")
    }

    /// Get the path where the config file is stored
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user config directory");

        path.push("inscription-browser");
        path.push("config.json");
        path
    }

    /// Load the config file, falling back to defaults if it is absent
    /// or unreadable.
    pub fn load() -> Self {
        let path = Self::config_path();

        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<(), BrowserError> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;

        Ok(())
    }
}
