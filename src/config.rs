//! Application configuration
//!
//! Resolves where notes and recordings live on disk and which capture
//! preset recordings use.

use crate::audio::RecordingPreset;
use std::path::PathBuf;

/// Key under which the serialized note list is persisted.
pub const NOTES_STORAGE_KEY: &str = "voice_notes";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MURMUR_DATA_DIR";

/// Configuration for the application
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Root directory for all persisted data
    pub data_dir: PathBuf,

    /// Capture preset used for new recordings
    pub preset: RecordingPreset,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            preset: RecordingPreset::high_quality(),
        }
    }
}

impl AppConfig {
    /// Create a configuration rooted at a specific data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Directory holding the audio blobs, one file per note
    pub fn recordings_dir(&self) -> PathBuf {
        self.data_dir.join("recordings")
    }

    /// Directory holding the key-value store files
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .map(|p| p.join("murmur"))
        .unwrap_or_else(|| PathBuf::from("murmur-data"))
}
