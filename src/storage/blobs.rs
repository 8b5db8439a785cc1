//! Audio blob storage
//!
//! Adopting a blob moves the captured temp file into the recordings
//! directory and returns the durable URI that becomes the note's identity.

use crate::{MurmurError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait BlobStore {
    /// Whether this platform supports durable blob storage at all
    fn is_supported(&self) -> bool;

    /// Move `source` into durable storage under `file_name`, returning the
    /// new blob URI
    fn adopt(&self, source: &Path, file_name: &str) -> Result<String>;

    /// Delete the blob at `uri`
    fn delete(&self, uri: &str) -> Result<()>;
}

/// Filesystem-backed blob store rooted at the recordings directory
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BlobStore for FsBlobStore {
    fn is_supported(&self) -> bool {
        true
    }

    fn adopt(&self, source: &Path, file_name: &str) -> Result<String> {
        fs::create_dir_all(&self.root)
            .map_err(|e| MurmurError::Storage(format!("Failed to create recordings dir: {e}")))?;

        let dest = self.root.join(file_name);
        // The temp dir can sit on a different filesystem, where rename
        // fails with EXDEV.
        if fs::rename(source, &dest).is_err() {
            fs::copy(source, &dest)
                .map_err(|e| MurmurError::Io(format!("Failed to move recording: {e}")))?;
            if let Err(e) = fs::remove_file(source) {
                debug!("Failed to remove temp capture {}: {}", source.display(), e);
            }
        }

        Ok(dest.to_string_lossy().into_owned())
    }

    fn delete(&self, uri: &str) -> Result<()> {
        fs::remove_file(uri)
            .map_err(|e| MurmurError::Io(format!("Failed to delete recording {uri}: {e}")))
    }
}

/// Blob store for platforms without durable file storage
#[derive(Default)]
pub struct NullBlobStore;

impl BlobStore for NullBlobStore {
    fn is_supported(&self) -> bool {
        false
    }

    fn adopt(&self, _source: &Path, _file_name: &str) -> Result<String> {
        Err(MurmurError::Unsupported("Saving recordings"))
    }

    fn delete(&self, _uri: &str) -> Result<()> {
        Err(MurmurError::Unsupported("Deleting recordings"))
    }
}
