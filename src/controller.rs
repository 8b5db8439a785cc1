//! Recording/playback/persistence controller
//!
//! Owns the note registry, the single recording session, the single
//! playback session, and the blob store, and sequences every user-visible
//! operation across them. All operations run to completion on the UI
//! thread; consistency between the registry and durable storage is
//! best-effort (persistence failures are logged, not rolled back).

use crate::notes::{filter_notes, Note, NoteRegistry};
use crate::session::{PlaybackState, Player, Recorder};
use crate::storage::BlobStore;
use crate::{MurmurError, Result};
use chrono::Utc;
use tracing::{error, warn};

pub struct Controller {
    registry: NoteRegistry,
    recorder: Recorder,
    player: Player,
    blobs: Box<dyn BlobStore>,
}

impl Controller {
    pub fn new(
        registry: NoteRegistry,
        recorder: Recorder,
        player: Player,
        blobs: Box<dyn BlobStore>,
    ) -> Self {
        Self {
            registry,
            recorder,
            player,
            blobs,
        }
    }

    /// All notes in creation order
    pub fn notes(&self) -> &[Note] {
        self.registry.list()
    }

    /// Notes whose name matches `query` (case-insensitive substring)
    pub fn search(&self, query: &str) -> Vec<&Note> {
        filter_notes(self.registry.list(), query)
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_capturing()
    }

    /// Elapsed time of the active recording, if one is running
    pub fn recording_elapsed(&self) -> Option<f64> {
        self.recorder.elapsed_seconds()
    }

    /// URI and state of the active playback session, if any
    pub fn playback(&self) -> Option<(&str, PlaybackState)> {
        self.player.current()
    }

    /// Playback position of the active session, in seconds
    pub fn playback_position(&self) -> Option<f64> {
        self.player.position_seconds()
    }

    pub fn start_recording(&mut self) -> Result<()> {
        self.recorder.start()
    }

    /// Finalize the active recording into a new note
    ///
    /// Returns `Ok(None)` when no recording was active. The capture handle
    /// is released before durable storage is consulted, so an unsupported
    /// platform still ends the session cleanly; the clip is simply not
    /// kept. A failed move abandons the clip (the temp file may remain).
    pub fn stop_recording(&mut self) -> Result<Option<Note>> {
        let Some(clip) = self.recorder.stop()? else {
            return Ok(None);
        };

        if !self.blobs.is_supported() {
            warn!("Blob storage unsupported, discarding capture");
            return Err(MurmurError::Unsupported("Saving recordings"));
        }

        let file_name = format!("{}.wav", Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ"));
        let uri = match self.blobs.adopt(&clip.source, &file_name) {
            Ok(uri) => uri,
            Err(e) => {
                error!("Failed to store recording: {}", e);
                return Err(e);
            }
        };

        let note = Note::new(uri, clip.elapsed_seconds);
        self.registry.create(note.clone());
        Ok(Some(note))
    }

    /// Play a note from the beginning, tearing down any active playback
    pub fn play(&mut self, uri: &str) -> Result<()> {
        if self.registry.get(uri).is_none() {
            return Err(MurmurError::NotFound(uri.to_string()));
        }
        self.player.play(uri)
    }

    /// Pause playback; a no-op when nothing is playing
    pub fn pause(&mut self) {
        self.player.pause();
    }

    pub fn rename(&mut self, uri: &str, new_name: &str) -> Result<()> {
        self.registry.rename(uri, new_name)
    }

    /// Delete a note: blob first, registry record only once the blob is
    /// gone
    ///
    /// Refused outright when the platform has no durable storage, leaving
    /// the registry untouched.
    pub fn delete(&mut self, uri: &str) -> Result<()> {
        if !self.blobs.is_supported() {
            return Err(MurmurError::Unsupported("Deleting recordings"));
        }
        if self.registry.get(uri).is_none() {
            return Err(MurmurError::NotFound(uri.to_string()));
        }

        // Release the player before its blob disappears.
        if matches!(self.player.current(), Some((active, _)) if active == uri) {
            self.player.stop();
        }

        self.blobs.delete(uri)?;
        self.registry.remove(uri)?;
        Ok(())
    }
}
