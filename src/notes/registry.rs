//! In-memory note list mirrored to durable storage
//!
//! Every mutation rewrites the full serialized list under
//! [`NOTES_STORAGE_KEY`]. Persistence failures are logged and the
//! in-memory list stays authoritative; there is no rollback.

use crate::config::NOTES_STORAGE_KEY;
use crate::notes::types::Note;
use crate::storage::KeyValueStore;
use crate::{MurmurError, Result};
use tracing::{error, info};

pub struct NoteRegistry {
    notes: Vec<Note>,
    store: Box<dyn KeyValueStore>,
}

impl NoteRegistry {
    /// Populate the registry from the store; an absent key or an unreadable
    /// payload both start an empty registry
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let notes = match store.get(NOTES_STORAGE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Note>>(&payload) {
                Ok(notes) => notes,
                Err(e) => {
                    error!("Failed to parse stored notes, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("Failed to load notes from storage: {}", e);
                Vec::new()
            }
        };

        info!("Loaded {} notes", notes.len());
        Self { notes, store }
    }

    /// Append a note and persist the list
    pub fn create(&mut self, note: Note) {
        self.notes.push(note);
        self.persist();
    }

    /// Replace a note's display name and persist the list
    ///
    /// The new name must be non-empty after trimming.
    pub fn rename(&mut self, uri: &str, new_name: &str) -> Result<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(MurmurError::InvalidInput(
                "Name cannot be empty.".to_string(),
            ));
        }

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.uri == uri)
            .ok_or_else(|| MurmurError::NotFound(uri.to_string()))?;
        note.name = new_name.to_string();
        self.persist();
        Ok(())
    }

    /// Remove a note and persist the list
    ///
    /// Callers are responsible for deleting the audio blob first.
    pub fn remove(&mut self, uri: &str) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.uri == uri)
            .ok_or_else(|| MurmurError::NotFound(uri.to_string()))?;
        let note = self.notes.remove(index);
        self.persist();
        Ok(note)
    }

    pub fn get(&self, uri: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.uri == uri)
    }

    /// All notes in creation order
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.notes) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize notes: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(NOTES_STORAGE_KEY, &payload) {
            error!("Failed to save notes to storage: {}", e);
        }
    }
}
