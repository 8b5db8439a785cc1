//! Application state management
//!
//! Wraps the controller with the transient UI inputs (search text, an
//! in-progress rename, the last user-visible notice). Errors from the
//! controller surface here as notices; nothing panics.

use crate::controller::Controller;
use crate::notes::Note;
use crate::session::PlaybackState;

pub struct AppState {
    controller: Controller,

    /// Current search input
    pub search_query: String,

    /// URI of the note being renamed, if an edit is in progress
    pub renaming: Option<String>,

    /// Rename input buffer
    pub rename_text: String,

    /// Last user-visible notice (permission errors, unsupported platform,
    /// rejected input)
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            search_query: String::new(),
            renaming: None,
            rename_text: String::new(),
            notice: None,
        }
    }

    /// The notes currently visible under the active search, in creation
    /// order
    pub fn visible_notes(&self) -> Vec<Note> {
        self.controller
            .search(&self.search_query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn is_recording(&self) -> bool {
        self.controller.is_recording()
    }

    pub fn recording_elapsed(&self) -> Option<f64> {
        self.controller.recording_elapsed()
    }

    /// Playback state of `uri`, if it is the loaded note
    pub fn playback_state_of(&self, uri: &str) -> Option<PlaybackState> {
        match self.controller.playback() {
            Some((active, state)) if active == uri => Some(state),
            _ => None,
        }
    }

    pub fn playback_position(&self) -> Option<f64> {
        self.controller.playback_position()
    }

    /// Single record/stop toggle, matching the one-button UI contract
    pub fn toggle_recording(&mut self) {
        let result = if self.controller.is_recording() {
            self.controller.stop_recording().map(|_| ())
        } else {
            self.controller.start_recording()
        };
        self.report(result);
    }

    pub fn play(&mut self, uri: &str) {
        let result = self.controller.play(uri);
        self.report(result);
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn begin_rename(&mut self, uri: &str) {
        let current = self
            .controller
            .notes()
            .iter()
            .find(|n| n.uri == uri)
            .map(|n| n.name.clone())
            .unwrap_or_default();
        self.renaming = Some(uri.to_string());
        self.rename_text = current;
    }

    /// Apply the rename buffer; the edit stays open when the name is
    /// rejected so the user can fix it
    pub fn commit_rename(&mut self) {
        let Some(uri) = self.renaming.clone() else {
            return;
        };
        match self.controller.rename(&uri, &self.rename_text) {
            Ok(()) => {
                self.renaming = None;
                self.rename_text.clear();
                self.notice = None;
            }
            Err(e) => self.notice = Some(e.user_message()),
        }
    }

    pub fn cancel_rename(&mut self) {
        self.renaming = None;
        self.rename_text.clear();
    }

    pub fn delete(&mut self, uri: &str) {
        if self.renaming.as_deref() == Some(uri) {
            self.cancel_rename();
        }
        let result = self.controller.delete(uri);
        self.report(result);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn report(&mut self, result: crate::Result<()>) {
        match result {
            Ok(()) => self.notice = None,
            Err(e) => self.notice = Some(e.user_message()),
        }
    }
}
