//! Playback session state machine
//!
//! `Idle <-> Active(Playing|Paused)`. Requesting playback of any note
//! first tears down the active session, so at most one player handle is
//! ever held. Re-playing the same note restarts it from the beginning.

use crate::audio::{PlayerDevice, PlayerHandle};
use crate::Result;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

enum PlaybackSession {
    Idle,
    Active {
        uri: String,
        handle: Box<dyn PlayerHandle>,
        state: PlaybackState,
    },
}

pub struct Player {
    device: Box<dyn PlayerDevice>,
    session: PlaybackSession,
}

impl Player {
    pub fn new(device: Box<dyn PlayerDevice>) -> Self {
        Self {
            device,
            session: PlaybackSession::Idle,
        }
    }

    /// URI and state of the active session, if any
    pub fn current(&self) -> Option<(&str, PlaybackState)> {
        match &self.session {
            PlaybackSession::Active { uri, state, .. } => Some((uri.as_str(), *state)),
            PlaybackSession::Idle => None,
        }
    }

    /// Playback position of the active session, in seconds
    pub fn position_seconds(&self) -> Option<f64> {
        match &self.session {
            PlaybackSession::Active { handle, .. } => Some(handle.position_seconds()),
            PlaybackSession::Idle => None,
        }
    }

    /// Load `uri` into a fresh handle and start playing from the beginning
    ///
    /// Any active session is torn down first; on failure the session ends
    /// up `Idle` with no handle held.
    pub fn play(&mut self, uri: &str) -> Result<()> {
        self.stop();

        let mut handle = self.device.open(Path::new(uri))?;
        handle.play()?;
        self.session = PlaybackSession::Active {
            uri: uri.to_string(),
            handle,
            state: PlaybackState::Playing,
        };
        info!("Playing {}", uri);
        Ok(())
    }

    /// Pause the active session without releasing its handle; a no-op when
    /// nothing is playing
    pub fn pause(&mut self) {
        if let PlaybackSession::Active { handle, state, .. } = &mut self.session {
            handle.pause();
            *state = PlaybackState::Paused;
        }
    }

    /// Tear down the active session; safe to call when already idle
    pub fn stop(&mut self) {
        if let PlaybackSession::Active { mut handle, uri, .. } =
            std::mem::replace(&mut self.session, PlaybackSession::Idle)
        {
            handle.stop();
            info!("Stopped playback of {}", uri);
        }
    }
}
