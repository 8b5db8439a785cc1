pub mod audio;
pub mod config;
pub mod controller;
pub mod notes;
pub mod session;
pub mod storage;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MurmurError {
    #[error("Microphone permission denied")]
    PermissionDenied,

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("Audio device error: {0}")]
    AudioDevice(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Note not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for MurmurError {
    fn from(e: std::io::Error) -> Self {
        MurmurError::Io(e.to_string())
    }
}

impl MurmurError {
    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            MurmurError::PermissionDenied => {
                "Permission denied. Please enable microphone permissions.".to_string()
            }
            MurmurError::Unsupported(what) => {
                format!("{what} is not supported on this platform.")
            }
            MurmurError::AudioDevice(_) => {
                "Audio device error. Please check your microphone/speakers.".to_string()
            }
            MurmurError::Capture(_) => {
                "Failed to save the recording. Please try again.".to_string()
            }
            MurmurError::Playback(_) => {
                "Failed to play the recording. Please try again.".to_string()
            }
            MurmurError::Storage(_) => "Failed to save your notes.".to_string(),
            MurmurError::Io(_) => "File system error occurred.".to_string(),
            MurmurError::InvalidInput(reason) => reason.clone(),
            MurmurError::NotFound(_) => "That recording no longer exists.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MurmurError>;
