//! Note record and display helpers
//!
//! The serialized field names (`uri`, `name`, `date`, `duration`) are the
//! on-disk format and must stay stable. There is no schema version tag;
//! records written before `name` and `duration` existed deserialize with
//! defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name given to a freshly captured note
pub const DEFAULT_NOTE_NAME: &str = "Untitled";

/// A single voice note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Storage URI of the audio blob; doubles as the note's unique id
    pub uri: String,

    #[serde(default = "default_name")]
    pub name: String,

    /// Creation time (UTC)
    pub date: DateTime<Utc>,

    /// Recorded length in seconds
    #[serde(default)]
    pub duration: f64,
}

fn default_name() -> String {
    DEFAULT_NOTE_NAME.to_string()
}

impl Note {
    /// Create a note for a freshly adopted recording
    pub fn new(uri: impl Into<String>, duration: f64) -> Self {
        Self {
            uri: uri.into(),
            name: DEFAULT_NOTE_NAME.to_string(),
            date: Utc::now(),
            duration,
        }
    }

    /// Recorded length as `m:ss`
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }

    /// Creation time rendered in the local timezone
    pub fn formatted_date(&self) -> String {
        self.date
            .with_timezone(&chrono::Local)
            .format("%b %e, %Y %H:%M")
            .to_string()
    }
}

/// Convert a duration in seconds to a `m:ss` string
pub fn format_duration(duration: f64) -> String {
    let total = duration.max(0.0) as u64;
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{}:{:02}", minutes, seconds)
}
