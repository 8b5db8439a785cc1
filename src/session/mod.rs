//! Recording and playback sessions
//!
//! At most one of each exists process-wide. Each session is a tagged enum
//! held in a single owned slot; creating a new session always tears the
//! previous one down first.

pub mod player;
pub mod recorder;

pub use player::{PlaybackState, Player};
pub use recorder::{CapturedClip, Recorder};
