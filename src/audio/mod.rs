//! Platform audio seams
//!
//! The controller only ever talks to the traits in this module. Desktop
//! implementations (cpal capture, rodio playback) live behind the
//! `audio-io` feature; platforms without audio support use the no-op
//! devices in [`unsupported`].

#[cfg(feature = "audio-io")]
pub mod capture;
#[cfg(feature = "audio-io")]
pub mod playback;
pub mod unsupported;

#[cfg(feature = "audio-io")]
pub use capture::{CpalCaptureDevice, CpalMicrophone};
#[cfg(feature = "audio-io")]
pub use playback::RodioPlayerDevice;
pub use unsupported::{DeniedMicrophone, UnsupportedCaptureDevice, UnsupportedPlayerDevice};

use crate::Result;
use std::path::{Path, PathBuf};

/// Outcome of a microphone capability request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Access gate for the microphone capability
pub trait CapabilityProvider {
    fn request_microphone(&mut self) -> Permission;
}

/// Capture quality requested when opening a recording
///
/// The desktop device records at the hardware's native stream config; the
/// preset names the target quality and is honored exactly by test devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingPreset {
    pub sample_rate: u32,
    pub channels: u16,
}

impl RecordingPreset {
    pub fn high_quality() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 1,
        }
    }
}

/// Finalized capture output
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedAudio {
    /// Temporary location of the captured blob, ready to be adopted by a
    /// blob store
    pub source: PathBuf,
    /// Elapsed capture time in seconds, read from the handle before release
    pub elapsed_seconds: f64,
}

/// Live capture handle; exactly one exists while a recording session is
/// active
pub trait CaptureHandle {
    /// Elapsed capture time so far, in seconds
    fn elapsed_seconds(&self) -> f64;

    /// Finalize the capture and release the handle
    fn finalize(self: Box<Self>) -> Result<CapturedAudio>;
}

/// Factory for capture handles
pub trait CaptureDevice {
    fn open(&mut self, preset: &RecordingPreset) -> Result<Box<dyn CaptureHandle>>;
}

/// Live playback handle for a single loaded note
pub trait PlayerHandle {
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    /// Stop playback; calling this on an already-stopped handle is a no-op
    fn stop(&mut self);

    /// Current playback position in seconds
    fn position_seconds(&self) -> f64;
}

/// Factory for playback handles
pub trait PlayerDevice {
    fn open(&mut self, source: &Path) -> Result<Box<dyn PlayerHandle>>;
}
