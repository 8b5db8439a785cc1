//! No-op devices for platforms without audio support
//!
//! Builds without the `audio-io` feature fall back to these; every
//! operation reports `Unsupported` or a denied capability, mirroring how
//! the app behaves on platforms that cannot record.

use crate::audio::{
    CapabilityProvider, CaptureDevice, CaptureHandle, Permission, PlayerDevice, PlayerHandle,
    RecordingPreset,
};
use crate::{MurmurError, Result};
use std::path::Path;

/// Capability provider that always denies the microphone
#[derive(Default)]
pub struct DeniedMicrophone;

impl CapabilityProvider for DeniedMicrophone {
    fn request_microphone(&mut self) -> Permission {
        Permission::Denied
    }
}

/// Capture device that refuses to open
#[derive(Default)]
pub struct UnsupportedCaptureDevice;

impl CaptureDevice for UnsupportedCaptureDevice {
    fn open(&mut self, _preset: &RecordingPreset) -> Result<Box<dyn CaptureHandle>> {
        Err(MurmurError::Unsupported("Recording"))
    }
}

/// Player device that refuses to open
#[derive(Default)]
pub struct UnsupportedPlayerDevice;

impl PlayerDevice for UnsupportedPlayerDevice {
    fn open(&mut self, _source: &Path) -> Result<Box<dyn PlayerHandle>> {
        Err(MurmurError::Unsupported("Playback"))
    }
}
