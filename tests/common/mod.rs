//! Shared fakes for the integration suites
//!
//! The capture fake produces real files on disk so the filesystem blob
//! store can adopt them exactly like a desktop capture.

#![allow(dead_code)]

use murmur::audio::{
    CapabilityProvider, CapturedAudio, CaptureDevice, CaptureHandle, Permission, PlayerDevice,
    PlayerHandle, RecordingPreset,
};
use murmur::Result;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Capability provider that always grants the microphone
pub struct GrantedMic;

impl CapabilityProvider for GrantedMic {
    fn request_microphone(&mut self) -> Permission {
        Permission::Granted
    }
}

/// Capture device writing a small real file per clip into `dir`
pub struct TempCaptureDevice {
    dir: PathBuf,
    clip_seconds: f64,
}

impl TempCaptureDevice {
    pub fn new(dir: impl Into<PathBuf>, clip_seconds: f64) -> Self {
        Self {
            dir: dir.into(),
            clip_seconds,
        }
    }
}

impl CaptureDevice for TempCaptureDevice {
    fn open(&mut self, _preset: &RecordingPreset) -> Result<Box<dyn CaptureHandle>> {
        Ok(Box::new(TempCaptureHandle {
            path: self.dir.join(format!("capture-{}.wav", uuid::Uuid::new_v4())),
            clip_seconds: self.clip_seconds,
        }))
    }
}

struct TempCaptureHandle {
    path: PathBuf,
    clip_seconds: f64,
}

impl CaptureHandle for TempCaptureHandle {
    fn elapsed_seconds(&self) -> f64 {
        self.clip_seconds
    }

    fn finalize(self: Box<Self>) -> Result<CapturedAudio> {
        std::fs::write(&self.path, b"RIFF fake wav data")?;
        Ok(CapturedAudio {
            source: self.path,
            elapsed_seconds: self.clip_seconds,
        })
    }
}

/// Player device counting how many handles are live at once
pub struct CountingPlayerDevice {
    live_handles: Rc<Cell<u32>>,
}

impl CountingPlayerDevice {
    pub fn new() -> (Self, Rc<Cell<u32>>) {
        let live_handles = Rc::new(Cell::new(0));
        (
            Self {
                live_handles: Rc::clone(&live_handles),
            },
            live_handles,
        )
    }
}

impl PlayerDevice for CountingPlayerDevice {
    fn open(&mut self, _source: &Path) -> Result<Box<dyn PlayerHandle>> {
        self.live_handles.set(self.live_handles.get() + 1);
        Ok(Box::new(CountingPlayerHandle {
            live_handles: Rc::clone(&self.live_handles),
            stopped: false,
        }))
    }
}

struct CountingPlayerHandle {
    live_handles: Rc<Cell<u32>>,
    stopped: bool,
}

impl PlayerHandle for CountingPlayerHandle {
    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.live_handles.set(self.live_handles.get() - 1);
        }
    }

    fn position_seconds(&self) -> f64 {
        0.0
    }
}
