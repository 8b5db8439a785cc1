//! Recording session state machine
//!
//! `Idle -> Capturing -> Idle`. Permission is requested on every start;
//! denial leaves the session `Idle` with no capture handle allocated.
//! `stop` always lands in `Idle`, whether or not finalizing the handle
//! succeeded.

use crate::audio::{CapabilityProvider, CaptureDevice, CaptureHandle, Permission, RecordingPreset};
use crate::{MurmurError, Result};
use tracing::{info, warn};

/// A finalized capture, ready to be adopted into durable storage
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedClip {
    pub source: std::path::PathBuf,
    pub elapsed_seconds: f64,
}

enum RecorderSession {
    Idle,
    Capturing { handle: Box<dyn CaptureHandle> },
}

pub struct Recorder {
    mic: Box<dyn CapabilityProvider>,
    device: Box<dyn CaptureDevice>,
    preset: RecordingPreset,
    session: RecorderSession,
}

impl Recorder {
    pub fn new(
        mic: Box<dyn CapabilityProvider>,
        device: Box<dyn CaptureDevice>,
        preset: RecordingPreset,
    ) -> Self {
        Self {
            mic,
            device,
            preset,
            session: RecorderSession::Idle,
        }
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.session, RecorderSession::Capturing { .. })
    }

    /// Elapsed capture time of the active session, if any
    pub fn elapsed_seconds(&self) -> Option<f64> {
        match &self.session {
            RecorderSession::Capturing { handle, .. } => Some(handle.elapsed_seconds()),
            RecorderSession::Idle => None,
        }
    }

    /// Start capturing; a second start while capturing is a no-op
    pub fn start(&mut self) -> Result<()> {
        if self.is_capturing() {
            warn!("Already recording");
            return Ok(());
        }

        if self.mic.request_microphone() == Permission::Denied {
            return Err(MurmurError::PermissionDenied);
        }

        let handle = self.device.open(&self.preset)?;
        self.session = RecorderSession::Capturing { handle };
        info!("Recording started");
        Ok(())
    }

    /// Finalize the active capture
    ///
    /// Returns `None` when no capture was active. The session is `Idle`
    /// afterwards in every case, including finalize failure.
    pub fn stop(&mut self) -> Result<Option<CapturedClip>> {
        match std::mem::replace(&mut self.session, RecorderSession::Idle) {
            RecorderSession::Idle => {
                warn!("Stop requested with no active recording");
                Ok(None)
            }
            RecorderSession::Capturing { handle } => {
                let captured = handle.finalize()?;
                info!("Recording stopped after {:.2}s", captured.elapsed_seconds);
                Ok(Some(CapturedClip {
                    source: captured.source,
                    elapsed_seconds: captured.elapsed_seconds,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::CapturedAudio;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct FixedMic(Permission);

    impl CapabilityProvider for FixedMic {
        fn request_microphone(&mut self) -> Permission {
            self.0
        }
    }

    struct CountingHandle {
        finalized: Rc<Cell<u32>>,
        fail: bool,
    }

    impl CaptureHandle for CountingHandle {
        fn elapsed_seconds(&self) -> f64 {
            1.5
        }

        fn finalize(self: Box<Self>) -> Result<CapturedAudio> {
            self.finalized.set(self.finalized.get() + 1);
            if self.fail {
                return Err(MurmurError::Capture("finalize failed".into()));
            }
            Ok(CapturedAudio {
                source: PathBuf::from("/tmp/clip.wav"),
                elapsed_seconds: 1.5,
            })
        }
    }

    struct CountingDevice {
        opened: Rc<Cell<u32>>,
        finalized: Rc<Cell<u32>>,
        fail_finalize: bool,
    }

    impl CaptureDevice for CountingDevice {
        fn open(&mut self, _preset: &RecordingPreset) -> Result<Box<dyn CaptureHandle>> {
            self.opened.set(self.opened.get() + 1);
            Ok(Box::new(CountingHandle {
                finalized: Rc::clone(&self.finalized),
                fail: self.fail_finalize,
            }))
        }
    }

    fn recorder(mic: Permission, fail_finalize: bool) -> (Recorder, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let opened = Rc::new(Cell::new(0));
        let finalized = Rc::new(Cell::new(0));
        let device = CountingDevice {
            opened: Rc::clone(&opened),
            finalized: Rc::clone(&finalized),
            fail_finalize,
        };
        let recorder = Recorder::new(
            Box::new(FixedMic(mic)),
            Box::new(device),
            RecordingPreset::high_quality(),
        );
        (recorder, opened, finalized)
    }

    #[test]
    fn test_start_stop_round_trip() {
        let (mut recorder, opened, finalized) = recorder(Permission::Granted, false);
        assert!(!recorder.is_capturing());

        recorder.start().unwrap();
        assert!(recorder.is_capturing());
        assert_eq!(recorder.elapsed_seconds(), Some(1.5));

        let clip = recorder.stop().unwrap().expect("clip expected");
        assert!(!recorder.is_capturing());
        assert_eq!(clip.elapsed_seconds, 1.5);
        assert_eq!(opened.get(), 1);
        assert_eq!(finalized.get(), 1);
    }

    #[test]
    fn test_start_while_capturing_is_guarded() {
        let (mut recorder, opened, _) = recorder(Permission::Granted, false);
        recorder.start().unwrap();
        recorder.start().unwrap();
        assert_eq!(opened.get(), 1, "exactly one capture handle is live");
    }

    #[test]
    fn test_denied_permission_stays_idle() {
        let (mut recorder, opened, _) = recorder(Permission::Denied, false);
        let err = recorder.start().unwrap_err();
        assert!(matches!(err, MurmurError::PermissionDenied));
        assert!(!recorder.is_capturing());
        assert_eq!(opened.get(), 0, "no capture handle allocated on denial");
    }

    #[test]
    fn test_stop_while_idle_is_noop() {
        let (mut recorder, _, finalized) = recorder(Permission::Granted, false);
        assert_eq!(recorder.stop().unwrap(), None);
        assert_eq!(finalized.get(), 0);
    }

    #[test]
    fn test_finalize_failure_still_lands_idle() {
        let (mut recorder, _, _) = recorder(Permission::Granted, true);
        recorder.start().unwrap();
        assert!(recorder.stop().is_err());
        assert!(!recorder.is_capturing());

        // A fresh session can start afterwards.
        recorder.start().unwrap();
        assert!(recorder.is_capturing());
    }
}
