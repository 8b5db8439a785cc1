//! Desktop playback device
//!
//! Each opened handle owns its own rodio output stream and sink, so
//! dropping the handle releases the audio device.

use crate::audio::{PlayerDevice, PlayerHandle};
use crate::{MurmurError, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Playback device backed by the default rodio output
#[derive(Default)]
pub struct RodioPlayerDevice;

impl RodioPlayerDevice {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerDevice for RodioPlayerDevice {
    fn open(&mut self, source: &Path) -> Result<Box<dyn PlayerHandle>> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| MurmurError::AudioDevice(format!("No output device available: {}", e)))?;
        let sink = Sink::try_new(&handle)
            .map_err(|e| MurmurError::AudioDevice(format!("Failed to create sink: {}", e)))?;

        let file = File::open(source)
            .map_err(|e| MurmurError::Playback(format!("Failed to open {}: {}", source.display(), e)))?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| MurmurError::Playback(format!("Failed to decode {}: {}", source.display(), e)))?;

        // The sink starts in the playing state; hold it paused until the
        // session asks for playback.
        sink.pause();
        sink.append(decoder);

        info!("Loaded {} for playback", source.display());

        Ok(Box::new(RodioPlayerHandle {
            sink,
            _stream: stream,
        }))
    }
}

struct RodioPlayerHandle {
    sink: Sink,
    _stream: OutputStream,
}

impl PlayerHandle for RodioPlayerHandle {
    fn play(&mut self) -> Result<()> {
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn position_seconds(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }
}
