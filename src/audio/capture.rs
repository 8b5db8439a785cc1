//! Desktop capture device
//!
//! Records from the default cpal input device into a uniquely-named
//! temporary WAV file. The capture runs at the hardware's native stream
//! config; duration is derived from the number of samples written.

use crate::audio::{
    CapabilityProvider, CapturedAudio, CaptureDevice, CaptureHandle, Permission, RecordingPreset,
};
use crate::{MurmurError, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, Stream};
use hound::WavWriter;
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

type WavWriterHandle = Arc<Mutex<Option<WavWriter<BufWriter<File>>>>>;

/// Microphone capability backed by cpal device discovery
///
/// Desktop hosts have no permission prompt; the capability is granted
/// exactly when an input device is present.
#[derive(Default)]
pub struct CpalMicrophone;

impl CapabilityProvider for CpalMicrophone {
    fn request_microphone(&mut self) -> Permission {
        if cpal::default_host().default_input_device().is_some() {
            Permission::Granted
        } else {
            warn!("No input device available, microphone permission denied");
            Permission::Denied
        }
    }
}

/// Capture device writing WAV files into a temp directory
pub struct CpalCaptureDevice {
    temp_dir: PathBuf,
}

impl CpalCaptureDevice {
    pub fn new() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
        }
    }
}

impl Default for CpalCaptureDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureDevice for CpalCaptureDevice {
    fn open(&mut self, _preset: &RecordingPreset) -> Result<Box<dyn CaptureHandle>> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or_else(|| MurmurError::AudioDevice("No input device available".into()))?;

        info!(
            "Using input device: {}",
            device.name().unwrap_or_else(|_| "Unknown".to_string())
        );

        let config = device.default_input_config().map_err(|e| {
            MurmurError::AudioDevice(format!("Failed to get input config: {}", e))
        })?;

        let spec = hound::WavSpec {
            channels: config.channels() as _,
            sample_rate: config.sample_rate().0 as _,
            bits_per_sample: (config.sample_format().sample_size() * 8) as _,
            sample_format: if config.sample_format().is_float() {
                hound::SampleFormat::Float
            } else {
                hound::SampleFormat::Int
            },
        };

        let path = self
            .temp_dir
            .join(format!("murmur-capture-{}.wav", uuid::Uuid::new_v4()));
        let writer = WavWriter::create(&path, spec)
            .map_err(|e| MurmurError::Capture(format!("Failed to create WAV file: {}", e)))?;
        let writer: WavWriterHandle = Arc::new(Mutex::new(Some(writer)));

        let sample_rate = config.sample_rate().0;
        let channels = config.channels();
        let samples_written = Arc::new(Mutex::new(0u64));

        let writer_clone = Arc::clone(&writer);
        let samples_clone = Arc::clone(&samples_written);
        let err_fn = |err| {
            tracing::error!("Audio input stream error: {}", err);
        };

        let stream = match config.sample_format() {
            cpal::SampleFormat::I8 => device.build_input_stream(
                &config.into(),
                move |data, _: &_| write_input_data::<i8, i8>(data, &writer_clone, &samples_clone),
                err_fn,
                None,
            ),
            cpal::SampleFormat::I16 => device.build_input_stream(
                &config.into(),
                move |data, _: &_| {
                    write_input_data::<i16, i16>(data, &writer_clone, &samples_clone)
                },
                err_fn,
                None,
            ),
            cpal::SampleFormat::I32 => device.build_input_stream(
                &config.into(),
                move |data, _: &_| {
                    write_input_data::<i32, i32>(data, &writer_clone, &samples_clone)
                },
                err_fn,
                None,
            ),
            cpal::SampleFormat::F32 => device.build_input_stream(
                &config.into(),
                move |data, _: &_| {
                    write_input_data::<f32, f32>(data, &writer_clone, &samples_clone)
                },
                err_fn,
                None,
            ),
            sample_format => {
                return Err(MurmurError::AudioDevice(format!(
                    "Unsupported sample format '{}'",
                    sample_format
                )))
            }
        }
        .map_err(|e| MurmurError::AudioDevice(format!("Failed to build input stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| MurmurError::AudioDevice(format!("Failed to start input stream: {}", e)))?;

        info!("Started audio capture to {}", path.display());

        Ok(Box::new(CpalCaptureHandle {
            stream: Some(stream),
            writer,
            samples_written,
            sample_rate,
            channels,
            path,
        }))
    }
}

struct CpalCaptureHandle {
    stream: Option<Stream>,
    writer: WavWriterHandle,
    samples_written: Arc<Mutex<u64>>,
    sample_rate: u32,
    channels: u16,
    path: PathBuf,
}

impl CaptureHandle for CpalCaptureHandle {
    fn elapsed_seconds(&self) -> f64 {
        let samples = *self.samples_written.lock();
        samples as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    fn finalize(mut self: Box<Self>) -> Result<CapturedAudio> {
        // Stop the stream before closing the writer so no late callbacks
        // race the finalize.
        drop(self.stream.take());

        let elapsed_seconds = self.elapsed_seconds();
        let writer = self
            .writer
            .lock()
            .take()
            .ok_or_else(|| MurmurError::Capture("Capture already finalized".into()))?;
        writer
            .finalize()
            .map_err(|e| MurmurError::Capture(format!("Failed to finalize WAV file: {}", e)))?;

        info!(
            "Stopped audio capture: {:.2}s written to {}",
            elapsed_seconds,
            self.path.display()
        );

        Ok(CapturedAudio {
            source: self.path.clone(),
            elapsed_seconds,
        })
    }
}

fn write_input_data<T, U>(input: &[T], writer: &WavWriterHandle, samples_written: &Arc<Mutex<u64>>)
where
    T: Sample,
    U: Sample + hound::Sample + FromSample<T>,
{
    if let Some(mut guard) = writer.try_lock() {
        if let Some(writer) = guard.as_mut() {
            let mut count = 0u64;
            for &sample in input.iter() {
                let sample: U = U::from_sample(sample);
                let _ = writer.write_sample(sample);
                count += 1;
            }
            *samples_written.lock() += count;
        }
    }
}
