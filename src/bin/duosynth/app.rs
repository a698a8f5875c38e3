//! Player - device binding and process lifecycle
//!
//! The only code that touches the audio device. It opens a cpal stream,
//! moves a `Renderer` into the callback, and waits for the score to finish.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, Device, SampleRate, StreamConfig, SupportedBufferSize};
use rtrb::RingBuffer;

use duosynth::{
    config::{AudioConfig, PlaybackConfig},
    sequencing::Score,
    synth::{NoteEvent, Renderer},
    CHANNELS,
};

use super::console;

/// Progress events buffered between the audio and console threads
const EVENT_QUEUE_CAPACITY: usize = 256;

/// How often the control thread checks for the end of the score
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Player {
    score: Arc<Score>,
    playback: PlaybackConfig,
    audio: AudioConfig,
}

impl Player {
    pub fn new(score: Score, playback: PlaybackConfig, audio: AudioConfig) -> Self {
        Self {
            score: Arc::new(score),
            playback,
            audio,
        }
    }

    /// Play the score to the end (forever when looping), then release the device.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;

        let frames_per_step = self.audio.samples_per_step();
        let config = StreamConfig {
            channels: CHANNELS as cpal::ChannelCount,
            sample_rate: SampleRate(self.audio.sample_rate),
            buffer_size: negotiate_buffer_size(&device, frames_per_step as u32),
        };

        tracing::info!(
            device = %device.name().unwrap_or_else(|_| "unknown".into()),
            sample_rate = self.audio.sample_rate,
            frames_per_step,
            buffer = ?config.buffer_size,
            "opening output stream"
        );
        tracing::info!(
            bars = self.score.num_bars(),
            steps_per_bar = self.score.steps_per_bar(),
            independent = self.playback.channels_independent,
            looping = self.playback.looping,
            treble = %self.playback.treble_waveform,
            bass = %self.playback.bass_waveform,
            "playing"
        );

        let (tx, rx) = RingBuffer::<NoteEvent>::new(EVENT_QUEUE_CAPACITY);
        let mut renderer = Renderer::with_sink(self.score.clone(), &self.playback, &self.audio, tx)
            .wrap_err("failed to configure renderer")?;
        let status = renderer.status();
        let stream_status = status.clone();

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| renderer.render(data),
                move |err| {
                    tracing::error!("Audio stream error: {}", err);
                    stream_status.mark_failed();
                },
                None,
            )
            .wrap_err("failed to open output stream")?;

        let printer = console::spawn(rx, status.clone())?;

        stream.play().wrap_err("failed to start output stream")?;

        while !status.is_done() {
            thread::sleep(POLL_INTERVAL);
        }

        if let Err(err) = stream.pause() {
            tracing::warn!("failed to pause output stream: {}", err);
        }
        drop(stream);

        if printer.join().is_err() {
            tracing::warn!("console thread panicked");
        }

        if status.has_failed() {
            return Err(eyre!(
                "output stream failed after {} steps",
                status.steps_rendered()
            ));
        }

        let dropped = status.dropped_events();
        if dropped > 0 {
            tracing::warn!(dropped, "console fell behind; some progress lines were skipped");
        }
        tracing::info!(steps = status.steps_rendered(), "playback finished");

        Ok(())
    }
}

/// Ask for one score step per callback when the device allows it.
///
/// Otherwise fall back to the device default; the renderer keeps step timing
/// exact regardless of the callback size.
fn negotiate_buffer_size(device: &Device, frames: u32) -> BufferSize {
    let supported = match device.default_output_config() {
        Ok(supported) => supported,
        Err(err) => {
            tracing::warn!("could not query output config: {}", err);
            return BufferSize::Default;
        }
    };

    match supported.buffer_size() {
        SupportedBufferSize::Range { min, max } if (*min..=*max).contains(&frames) => {
            BufferSize::Fixed(frames)
        }
        SupportedBufferSize::Range { min, max } => {
            tracing::warn!(
                frames,
                min = *min,
                max = *max,
                "device cannot buffer one step per callback; using its default size"
            );
            BufferSize::Default
        }
        SupportedBufferSize::Unknown => {
            tracing::warn!(frames, "device does not report buffer sizes; using its default size");
            BufferSize::Default
        }
    }
}
