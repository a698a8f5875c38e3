//! Low-level DSP primitives used by the render loop.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! call once per frame from the audio callback. They intentionally stay focused
//! on the signal-processing math so the renderer can layer on sequencing.

/// Keyboard tuning table.
pub mod keys;
/// Two-voice stereo mixing.
pub mod mix;
/// Phase accumulators.
pub mod oscillator;
/// Waveform shapes.
pub mod waveform;

pub use keys::{Key, KeyTable};
pub use mix::{MixMode, VoiceMixer};
pub use oscillator::{OscillatorBank, Voice};
pub use waveform::{DutyCycle, Waveform};
