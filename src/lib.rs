pub mod config;
pub mod dsp;
pub mod io;
pub mod sequencing; // Scores and playback position
pub mod synth; // Render loop

/// Default output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
/// Default tempo in score steps per second.
pub const NOTES_PER_SECOND: u32 = 6;
/// Interleaved output channels (left = treble, right = bass).
pub const CHANNELS: usize = 2;
