//! Benchmarks for per-frame DSP primitives.

mod mix;
mod waveform;

pub use mix::bench_mix;
pub use waveform::bench_waveform;
