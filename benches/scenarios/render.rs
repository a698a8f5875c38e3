//! Benchmarks for complete renderer callbacks.
//!
//! The score loops so every iteration renders real notes rather than the
//! silence that follows the last bar.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use duosynth::config::{AudioConfig, PlaybackConfig};
use duosynth::dsp::waveform::Waveform;
use duosynth::sequencing::demo;
use duosynth::synth::Renderer;
use duosynth::CHANNELS;

use crate::BLOCK_SIZES;

fn renderer(playback: PlaybackConfig) -> Renderer {
    let score = Arc::new(demo::score().expect("demo score"));
    Renderer::new(score, &playback, &AudioConfig::default()).expect("default audio config")
}

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/render");

    let independent = PlaybackConfig {
        looping: true,
        ..PlaybackConfig::default()
    };
    let merged_pulse = PlaybackConfig {
        channels_independent: false,
        looping: true,
        treble_waveform: Waveform::pulse(0.25).expect("valid duty"),
        bass_waveform: Waveform::Triangle,
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * CHANNELS];

        let mut r = renderer(independent);
        group.bench_with_input(BenchmarkId::new("independent_sine", size), &size, |b, _| {
            b.iter(|| r.render(black_box(&mut buffer)))
        });

        let mut r = renderer(merged_pulse);
        group.bench_with_input(BenchmarkId::new("merged_pulse", size), &size, |b, _| {
            b.iter(|| r.render(black_box(&mut buffer)))
        });
    }

    // One callback per score step, the size the device is asked for
    let step = AudioConfig::default().samples_per_step();
    let mut buffer = vec![0.0f32; step * CHANNELS];
    let mut r = renderer(independent);
    group.bench_function("full_step", |b| b.iter(|| r.render(black_box(&mut buffer))));

    group.finish();
}
