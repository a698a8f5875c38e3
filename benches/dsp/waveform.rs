//! Benchmarks for waveform shaping over a wrapped phase sweep.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use duosynth::dsp::keys::{Key, KeyTable};
use duosynth::dsp::oscillator::advance_phase;
use duosynth::dsp::waveform::Waveform;

use crate::BLOCK_SIZES;

fn render(wave: Waveform, increment: f64, phase: &mut f64, out: &mut [f32]) {
    for sample in out.iter_mut() {
        *sample = wave.sample(*phase) as f32;
        *phase = advance_phase(*phase, increment);
    }
}

pub fn bench_waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/waveform");
    let increment = KeyTable::new(44_100.0).phase_increment(Key::new(49).unwrap());

    let shapes = [
        // sin() transcendental per sample
        ("sine", Waveform::Sine),
        // one division
        ("linear", Waveform::Linear),
        // branch + division
        ("triangle", Waveform::Triangle),
        // branch only
        ("pulse", Waveform::square()),
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, wave) in shapes {
            let mut phase = 0.0;
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    render(
                        black_box(wave),
                        black_box(increment),
                        &mut phase,
                        black_box(&mut buffer),
                    );
                })
            });
        }
    }

    group.finish();
}
