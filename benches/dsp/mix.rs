//! Benchmarks for stereo frame mixing from a running oscillator bank.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use duosynth::dsp::mix::{MixMode, VoiceMixer};
use duosynth::dsp::oscillator::{OscillatorBank, Voice};
use duosynth::dsp::waveform::Waveform;

use crate::BLOCK_SIZES;

fn render(mixer: &VoiceMixer, bank: &mut OscillatorBank, out: &mut [f32]) {
    for frame in out.chunks_exact_mut(2) {
        let (left, right) = mixer.render_bank(bank);
        frame[0] = left;
        frame[1] = right;
        bank.tick();
    }
}

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * 2];

        for (name, mode) in [("independent", MixMode::Independent), ("merged", MixMode::Merged)] {
            let mixer = VoiceMixer::new(mode, Waveform::Sine, Waveform::Triangle);
            let mut bank = OscillatorBank::new();
            bank.voice_mut(Voice::Treble).retune(0.0627);
            bank.voice_mut(Voice::Bass).retune(0.0157);

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    render(black_box(&mixer), &mut bank, black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}
