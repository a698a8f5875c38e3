//! Two-voice stereo mixing.

use super::oscillator::{OscillatorBank, Voice};
use super::waveform::Waveform;

/*
Voice Mixing
============

The player has exactly two voices, treble and bass, and a stereo output.
There are two ways to lay them out:

  INDEPENDENT   left  = treble
                right = bass

                Each channel carries one staff. Useful for hearing the
                two lines separately on headphones.

  MERGED        left = right = (treble + bass) / 2

                Both channels carry the equal-weight average of the two
                voices, i.e. a 50/50 linear crossfade. Because the weights
                sum to 1.0, two full-scale voices cannot exceed full scale.

Each voice runs through its own waveform before mixing, so the treble can be
a pulse while the bass is a sine. Levels are computed in f64 and narrowed to
the f32 sample format only at the very end.

A voice whose oscillator is not gated (it is resting) contributes 0.0,
regardless of the shape: a pulse sitting at phase 0 would otherwise hold +1.
*/

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixMode {
    /// Treble on the left channel, bass on the right
    #[default]
    Independent,
    /// Both channels carry the average of both voices
    Merged,
}

impl MixMode {
    pub fn from_independent(channels_independent: bool) -> Self {
        if channels_independent {
            MixMode::Independent
        } else {
            MixMode::Merged
        }
    }
}

/// Equal-weight average of two levels.
#[inline]
pub fn average(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceMixer {
    mode: MixMode,
    treble: Waveform,
    bass: Waveform,
}

impl VoiceMixer {
    pub fn new(mode: MixMode, treble: Waveform, bass: Waveform) -> Self {
        Self { mode, treble, bass }
    }

    pub fn mode(&self) -> MixMode {
        self.mode
    }

    pub fn waveform(&self, voice: Voice) -> Waveform {
        match voice {
            Voice::Treble => self.treble,
            Voice::Bass => self.bass,
        }
    }

    /// Lay out two already-shaped voice levels as a `(left, right)` frame.
    #[inline]
    pub fn mix(&self, treble: f64, bass: f64) -> (f32, f32) {
        match self.mode {
            MixMode::Independent => (treble as f32, bass as f32),
            MixMode::Merged => {
                let merged = average(treble, bass) as f32;
                (merged, merged)
            }
        }
    }

    /// Shape both phases and mix them into one stereo frame.
    #[inline]
    pub fn render(&self, treble_phase: f64, bass_phase: f64) -> (f32, f32) {
        self.mix(self.treble.sample(treble_phase), self.bass.sample(bass_phase))
    }

    /// Render the bank's current state, silencing voices that are resting.
    #[inline]
    pub fn render_bank(&self, bank: &OscillatorBank) -> (f32, f32) {
        let treble = bank.voice(Voice::Treble);
        let bass = bank.voice(Voice::Bass);

        let treble_level = if treble.is_gated() {
            self.treble.sample(treble.phase())
        } else {
            0.0
        };
        let bass_level = if bass.is_gated() {
            self.bass.sample(bass.phase())
        } else {
            0.0
        };

        self.mix(treble_level, bass_level)
    }
}

impl Default for VoiceMixer {
    fn default() -> Self {
        Self::new(MixMode::Independent, Waveform::Sine, Waveform::Sine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn independent_keeps_voices_apart() {
        let wave_a = Waveform::Sine;
        let wave_b = Waveform::Triangle;
        let mixer = VoiceMixer::new(MixMode::Independent, wave_a, wave_b);

        let (left, right) = mixer.render(PI / 2.0, PI / 2.0);

        assert_eq!(left, wave_a.sample(PI / 2.0) as f32);
        assert_eq!(right, wave_b.sample(PI / 2.0) as f32);
    }

    #[test]
    fn merged_averages_into_both_channels() {
        let wave_a = Waveform::Sine;
        let wave_b = Waveform::square();
        let mixer = VoiceMixer::new(MixMode::Merged, wave_a, wave_b);

        let phase_a = 0.7;
        let phase_b = 4.0;
        let expected = ((wave_a.sample(phase_a) + wave_b.sample(phase_b)) / 2.0) as f32;

        let (left, right) = mixer.render(phase_a, phase_b);
        assert_eq!(left, expected);
        assert_eq!(right, expected);
    }

    #[test]
    fn merged_full_scale_does_not_clip() {
        let mixer = VoiceMixer::new(MixMode::Merged, Waveform::square(), Waveform::square());
        assert_eq!(mixer.render(0.0, 0.0), (1.0, 1.0));
    }

    #[test]
    fn resting_voice_is_silent() {
        let mixer = VoiceMixer::new(MixMode::Independent, Waveform::square(), Waveform::Sine);
        let mut bank = OscillatorBank::new();
        bank.voice_mut(Voice::Treble).rest();
        bank.voice_mut(Voice::Bass).retune(0.1);
        bank.tick();

        let (left, right) = mixer.render_bank(&bank);
        assert_eq!(left, 0.0);
        assert_eq!(right, (0.1f64).sin() as f32);
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(MixMode::from_independent(true), MixMode::Independent);
        assert_eq!(MixMode::from_independent(false), MixMode::Merged);
    }
}
