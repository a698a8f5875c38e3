use std::f64::consts::TAU;

/*
Phase Accumulation
==================

Each voice keeps a running angle. Every sample it is advanced by the key's
phase increment, and once it reaches a full turn it wraps back to zero:

    phase' = phase + increment
    if phase' >= 2π { phase' = 0 }

A single wrap per sample is enough because the increment is always below
2π: the highest key (C8, ~4186 Hz) stays well under any supported sample
rate, and the configuration layer rejects sample rates where it would not.

Wrapping to exactly 0 (instead of subtracting 2π) drops the fractional
overshoot, which shows up as a slight per-cycle flattening of the pitch.

Note changes
------------
Switching from one pitched key to another does NOT reset the phase; the new
key continues from whatever angle the previous one reached. At sharp
transitions this can click; that is the expected sound of this player.

A rest gates the voice to silence and stops the accumulator, but the angle
it stopped at is held. Only when a rest step follows another rest step does
the voice rewind to phase 0:

    A4 | -- | A4        second A4 resumes from the held angle
    A4 | -- | -- | A4   second A4 starts at 0, like the first note of a piece
*/

/// Which of the two voices an oscillator belongs to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    /// Upper staff, channel A (left in independent mode)
    Treble = 0,
    /// Lower staff, channel B (right in independent mode)
    Bass = 1,
}

/// Advance `phase` by `increment`, wrapping once into `[0, 2π)`.
///
/// Precondition: `0 <= increment < 2π`.
#[inline]
pub fn advance_phase(phase: f64, increment: f64) -> f64 {
    let next = phase + increment;
    if next >= TAU {
        0.0
    } else {
        next
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseAccumulator {
    phase: f64,
    increment: f64,
    gate: bool,
}

impl PhaseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Whether the voice is sounding (false during rests).
    #[inline]
    pub fn is_gated(&self) -> bool {
        self.gate
    }

    /// Start a pitched note, keeping the current phase.
    pub fn retune(&mut self, increment: f64) {
        debug_assert!((0.0..TAU).contains(&increment));
        self.increment = increment;
        self.gate = true;
    }

    /// Start a rest step: silence the voice and hold its phase.
    ///
    /// If the previous step was already a rest, the phase rewinds to 0.
    pub fn rest(&mut self) {
        if !self.gate {
            self.phase = 0.0;
        }
        self.increment = 0.0;
        self.gate = false;
    }

    #[inline]
    pub fn tick(&mut self) {
        self.phase = advance_phase(self.phase, self.increment);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One phase accumulator per voice, always advanced together.
#[derive(Debug, Clone, Default)]
pub struct OscillatorBank {
    voices: [PhaseAccumulator; 2],
}

impl OscillatorBank {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn voice(&self, voice: Voice) -> &PhaseAccumulator {
        &self.voices[voice as usize]
    }

    #[inline]
    pub fn voice_mut(&mut self, voice: Voice) -> &mut PhaseAccumulator {
        &mut self.voices[voice as usize]
    }

    /// Current `(treble, bass)` phases.
    #[inline]
    pub fn phases(&self) -> (f64, f64) {
        (self.voices[0].phase, self.voices[1].phase)
    }

    /// Advance both voices by one sample.
    #[inline]
    pub fn tick(&mut self) {
        for voice in &mut self.voices {
            voice.tick();
        }
    }

    /// Back to playback-start state: both voices silent at phase 0.
    pub fn reset(&mut self) {
        for voice in &mut self.voices {
            voice.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_range() {
        let mut acc = PhaseAccumulator::new();
        acc.retune(0.1);

        let mut wrapped = false;
        for _ in 0..100 {
            let before = acc.phase();
            acc.tick();
            assert!(acc.phase() >= 0.0 && acc.phase() < TAU);
            if acc.phase() < before {
                wrapped = true;
            }
        }
        // 100 * 0.1 = 10 rad, so at least one wrap must have happened
        assert!(wrapped);
    }

    #[test]
    fn wrap_lands_on_zero() {
        assert_eq!(advance_phase(TAU - 0.05, 0.1), 0.0);
        assert_eq!(advance_phase(1.0, 0.5), 1.5);
    }

    #[test]
    fn retune_keeps_phase() {
        let mut acc = PhaseAccumulator::new();
        acc.retune(0.3);
        acc.tick();
        acc.tick();
        let phase = acc.phase();

        acc.retune(0.7);
        assert_eq!(acc.phase(), phase);
        assert!(acc.is_gated());
    }

    #[test]
    fn rest_holds_phase() {
        let mut acc = PhaseAccumulator::new();
        acc.retune(0.3);
        acc.tick();
        acc.rest();
        assert!((acc.phase() - 0.3).abs() < 1e-12);
        assert!(!acc.is_gated());

        acc.tick();
        assert!((acc.phase() - 0.3).abs() < 1e-12);

        acc.retune(0.5);
        assert!((acc.phase() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn second_rest_rewinds() {
        let mut acc = PhaseAccumulator::new();
        acc.retune(0.3);
        acc.tick();
        acc.rest();
        acc.rest();
        assert_eq!(acc.phase(), 0.0);
        assert!(!acc.is_gated());
    }

    #[test]
    fn bank_voices_are_independent() {
        let mut bank = OscillatorBank::new();
        bank.voice_mut(Voice::Treble).retune(0.2);
        bank.voice_mut(Voice::Bass).retune(0.05);
        bank.tick();
        bank.tick();

        let (treble, bass) = bank.phases();
        assert!((treble - 0.4).abs() < 1e-12);
        assert!((bass - 0.1).abs() < 1e-12);

        bank.reset();
        assert_eq!(bank.phases(), (0.0, 0.0));
    }
}
