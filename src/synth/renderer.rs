use std::sync::Arc;

use crate::config::{AudioConfig, ConfigError, PlaybackConfig};
use crate::dsp::keys::{Key, KeyTable};
use crate::dsp::mix::VoiceMixer;
use crate::dsp::oscillator::{OscillatorBank, Voice};
use crate::sequencing::score::Score;
use crate::sequencing::sequencer::Sequencer;
use crate::synth::message::{EventSink, NoteEvent, NullSink};
use crate::synth::status::PlaybackStatus;
use crate::CHANNELS;

/*
Render Loop
===========

The device asks for N interleaved stereo frames at a time. The score is
measured in steps of `samples_per_step` frames. The two sizes are usually
negotiated to be equal, but nothing here relies on it: a cursor counts the
frames still owed to the current step and carries over between calls.

    callback 1            callback 2            callback 3
    |<------ N ------>|   |<------ N ------>|   |<------ N ------>|
    |<--- step 0 --->|<--- step 1 --->|<--- step 2 --->|<-- ...

For every frame:

  1. No step latched? Ask the sequencer for the next (treble, bass) keys,
     retune both oscillators (rests are gated; a rest after a rest also
     rewinds the voice to phase 0), and
     reload the cursor with `samples_per_step`. If the sequencer is
     finished, write silence instead.
  2. Shape the current phases through the mixer and write (left, right).
  3. Advance both phase accumulators.
  4. Decrement the cursor. When it hits zero, the step is complete: call
     `Sequencer::advance()` exactly once.

Realtime constraints: no allocation, no locks, no blocking I/O. The only
things leaving this thread are a note event pushed into a lock-free sink and
a few atomic counters in `PlaybackStatus`.
*/

pub struct Renderer<S: EventSink = NullSink> {
    keys: KeyTable,
    sequencer: Sequencer,
    bank: OscillatorBank,
    mixer: VoiceMixer,
    samples_per_step: usize,
    /// Frames still owed to the latched step; 0 means none latched
    frames_left: usize,
    sink: S,
    status: PlaybackStatus,
}

impl Renderer<NullSink> {
    pub fn new(
        score: Arc<Score>,
        playback: &PlaybackConfig,
        audio: &AudioConfig,
    ) -> Result<Self, ConfigError> {
        Self::with_sink(score, playback, audio, NullSink)
    }
}

impl<S: EventSink> Renderer<S> {
    /// Build a renderer that reports each started step to `sink`.
    pub fn with_sink(
        score: Arc<Score>,
        playback: &PlaybackConfig,
        audio: &AudioConfig,
        sink: S,
    ) -> Result<Self, ConfigError> {
        audio.validate()?;

        let samples_per_step = audio.samples_per_step();
        tracing::debug!(
            sample_rate = audio.sample_rate,
            samples_per_step,
            bars = score.num_bars(),
            steps_per_bar = score.steps_per_bar(),
            mode = ?playback.mix_mode(),
            treble = %playback.treble_waveform,
            bass = %playback.bass_waveform,
            looping = playback.looping,
            "renderer configured"
        );

        Ok(Self {
            keys: KeyTable::new(audio.sample_rate as f64),
            sequencer: Sequencer::new(score, playback.looping),
            bank: OscillatorBank::new(),
            mixer: playback.mixer(),
            samples_per_step,
            frames_left: 0,
            sink,
            status: PlaybackStatus::new(),
        })
    }

    /// Handle for a control thread to watch progress.
    pub fn status(&self) -> PlaybackStatus {
        self.status.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.sequencer.is_finished()
    }

    pub fn samples_per_step(&self) -> usize {
        self.samples_per_step
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn oscillators(&self) -> &OscillatorBank {
        &self.bank
    }

    pub fn key_table(&self) -> &KeyTable {
        &self.keys
    }

    /// Fill an interleaved stereo buffer completely.
    ///
    /// Frames past the end of the score are written as silence.
    pub fn render(&mut self, out: &mut [f32]) {
        debug_assert_eq!(out.len() % CHANNELS, 0);

        let mut frames = out.chunks_exact_mut(CHANNELS);
        for frame in &mut frames {
            let (left, right) = self.next_frame();
            frame[0] = left;
            frame[1] = right;
        }
        frames.into_remainder().fill(0.0);
    }

    /// Rewind to the top of the score with fresh oscillators.
    pub fn restart(&mut self) {
        self.sequencer.reset();
        self.bank.reset();
        self.frames_left = 0;
        self.status.clear();
    }

    #[inline]
    fn next_frame(&mut self) -> (f32, f32) {
        if self.frames_left == 0 && !self.begin_step() {
            return (0.0, 0.0);
        }

        let frame = self.mixer.render_bank(&self.bank);
        self.bank.tick();

        self.frames_left -= 1;
        if self.frames_left == 0 {
            self.finish_step();
        }

        frame
    }

    /// Latch the sequencer's current keys. Returns false once the score is over.
    fn begin_step(&mut self) -> bool {
        let Some(position) = self.sequencer.position() else {
            return false;
        };
        let (treble, bass) = self.sequencer.score().keys(position);

        self.latch(Voice::Treble, treble);
        self.latch(Voice::Bass, bass);
        self.frames_left = self.samples_per_step;

        let event = NoteEvent {
            position,
            treble,
            bass,
        };
        if !self.sink.try_send(event) {
            self.status.record_dropped_event();
        }

        true
    }

    fn latch(&mut self, voice: Voice, key: Key) {
        let increment = self.keys.phase_increment(key);
        let oscillator = self.bank.voice_mut(voice);
        if key.is_rest() {
            oscillator.rest();
        } else {
            oscillator.retune(increment);
        }
    }

    fn finish_step(&mut self) {
        self.sequencer.advance();
        self.status.record_step();
        if self.sequencer.is_finished() {
            self.status.mark_finished();
        }
    }
}
