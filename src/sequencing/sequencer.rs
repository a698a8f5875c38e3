//! Sequencer - step-by-step walk through a score
//!
//! The Sequencer runs in the audio thread. It owns the playback position and
//! nothing else: it never touches samples, only answers "which two keys are
//! sounding now" and moves on once a step has been rendered.

use std::sync::Arc;

use super::score::{PlaybackPosition, Score};
use crate::dsp::keys::Key;

/*
State machine:

    Playing(0, 0) ──advance──→ Playing(0, 1) ──→ ... ──→ Playing(0, steps-1)
                                                               │
          ┌────────────────────────────────────────────────────┘
          ↓
    Playing(1, 0) ──→ ... ──→ Playing(bars-1, steps-1)
                                     │
                    loop = false     │     loop = true
                ┌────────────────────┴──────────────────┐
                ↓                                       ↓
            Finished                              Playing(0, 0)

Finished is absorbing: further advance() calls keep it Finished.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Playing(PlaybackPosition),
    Finished,
}

pub struct Sequencer {
    score: Arc<Score>,
    state: SequencerState,
    looping: bool,
}

impl Sequencer {
    pub fn new(score: Arc<Score>, looping: bool) -> Self {
        Self {
            score,
            state: SequencerState::Playing(PlaybackPosition::START),
            looping,
        }
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Current position, or `None` once finished.
    pub fn position(&self) -> Option<PlaybackPosition> {
        match self.state {
            SequencerState::Playing(position) => Some(position),
            SequencerState::Finished => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == SequencerState::Finished
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// `(treble, bass)` keys of the current step, or `None` once finished.
    #[inline]
    pub fn current_keys(&self) -> Option<(Key, Key)> {
        self.position().map(|position| self.score.keys(position))
    }

    /// Move to the next step; call exactly once per rendered step.
    pub fn advance(&mut self) {
        let SequencerState::Playing(mut position) = self.state else {
            return;
        };

        position.step += 1;
        if position.step == self.score.steps_per_bar() {
            position.step = 0;
            position.bar += 1;

            if position.bar == self.score.num_bars() {
                if !self.looping {
                    self.state = SequencerState::Finished;
                    return;
                }
                position.bar = 0;
            }
        }

        self.state = SequencerState::Playing(position);
    }

    /// Rewind to the first step of the first bar
    pub fn reset(&mut self) {
        self.state = SequencerState::Playing(PlaybackPosition::START);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencing::notes::*;
    use crate::sequencing::score::Bar;

    fn score(bars: usize, steps: usize) -> Arc<Score> {
        let bars = (0..bars)
            .map(|_| Bar::new(vec![C4; steps], vec![C3; steps]))
            .collect();
        Arc::new(Score::new(bars).unwrap())
    }

    #[test]
    fn starts_at_origin() {
        let seq = Sequencer::new(score(2, 16), false);
        assert_eq!(seq.position(), Some(PlaybackPosition::START));
        assert_eq!(seq.current_keys(), Some((C4, C3)));
    }

    #[test]
    fn full_bar_moves_to_next_bar() {
        let mut seq = Sequencer::new(score(2, 16), false);
        for _ in 0..16 {
            seq.advance();
        }
        assert_eq!(seq.position(), Some(PlaybackPosition::new(1, 0)));
    }

    #[test]
    fn finishes_after_last_step_and_stays_finished() {
        let mut seq = Sequencer::new(score(2, 16), false);
        for _ in 0..31 {
            seq.advance();
        }
        assert_eq!(seq.position(), Some(PlaybackPosition::new(1, 15)));

        seq.advance();
        assert!(seq.is_finished());
        assert_eq!(seq.current_keys(), None);

        for _ in 0..10 {
            seq.advance();
            assert_eq!(seq.state(), SequencerState::Finished);
        }
    }

    #[test]
    fn looping_wraps_to_origin() {
        let mut seq = Sequencer::new(score(2, 16), true);
        for _ in 0..32 {
            seq.advance();
        }
        assert_eq!(seq.position(), Some(PlaybackPosition::START));
        assert!(!seq.is_finished());
    }

    #[test]
    fn reset_rewinds_finished_sequencer() {
        let mut seq = Sequencer::new(score(1, 2), false);
        seq.advance();
        seq.advance();
        assert!(seq.is_finished());

        seq.reset();
        assert_eq!(seq.position(), Some(PlaybackPosition::START));
    }
}
