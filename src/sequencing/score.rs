use std::fmt;

use crate::dsp::keys::Key;
use crate::dsp::oscillator::Voice;

/// Where playback is inside a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlaybackPosition {
    pub bar: usize,
    pub step: usize,
}

impl PlaybackPosition {
    pub const START: PlaybackPosition = PlaybackPosition { bar: 0, step: 0 };

    pub fn new(bar: usize, step: usize) -> Self {
        Self { bar, step }
    }
}

/// One bar: a treble track and a bass track, one key per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub treble: Vec<Key>,
    pub bass: Vec<Key>,
}

impl Bar {
    pub fn new(treble: impl Into<Vec<Key>>, bass: impl Into<Vec<Key>>) -> Self {
        Self {
            treble: treble.into(),
            bass: bass.into(),
        }
    }

    pub fn track(&self, voice: Voice) -> &[Key] {
        match voice {
            Voice::Treble => &self.treble,
            Voice::Bass => &self.bass,
        }
    }
}

/// A validated, immutable two-staff score.
///
/// Every bar has the same number of steps in both tracks, so any
/// `PlaybackPosition` produced by the sequencer indexes it safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    bars: Vec<Bar>,
    steps_per_bar: usize,
}

impl Score {
    pub fn new(bars: Vec<Bar>) -> Result<Self, ScoreError> {
        let first = bars.first().ok_or(ScoreError::Empty)?;
        let steps_per_bar = first.treble.len();

        for (index, bar) in bars.iter().enumerate() {
            if bar.treble.len() != bar.bass.len() {
                return Err(ScoreError::TrackLengthMismatch {
                    bar: index,
                    treble: bar.treble.len(),
                    bass: bar.bass.len(),
                });
            }
            if bar.treble.is_empty() {
                return Err(ScoreError::EmptyBar { bar: index });
            }
            if bar.treble.len() != steps_per_bar {
                return Err(ScoreError::BarLengthMismatch {
                    bar: index,
                    expected: steps_per_bar,
                    actual: bar.treble.len(),
                });
            }
        }

        tracing::debug!(bars = bars.len(), steps_per_bar, "score validated");

        Ok(Self {
            bars,
            steps_per_bar,
        })
    }

    /// Build from fixed-size `[treble, bass]` arrays, the shape score literals use.
    pub fn from_tracks<const STEPS: usize>(
        bars: &[[[Key; STEPS]; 2]],
    ) -> Result<Self, ScoreError> {
        Self::new(
            bars.iter()
                .map(|[treble, bass]| Bar::new(treble.to_vec(), bass.to_vec()))
                .collect(),
        )
    }

    pub fn num_bars(&self) -> usize {
        self.bars.len()
    }

    pub fn steps_per_bar(&self) -> usize {
        self.steps_per_bar
    }

    pub fn total_steps(&self) -> usize {
        self.bars.len() * self.steps_per_bar
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// `(treble, bass)` keys at `position`.
    ///
    /// Panics if the position lies outside the score.
    #[inline]
    pub fn keys(&self, position: PlaybackPosition) -> (Key, Key) {
        let bar = &self.bars[position.bar];
        (bar.treble[position.step], bar.bass[position.step])
    }

    /// Highest key used anywhere in the score, if any note is pitched.
    pub fn highest_key(&self) -> Option<Key> {
        self.bars
            .iter()
            .flat_map(|bar| bar.treble.iter().chain(bar.bass.iter()))
            .copied()
            .filter(|key| !key.is_rest())
            .max()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Score has no bars at all
    Empty,
    /// A bar with zero steps
    EmptyBar { bar: usize },
    /// Treble and bass tracks of one bar differ in length
    TrackLengthMismatch {
        bar: usize,
        treble: usize,
        bass: usize,
    },
    /// A bar's step count differs from the first bar's
    BarLengthMismatch {
        bar: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Empty => write!(f, "Score contains no bars"),
            ScoreError::EmptyBar { bar } => write!(f, "Bar {} contains no steps", bar),
            ScoreError::TrackLengthMismatch { bar, treble, bass } => write!(
                f,
                "Bar {}: treble has {} steps but bass has {}",
                bar, treble, bass
            ),
            ScoreError::BarLengthMismatch {
                bar,
                expected,
                actual,
            } => write!(
                f,
                "Bar {} has {} steps, expected {} like the first bar",
                bar, actual, expected
            ),
        }
    }
}

impl std::error::Error for ScoreError {}
