pub mod demo;
pub mod notes;
pub mod score;
pub mod sequencer;

pub use score::{Bar, PlaybackPosition, Score, ScoreError};
pub use sequencer::{Sequencer, SequencerState};
