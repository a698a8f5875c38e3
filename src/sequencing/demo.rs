//! Built-in two-staff piece played by the `duosynth` binary.

use super::notes::*;
use super::score::{Score, ScoreError};
use crate::dsp::keys::Key;

/// Steps per bar in the built-in piece (sixteenth-note grid).
pub const STEPS_PER_BAR: usize = 16;

/// Six bars, `[treble, bass]` each, written a half bar per line.
#[rustfmt::skip]
pub const BARS: [[[Key; STEPS_PER_BAR]; 2]; 6] = [
    [
        [
            REST, REST, REST, REST, REST, REST, REST, REST,
            REST, REST, REST, REST, REST, REST, REST, REST,
        ],
        [
            B2, B2, Fs3, Fs3, B3, B3, Fs3, Fs3,
            G2, G2, D3, D3, G3, G3, D3, D3,
        ],
    ],
    [
        [
            REST, REST, REST, REST, REST, REST, REST, REST,
            REST, REST, REST, REST, A4, D5, E5, Fs5,
        ],
        [
            A2, A2, E3, E3, A3, A3, E3, E3,
            D3, D3, A3, A3, D4, D4, A3, A3,
        ],
    ],
    [
        [
            E5, E5, D5, D5, D5, D5, REST, REST,
            REST, REST, REST, REST, A4, D5, E5, Fs5,
        ],
        [
            B2, B2, Fs3, Fs3, B3, B3, Fs3, Fs3,
            G2, G2, D3, D3, G3, G3, D3, D3,
        ],
    ],
    [
        [
            E5, E5, D5, E5, E5, Fs5, Fs5, Fs5,
            Fs5, Fs5, Fs5, Fs5, A4, D5, E5, Fs5,
        ],
        [
            A2, A2, E3, E3, A3, A3, E3, E3,
            D3, D3, A3, A3, D4, D4, A3, A3,
        ],
    ],
    [
        [
            E5, E5, D5, D5, D5, D5, D5, D5,
            REST, REST, REST, REST, A4, D5, E5, Fs5,
        ],
        [
            B2, B2, Fs3, Fs3, B3, B3, Fs3, Fs3,
            G2, G2, D3, D3, G3, G3, D3, D3,
        ],
    ],
    [
        [
            E5, E5, D5, E5, E5, A5, A5, Fs5,
            Fs5, Fs5, Fs5, Fs5, REST, REST, REST, REST,
        ],
        [
            A2, A2, E3, E3, A3, A3, E3, E3,
            REST, REST, REST, REST, REST, REST, REST, REST,
        ],
    ],
];

pub fn score() -> Result<Score, ScoreError> {
    Score::from_tracks(&BARS)
}
