//! Human-readable playback progress.
//!
//! One line per step, bass staff first, in the order the staves are read:
//!
//! ```text
//! -----------
//! 𝄢:B2  𝄞:--
//! 𝄢:B2  𝄞:--
//! 𝄢:F#3 𝄞:--
//! 𝄢:F#3 𝄞:--
//! ···········
//! 𝄢:B3  𝄞:--
//! ```
//!
//! A full separator precedes every 8th step and a dotted one every 4th.
//! Formatting happens on the console thread, never on the audio thread.

use std::io::{self, Write};

use crate::synth::message::NoteEvent;

pub const BAR_SEPARATOR: &str = "-----------";
pub const BEAT_SEPARATOR: &str = "···········";

/// Separator printed before the step at `step` (0-based within its bar), if any.
pub fn separator(step: usize) -> Option<&'static str> {
    if step % 8 == 0 {
        Some(BAR_SEPARATOR)
    } else if step % 4 == 0 {
        Some(BEAT_SEPARATOR)
    } else {
        None
    }
}

pub fn format_step(event: &NoteEvent) -> String {
    format!(
        "𝄢:{:<3} 𝄞:{:<3}",
        event.bass.to_string(),
        event.treble.to_string()
    )
}

/// Write the separator (if due) and the step line for one event.
pub fn write_event<W: Write>(out: &mut W, event: &NoteEvent) -> io::Result<()> {
    if let Some(line) = separator(event.position.step) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", format_step(event).trim_end())
}
