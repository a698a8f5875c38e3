#[cfg(feature = "rtrb")]
use rtrb::Producer;

use crate::dsp::keys::Key;
use crate::sequencing::score::PlaybackPosition;

/// Emitted by the renderer when a step starts sounding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NoteEvent {
    pub position: PlaybackPosition,
    pub treble: Key,
    pub bass: Key,
}

/// Non-blocking outlet for note events leaving the audio thread.
pub trait EventSink {
    /// Queue an event. Returns `false` if it had to be dropped.
    fn try_send(&mut self, event: NoteEvent) -> bool;
}

/// Sink that discards everything (headless rendering, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn try_send(&mut self, _event: NoteEvent) -> bool {
        true
    }
}

#[cfg(feature = "rtrb")]
impl EventSink for Producer<NoteEvent> {
    fn try_send(&mut self, event: NoteEvent) -> bool {
        self.push(event).is_ok()
    }
}
