// Purpose: Render loop, and everything it shares with other threads
// This layer sits above the dsp primitives and the sequencer

pub mod message;
pub mod renderer;
pub mod status;

pub use message::{EventSink, NoteEvent, NullSink};
pub use renderer::Renderer;
pub use status::PlaybackStatus;
