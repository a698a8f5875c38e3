use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Shared {
    finished: AtomicBool,
    failed: AtomicBool,
    steps_rendered: AtomicU64,
    dropped_events: AtomicU64,
}

/// Lock-free view of playback progress, shared between the audio thread
/// (writer) and a control thread (reader).
///
/// `finished` only ever goes from false to true; it is published with
/// release ordering after the last frame of the last step is written.
/// `failed` is raised by the device binding when the output stream dies,
/// which ends playback without the score finishing.
#[derive(Debug, Clone, Default)]
pub struct PlaybackStatus {
    shared: Arc<Shared>,
}

impl PlaybackStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.shared.finished.load(Ordering::Acquire)
    }

    /// The output stream reported an error and will not render further.
    pub fn has_failed(&self) -> bool {
        self.shared.failed.load(Ordering::Acquire)
    }

    /// Nothing more will be rendered: the score finished or the stream failed.
    pub fn is_done(&self) -> bool {
        self.is_finished() || self.has_failed()
    }

    /// Called from the stream's error callback.
    pub fn mark_failed(&self) {
        self.shared.failed.store(true, Ordering::Release);
    }

    /// Steps fully rendered so far (keeps counting across loops).
    pub fn steps_rendered(&self) -> u64 {
        self.shared.steps_rendered.load(Ordering::Relaxed)
    }

    /// Progress events the console could not keep up with.
    pub fn dropped_events(&self) -> u64 {
        self.shared.dropped_events.load(Ordering::Relaxed)
    }

    pub(crate) fn mark_finished(&self) {
        self.shared.finished.store(true, Ordering::Release);
    }

    pub(crate) fn record_step(&self) {
        self.shared.steps_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dropped_event(&self) {
        self.shared.dropped_events.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn clear(&self) {
        self.shared.finished.store(false, Ordering::Release);
        self.shared.failed.store(false, Ordering::Release);
        self.shared.steps_rendered.store(0, Ordering::Relaxed);
        self.shared.dropped_events.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let writer = PlaybackStatus::new();
        let reader = writer.clone();
        assert!(!reader.is_finished());

        writer.record_step();
        writer.record_dropped_event();
        writer.mark_finished();

        assert!(reader.is_finished());
        assert_eq!(reader.steps_rendered(), 1);
        assert_eq!(reader.dropped_events(), 1);

        writer.clear();
        assert!(!reader.is_finished());
        assert_eq!(reader.steps_rendered(), 0);
    }

    #[test]
    fn stream_failure_ends_playback() {
        let status = PlaybackStatus::new();
        let handle = status.clone();
        assert!(!status.is_done());

        std::thread::spawn(move || handle.mark_failed())
            .join()
            .unwrap();

        assert!(status.has_failed());
        assert!(!status.is_finished());
        assert!(status.is_done());

        status.clear();
        assert!(!status.is_done());
    }
}
