//! Console thread - prints progress lines popped off the note queue

use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use rtrb::Consumer;

use duosynth::io::console::write_event;
use duosynth::synth::{NoteEvent, PlaybackStatus};

/// How long the console thread naps when the queue is empty
const IDLE_INTERVAL: Duration = Duration::from_millis(10);

/// Start printing events until playback ends and the queue is drained.
pub fn spawn(mut rx: Consumer<NoteEvent>, status: PlaybackStatus) -> EyreResult<JoinHandle<()>> {
    thread::Builder::new()
        .name("console".into())
        .spawn(move || {
            let stdout = io::stdout();
            loop {
                let mut printed = false;
                while let Ok(event) = rx.pop() {
                    let mut out = stdout.lock();
                    if let Err(err) = write_event(&mut out, &event).and_then(|_| out.flush()) {
                        tracing::warn!("console output failed: {}", err);
                        return;
                    }
                    printed = true;
                }

                if status.is_done() && rx.is_empty() {
                    break;
                }
                if !printed {
                    thread::sleep(IDLE_INTERVAL);
                }
            }
        })
        .wrap_err("failed to spawn console thread")
}
