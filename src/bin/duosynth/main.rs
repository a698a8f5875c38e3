//! duosynth - two-voice score player
//!
//! Run with: cargo run --release -- [--merge] [--loop] [--treble pulse --duty 0.25]

mod app;
mod console;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use app::Player;
use duosynth::{
    config::{AudioConfig, PlaybackConfig},
    dsp::waveform::{Waveform, WaveformError},
    sequencing::demo,
    NOTES_PER_SECOND, SAMPLE_RATE,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    Sine,
    Linear,
    Triangle,
    Pulse,
}

impl Shape {
    fn waveform(self, duty: f64) -> Result<Waveform, WaveformError> {
        match self {
            Shape::Sine => Ok(Waveform::Sine),
            Shape::Linear => Ok(Waveform::Linear),
            Shape::Triangle => Ok(Waveform::Triangle),
            Shape::Pulse => Waveform::pulse(duty),
        }
    }
}

#[derive(Parser)]
#[command(name = "duosynth")]
#[command(author, version, about = "Play the built-in two-staff piece")]
struct Args {
    /// Average both voices into both channels (default: treble left, bass right)
    #[arg(long, short = 'm')]
    merge: bool,

    /// Start over from the first bar instead of stopping
    #[arg(long = "loop", short = 'l')]
    looping: bool,

    /// Waveform for the treble staff
    #[arg(long, value_enum, default_value_t = Shape::Sine)]
    treble: Shape,

    /// Waveform for the bass staff
    #[arg(long, value_enum, default_value_t = Shape::Sine)]
    bass: Shape,

    /// Duty cycle for pulse waveforms, strictly between 0 and 1
    #[arg(long, default_value_t = 0.5)]
    duty: f64,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = SAMPLE_RATE)]
    sample_rate: u32,

    /// Tempo in score steps per second
    #[arg(long, default_value_t = NOTES_PER_SECOND)]
    notes_per_second: u32,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let playback = PlaybackConfig {
        channels_independent: !args.merge,
        looping: args.looping,
        treble_waveform: args.treble.waveform(args.duty)?,
        bass_waveform: args.bass.waveform(args.duty)?,
    };
    let audio = AudioConfig {
        sample_rate: args.sample_rate,
        notes_per_second: args.notes_per_second,
    };
    audio.validate().wrap_err("invalid audio configuration")?;

    let score = demo::score().wrap_err("built-in score is malformed")?;

    Player::new(score, playback, audio).run()
}
