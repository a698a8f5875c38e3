//! Playback and audio-format configuration.
//!
//! Both structs are set once before playback starts and only read afterwards.

use std::fmt;

use crate::dsp::keys::{key_frequency, Key};
use crate::dsp::mix::{MixMode, VoiceMixer};
use crate::dsp::waveform::Waveform;
use crate::{NOTES_PER_SECOND, SAMPLE_RATE};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Treble on the left, bass on the right; otherwise both averaged into both
    pub channels_independent: bool,
    /// Restart from the first bar instead of finishing
    pub looping: bool,
    pub treble_waveform: Waveform,
    pub bass_waveform: Waveform,
}

impl PlaybackConfig {
    pub fn mix_mode(&self) -> MixMode {
        MixMode::from_independent(self.channels_independent)
    }

    pub fn mixer(&self) -> VoiceMixer {
        VoiceMixer::new(self.mix_mode(), self.treble_waveform, self.bass_waveform)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            channels_independent: true,
            looping: false,
            treble_waveform: Waveform::Sine,
            bass_waveform: Waveform::Sine,
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    /// Frames per second
    pub sample_rate: u32,
    /// Score steps per second (tempo)
    pub notes_per_second: u32,
}

impl AudioConfig {
    /// Frames rendered for one score step. Integer division, like the device
    /// buffer size it is negotiated as.
    pub fn samples_per_step(&self) -> usize {
        (self.sample_rate / self.notes_per_second.max(1)) as usize
    }

    /// Check the format can drive the render loop.
    ///
    /// The oscillator wraps its phase at most once per sample, which only
    /// holds while every key's frequency stays below the sample rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.notes_per_second == 0 {
            return Err(ConfigError::ZeroTempo);
        }
        if self.samples_per_step() == 0 {
            return Err(ConfigError::StepTooShort {
                sample_rate: self.sample_rate,
                notes_per_second: self.notes_per_second,
            });
        }

        let highest = key_frequency(Key::HIGHEST.number());
        if highest >= self.sample_rate as f64 {
            return Err(ConfigError::SampleRateTooLow {
                sample_rate: self.sample_rate,
                highest_frequency: highest,
            });
        }

        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            notes_per_second: NOTES_PER_SECOND,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroSampleRate,
    ZeroTempo,
    /// Tempo so fast a step is shorter than one frame
    StepTooShort {
        sample_rate: u32,
        notes_per_second: u32,
    },
    /// Top key would need a phase increment of a full turn or more
    SampleRateTooLow {
        sample_rate: u32,
        highest_frequency: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSampleRate => write!(f, "Sample rate must be non-zero"),
            ConfigError::ZeroTempo => write!(f, "Notes per second must be non-zero"),
            ConfigError::StepTooShort {
                sample_rate,
                notes_per_second,
            } => write!(
                f,
                "{} notes per second leaves no frames per step at {} Hz",
                notes_per_second, sample_rate
            ),
            ConfigError::SampleRateTooLow {
                sample_rate,
                highest_frequency,
            } => write!(
                f,
                "Sample rate {} Hz cannot carry the top key ({:.2} Hz)",
                sample_rate, highest_frequency
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_length() {
        let config = AudioConfig::default();
        assert_eq!(config.samples_per_step(), 7350);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_rates() {
        let config = AudioConfig {
            sample_rate: 0,
            notes_per_second: 6,
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSampleRate));

        let config = AudioConfig {
            sample_rate: 44_100,
            notes_per_second: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTempo));
    }

    #[test]
    fn rejects_sub_frame_steps() {
        let config = AudioConfig {
            sample_rate: 8_000,
            notes_per_second: 10_000,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StepTooShort { .. })
        ));
    }

    #[test]
    fn rejects_sample_rate_below_top_key() {
        let config = AudioConfig {
            sample_rate: 4_000,
            notes_per_second: 4,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SampleRateTooLow { .. })
        ));
    }

    #[test]
    fn playback_defaults() {
        let config = PlaybackConfig::default();
        assert!(config.channels_independent);
        assert!(!config.looping);
        assert_eq!(config.mix_mode(), MixMode::Independent);
    }
}
