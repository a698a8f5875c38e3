use std::f64::consts::{PI, TAU};
use std::fmt;

/*
Waveform Shapes
===============

A waveform maps the oscillator's phase angle to an amplitude. The phase runs
over one period, [0, 2π), and the oscillator wraps it back to 0 afterwards,
so every shape here only has to describe a single cycle.

  Sine       sin(phase)
             Pure tone, no overtones.

  Linear     phase / π
             Rises from 0 toward 2 over the cycle, then jumps back to 0.
             Not centred and not clipped to [-1, 1].

  Triangle   phase / π            for phase <  π
             (2π - phase) / π     for phase >= π
             Climbs from 0 to 1 at π, then falls back to 0. Mirror
             symmetric around π and continuous there (both branches give 1).

  Pulse      +1 while phase < 2π·duty, -1 afterwards.
             duty = 0.5 is the classic square wave. The switch point belongs
             to the low half: at exactly 2π·duty the output is already -1.

Shapes are chosen once at configuration time and never reassigned from the
audio thread, so they are a closed enum rather than function pointers.
*/

#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

#[inline]
pub fn linear(phase: f64) -> f64 {
    phase / PI
}

#[inline]
pub fn triangle(phase: f64) -> f64 {
    if phase < PI {
        phase / PI
    } else {
        (TAU - phase) / PI
    }
}

/// Fraction of the cycle a pulse spends high, always strictly inside (0, 1).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyCycle(f64);

impl DutyCycle {
    pub const HALF: DutyCycle = DutyCycle(0.5);

    pub fn new(duty: f64) -> Result<Self, WaveformError> {
        if !(duty > 0.0 && duty < 1.0) {
            return Err(WaveformError::InvalidDuty { duty });
        }
        Ok(Self(duty))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Phase where the pulse drops to -1.
    #[inline]
    pub fn threshold(self) -> f64 {
        TAU * self.0
    }
}

impl TryFrom<f64> for DutyCycle {
    type Error = WaveformError;

    fn try_from(duty: f64) -> Result<Self, Self::Error> {
        Self::new(duty)
    }
}

impl From<DutyCycle> for f64 {
    fn from(duty: DutyCycle) -> f64 {
        duty.0
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Linear,
    Triangle,
    /// Square-family wave
    Pulse { duty: DutyCycle },
}

impl Waveform {
    /// Pulse wave with the duty cycle baked in.
    pub fn pulse(duty: f64) -> Result<Self, WaveformError> {
        Ok(Waveform::Pulse {
            duty: DutyCycle::new(duty)?,
        })
    }

    pub fn square() -> Self {
        Waveform::Pulse {
            duty: DutyCycle::HALF,
        }
    }

    /// Amplitude at `phase`, which must already be wrapped into `[0, 2π)`.
    #[inline]
    pub fn sample(&self, phase: f64) -> f64 {
        match *self {
            Waveform::Sine => sine(phase),
            Waveform::Linear => linear(phase),
            Waveform::Triangle => triangle(phase),
            Waveform::Pulse { duty } => {
                if phase < duty.threshold() {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Linear => "linear",
            Waveform::Triangle => "triangle",
            Waveform::Pulse { .. } => "pulse",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waveform::Pulse { duty } => write!(f, "pulse({:.2})", duty.get()),
            other => f.write_str(other.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveformError {
    /// Duty cycle must lie strictly between 0 and 1
    InvalidDuty { duty: f64 },
}

impl fmt::Display for WaveformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveformError::InvalidDuty { duty } => {
                write!(f, "Pulse duty cycle {} is outside (0, 1)", duty)
            }
        }
    }
}

impl std::error::Error for WaveformError {}
