use std::f64::consts::TAU;
use std::fmt;
use std::ops::Index;

/*
Keyboard Keys and Equal Temperament
===================================

Keys are numbered the way a piano keyboard is: key 1 is the lowest A (A0),
key 88 the highest C (C8), and key 49 is A4, the 440 Hz tuning reference.
Key 0 is reserved for the rest.

Each semitone multiplies frequency by the twelfth root of two, so twelve keys
up doubles the frequency (one octave):

    frequency(n) = 440 * 2^((n - 49) / 12)

An oscillator does not consume frequency directly. It consumes the angle it
must rotate by on every sample:

    phase_increment = 2π * frequency / sample_rate

Example at 44.1 kHz:
  A4 (key 49) = 440 Hz      -> 0.0627 rad/sample
  C8 (key 88) = 4186.01 Hz  -> 0.5964 rad/sample

Both values are computed once per sample rate and stored in a flat table, so
the render loop only ever does an array lookup.
*/

/// Number of playable keys (rest excluded).
pub const KEY_COUNT: usize = 88;

/// A4, the tuning reference key.
pub const REFERENCE_KEY: u8 = 49;

/// Frequency of the reference key in Hz.
pub const REFERENCE_FREQUENCY: f64 = 440.0;

/// The twelve pitch classes of one octave, in ascending order from C.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PitchClass {
    C = 0,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

/// A keyboard key in `[1, 88]`, or the rest (`0`).
///
/// The range is enforced at construction, so every `Key` can index a
/// [`KeyTable`] without a bounds failure.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Key(u8);

impl Key {
    pub const REST: Key = Key(0);
    pub const LOWEST: Key = Key(1);
    pub const HIGHEST: Key = Key(KEY_COUNT as u8);

    /// Validate a raw key number.
    pub fn new(number: u8) -> Result<Self, KeyError> {
        if number as usize > KEY_COUNT {
            return Err(KeyError::OutOfRange { number });
        }
        Ok(Key(number))
    }

    /// Key for a pitch class in a scientific-pitch octave (C4 = middle C = key 40).
    ///
    /// Usable in `const` score tables. Panics if the result falls off the keyboard.
    pub const fn from_pitch(pitch: PitchClass, octave: u8) -> Self {
        let number = pitch as i32 + 4 + (octave as i32 - 1) * 12;
        assert!(
            number >= 1 && number <= KEY_COUNT as i32,
            "pitch lies outside the 88-key range"
        );
        Key(number as u8)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn is_rest(self) -> bool {
        self.0 == 0
    }

    pub fn pitch_class(self) -> Option<PitchClass> {
        if self.is_rest() {
            return None;
        }
        Some(PitchClass::ALL[(self.0 as usize + 8) % 12])
    }

    pub fn octave(self) -> Option<u8> {
        if self.is_rest() {
            return None;
        }
        Some((self.0 + 8) / 12)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.pitch_class(), self.octave()) {
            (Some(pitch), Some(octave)) => write!(f, "{}{}", pitch.name(), octave),
            _ => f.write_str("--"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Key number beyond the top of the keyboard
    OutOfRange { number: u8 },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::OutOfRange { number } => {
                write!(f, "Key {} is outside the keyboard range 0..={}", number, KEY_COUNT)
            }
        }
    }
}

impl std::error::Error for KeyError {}

/// Equal-tempered frequency of key `number` (1-indexed, key 49 = 440 Hz).
#[inline]
pub fn key_frequency(number: u8) -> f64 {
    REFERENCE_FREQUENCY * 2.0_f64.powf((number as f64 - REFERENCE_KEY as f64) / 12.0)
}

/// Per-key tuning data, immutable once the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyParams {
    pub frequency: f64,
    pub phase_increment: f64,
}

/// Precomputed frequency and phase increment for every key at one sample rate.
#[derive(Debug, Clone)]
pub struct KeyTable {
    sample_rate: f64,
    params: [KeyParams; KEY_COUNT + 1],
}

impl KeyTable {
    pub fn new(sample_rate: f64) -> Self {
        let mut params = [KeyParams::default(); KEY_COUNT + 1];
        // Slot 0 stays {0, 0}: the rest never advances its oscillator.
        for (number, slot) in params.iter_mut().enumerate().skip(1) {
            let frequency = key_frequency(number as u8);
            *slot = KeyParams {
                frequency,
                phase_increment: TAU * frequency / sample_rate,
            };
        }

        Self {
            sample_rate,
            params,
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    #[inline]
    pub fn params(&self, key: Key) -> KeyParams {
        self.params[key.0 as usize]
    }

    #[inline]
    pub fn frequency(&self, key: Key) -> f64 {
        self.params(key).frequency
    }

    #[inline]
    pub fn phase_increment(&self, key: Key) -> f64 {
        self.params(key).phase_increment
    }

    /// Lookup by raw key number, rejecting anything off the keyboard.
    pub fn lookup(&self, number: u8) -> Result<KeyParams, KeyError> {
        Key::new(number).map(|key| self.params(key))
    }
}

impl Index<Key> for KeyTable {
    type Output = KeyParams;

    fn index(&self, key: Key) -> &KeyParams {
        &self.params[key.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f64 = 44_100.0;

    #[test]
    fn reference_key_is_exactly_440() {
        let table = KeyTable::new(SAMPLE_RATE);
        let a4 = Key::new(REFERENCE_KEY).unwrap();
        assert_eq!(table.frequency(a4), 440.0);
    }

    #[test]
    fn octave_doubles_frequency() {
        let table = KeyTable::new(SAMPLE_RATE);
        for n in 1..=(KEY_COUNT as u8 - 12) {
            let low = table.frequency(Key::new(n).unwrap());
            let high = table.frequency(Key::new(n + 12).unwrap());
            assert!(
                (high - 2.0 * low).abs() < 1e-9 * high,
                "key {n}: {high} != 2 * {low}"
            );
        }
    }

    #[test]
    fn increment_matches_frequency() {
        let table = KeyTable::new(SAMPLE_RATE);
        for n in 0..=KEY_COUNT as u8 {
            let params = table.lookup(n).unwrap();
            let expected = TAU * params.frequency / SAMPLE_RATE;
            assert!((params.phase_increment - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn rest_is_silent() {
        let table = KeyTable::new(SAMPLE_RATE);
        assert_eq!(table[Key::REST], KeyParams::default());
        assert_eq!(table.frequency(Key::REST), 0.0);
        assert_eq!(table.phase_increment(Key::REST), 0.0);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let table = KeyTable::new(SAMPLE_RATE);
        assert_eq!(table.lookup(89), Err(KeyError::OutOfRange { number: 89 }));
        assert!(Key::new(255).is_err());
    }

    #[test]
    fn top_key_stays_below_a_full_turn() {
        let table = KeyTable::new(SAMPLE_RATE);
        assert!(table.phase_increment(Key::HIGHEST) < TAU);
    }

    #[test]
    fn pitch_naming() {
        let middle_c = Key::from_pitch(PitchClass::C, 4);
        assert_eq!(middle_c.number(), 40);
        assert_eq!(middle_c.to_string(), "C4");

        assert_eq!(Key::from_pitch(PitchClass::A, 0), Key::LOWEST);
        assert_eq!(Key::from_pitch(PitchClass::C, 8), Key::HIGHEST);
        assert_eq!(Key::from_pitch(PitchClass::Fs, 5).to_string(), "F#5");
        assert_eq!(Key::REST.to_string(), "--");
        assert_eq!(Key::REST.octave(), None);
    }

    #[test]
    #[should_panic]
    fn pitch_off_the_keyboard_panics() {
        let _ = Key::from_pitch(PitchClass::Gs, 0);
    }
}
