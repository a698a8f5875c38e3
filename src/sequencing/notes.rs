#![allow(non_upper_case_globals)]
/*
Named Keys
==========

Readable names for every key on the 88-key keyboard, so score tables can be
written as `E5, D5, Fs5` instead of raw key numbers.

Naming follows scientific pitch notation: C4 is middle C (key 40) and A4 is
the 440 Hz reference (key 49). The keyboard runs from A0 (key 1) to C8
(key 88).

- Natural notes: C4, D4, E4, ...
- Sharps: Cs4 (C#4), Fs4 (F#4), ...
- Flats: Db4, Bb4, ... (aliases for the same keys as the sharps)

Example usage:
  let riff = [E5, E5, D5, REST];
*/

use crate::dsp::keys::{Key, PitchClass};

/// Rest - silence for that step
pub const REST: Key = Key::REST;

// Octave 0
pub const A0: Key = Key::from_pitch(PitchClass::A, 0);
pub const As0: Key = Key::from_pitch(PitchClass::As, 0);
pub const Bb0: Key = As0;
pub const B0: Key = Key::from_pitch(PitchClass::B, 0);

// Octave 1
pub const C1: Key = Key::from_pitch(PitchClass::C, 1);
pub const Cs1: Key = Key::from_pitch(PitchClass::Cs, 1);
pub const Db1: Key = Cs1;
pub const D1: Key = Key::from_pitch(PitchClass::D, 1);
pub const Ds1: Key = Key::from_pitch(PitchClass::Ds, 1);
pub const Eb1: Key = Ds1;
pub const E1: Key = Key::from_pitch(PitchClass::E, 1);
pub const F1: Key = Key::from_pitch(PitchClass::F, 1);
pub const Fs1: Key = Key::from_pitch(PitchClass::Fs, 1);
pub const Gb1: Key = Fs1;
pub const G1: Key = Key::from_pitch(PitchClass::G, 1);
pub const Gs1: Key = Key::from_pitch(PitchClass::Gs, 1);
pub const Ab1: Key = Gs1;
pub const A1: Key = Key::from_pitch(PitchClass::A, 1);
pub const As1: Key = Key::from_pitch(PitchClass::As, 1);
pub const Bb1: Key = As1;
pub const B1: Key = Key::from_pitch(PitchClass::B, 1);

// Octave 2
pub const C2: Key = Key::from_pitch(PitchClass::C, 2);
pub const Cs2: Key = Key::from_pitch(PitchClass::Cs, 2);
pub const Db2: Key = Cs2;
pub const D2: Key = Key::from_pitch(PitchClass::D, 2);
pub const Ds2: Key = Key::from_pitch(PitchClass::Ds, 2);
pub const Eb2: Key = Ds2;
pub const E2: Key = Key::from_pitch(PitchClass::E, 2);
pub const F2: Key = Key::from_pitch(PitchClass::F, 2);
pub const Fs2: Key = Key::from_pitch(PitchClass::Fs, 2);
pub const Gb2: Key = Fs2;
pub const G2: Key = Key::from_pitch(PitchClass::G, 2);
pub const Gs2: Key = Key::from_pitch(PitchClass::Gs, 2);
pub const Ab2: Key = Gs2;
pub const A2: Key = Key::from_pitch(PitchClass::A, 2);
pub const As2: Key = Key::from_pitch(PitchClass::As, 2);
pub const Bb2: Key = As2;
pub const B2: Key = Key::from_pitch(PitchClass::B, 2);

// Octave 3
pub const C3: Key = Key::from_pitch(PitchClass::C, 3);
pub const Cs3: Key = Key::from_pitch(PitchClass::Cs, 3);
pub const Db3: Key = Cs3;
pub const D3: Key = Key::from_pitch(PitchClass::D, 3);
pub const Ds3: Key = Key::from_pitch(PitchClass::Ds, 3);
pub const Eb3: Key = Ds3;
pub const E3: Key = Key::from_pitch(PitchClass::E, 3);
pub const F3: Key = Key::from_pitch(PitchClass::F, 3);
pub const Fs3: Key = Key::from_pitch(PitchClass::Fs, 3);
pub const Gb3: Key = Fs3;
pub const G3: Key = Key::from_pitch(PitchClass::G, 3);
pub const Gs3: Key = Key::from_pitch(PitchClass::Gs, 3);
pub const Ab3: Key = Gs3;
pub const A3: Key = Key::from_pitch(PitchClass::A, 3);
pub const As3: Key = Key::from_pitch(PitchClass::As, 3);
pub const Bb3: Key = As3;
pub const B3: Key = Key::from_pitch(PitchClass::B, 3);

// Octave 4 (Middle C octave)
pub const C4: Key = Key::from_pitch(PitchClass::C, 4);
pub const Cs4: Key = Key::from_pitch(PitchClass::Cs, 4);
pub const Db4: Key = Cs4;
pub const D4: Key = Key::from_pitch(PitchClass::D, 4);
pub const Ds4: Key = Key::from_pitch(PitchClass::Ds, 4);
pub const Eb4: Key = Ds4;
pub const E4: Key = Key::from_pitch(PitchClass::E, 4);
pub const F4: Key = Key::from_pitch(PitchClass::F, 4);
pub const Fs4: Key = Key::from_pitch(PitchClass::Fs, 4);
pub const Gb4: Key = Fs4;
pub const G4: Key = Key::from_pitch(PitchClass::G, 4);
pub const Gs4: Key = Key::from_pitch(PitchClass::Gs, 4);
pub const Ab4: Key = Gs4;
pub const A4: Key = Key::from_pitch(PitchClass::A, 4);
pub const As4: Key = Key::from_pitch(PitchClass::As, 4);
pub const Bb4: Key = As4;
pub const B4: Key = Key::from_pitch(PitchClass::B, 4);

// Octave 5
pub const C5: Key = Key::from_pitch(PitchClass::C, 5);
pub const Cs5: Key = Key::from_pitch(PitchClass::Cs, 5);
pub const Db5: Key = Cs5;
pub const D5: Key = Key::from_pitch(PitchClass::D, 5);
pub const Ds5: Key = Key::from_pitch(PitchClass::Ds, 5);
pub const Eb5: Key = Ds5;
pub const E5: Key = Key::from_pitch(PitchClass::E, 5);
pub const F5: Key = Key::from_pitch(PitchClass::F, 5);
pub const Fs5: Key = Key::from_pitch(PitchClass::Fs, 5);
pub const Gb5: Key = Fs5;
pub const G5: Key = Key::from_pitch(PitchClass::G, 5);
pub const Gs5: Key = Key::from_pitch(PitchClass::Gs, 5);
pub const Ab5: Key = Gs5;
pub const A5: Key = Key::from_pitch(PitchClass::A, 5);
pub const As5: Key = Key::from_pitch(PitchClass::As, 5);
pub const Bb5: Key = As5;
pub const B5: Key = Key::from_pitch(PitchClass::B, 5);

// Octave 6
pub const C6: Key = Key::from_pitch(PitchClass::C, 6);
pub const Cs6: Key = Key::from_pitch(PitchClass::Cs, 6);
pub const Db6: Key = Cs6;
pub const D6: Key = Key::from_pitch(PitchClass::D, 6);
pub const Ds6: Key = Key::from_pitch(PitchClass::Ds, 6);
pub const Eb6: Key = Ds6;
pub const E6: Key = Key::from_pitch(PitchClass::E, 6);
pub const F6: Key = Key::from_pitch(PitchClass::F, 6);
pub const Fs6: Key = Key::from_pitch(PitchClass::Fs, 6);
pub const Gb6: Key = Fs6;
pub const G6: Key = Key::from_pitch(PitchClass::G, 6);
pub const Gs6: Key = Key::from_pitch(PitchClass::Gs, 6);
pub const Ab6: Key = Gs6;
pub const A6: Key = Key::from_pitch(PitchClass::A, 6);
pub const As6: Key = Key::from_pitch(PitchClass::As, 6);
pub const Bb6: Key = As6;
pub const B6: Key = Key::from_pitch(PitchClass::B, 6);

// Octave 7
pub const C7: Key = Key::from_pitch(PitchClass::C, 7);
pub const Cs7: Key = Key::from_pitch(PitchClass::Cs, 7);
pub const Db7: Key = Cs7;
pub const D7: Key = Key::from_pitch(PitchClass::D, 7);
pub const Ds7: Key = Key::from_pitch(PitchClass::Ds, 7);
pub const Eb7: Key = Ds7;
pub const E7: Key = Key::from_pitch(PitchClass::E, 7);
pub const F7: Key = Key::from_pitch(PitchClass::F, 7);
pub const Fs7: Key = Key::from_pitch(PitchClass::Fs, 7);
pub const Gb7: Key = Fs7;
pub const G7: Key = Key::from_pitch(PitchClass::G, 7);
pub const Gs7: Key = Key::from_pitch(PitchClass::Gs, 7);
pub const Ab7: Key = Gs7;
pub const A7: Key = Key::from_pitch(PitchClass::A, 7);
pub const As7: Key = Key::from_pitch(PitchClass::As, 7);
pub const Bb7: Key = As7;
pub const B7: Key = Key::from_pitch(PitchClass::B, 7);

// Octave 8
pub const C8: Key = Key::from_pitch(PitchClass::C, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_ends() {
        assert_eq!(A0.number(), 1);
        assert_eq!(C8.number(), 88);
    }

    #[test]
    fn reference_points() {
        assert_eq!(C4.number(), 40);
        assert_eq!(A4.number(), 49);
        assert_eq!(Bb4, As4);
        assert!(REST.is_rest());
    }
}
