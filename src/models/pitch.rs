/// Spelled pitches: letter name, octave and accidental
///
/// A pitch is always spelled. Two pitches can sound the same (A# and Bb)
/// while being different values; `half_tone()` is the only place where the
/// spelling collapses into a plain semitone number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transposition::TransposeError;

pub const MIN_OCTAVE: i32 = -16;
pub const MAX_OCTAVE: i32 = 16;

/// The seven letter names, in ascending order within an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NaturalNote {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NaturalNote {
    pub const ALL: [NaturalNote; 7] = [
        NaturalNote::C,
        NaturalNote::D,
        NaturalNote::E,
        NaturalNote::F,
        NaturalNote::G,
        NaturalNote::A,
        NaturalNote::B,
    ];

    /// Semitones above C in the same octave
    pub fn half_tone(self) -> i32 {
        match self {
            NaturalNote::C => 0,
            NaturalNote::D => 2,
            NaturalNote::E => 4,
            NaturalNote::F => 5,
            NaturalNote::G => 7,
            NaturalNote::A => 9,
            NaturalNote::B => 11,
        }
    }

    /// Position in `ALL` (C = 0, B = 6)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NaturalNote::C => "C",
            NaturalNote::D => "D",
            NaturalNote::E => "E",
            NaturalNote::F => "F",
            NaturalNote::G => "G",
            NaturalNote::A => "A",
            NaturalNote::B => "B",
        }
    }
}

impl fmt::Display for NaturalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NaturalNote {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" => Ok(NaturalNote::C),
            "D" => Ok(NaturalNote::D),
            "E" => Ok(NaturalNote::E),
            "F" => Ok(NaturalNote::F),
            "G" => Ok(NaturalNote::G),
            "A" => Ok(NaturalNote::A),
            "B" => Ok(NaturalNote::B),
            _ => Err(TransposeError::MalformedPitch(format!(
                "'{}' is not a note name (expected one of C, D, E, F, G, A, B)",
                s
            ))),
        }
    }
}

/// Accidentals that standard notation can write on a single note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    #[default]
    None,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    pub fn half_tones(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::None => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Inverse of `half_tones()`. Anything beyond a double sharp or flat is rejected
    /// rather than clamped, since clamping would change the sounding pitch.
    pub fn from_half_tones(half_tones: i32) -> Result<Self, TransposeError> {
        match half_tones {
            -2 => Ok(Accidental::DoubleFlat),
            -1 => Ok(Accidental::Flat),
            0 => Ok(Accidental::None),
            1 => Ok(Accidental::Sharp),
            2 => Ok(Accidental::DoubleSharp),
            other => Err(TransposeError::AccidentalOutOfRange(other)),
        }
    }

    /// ASCII spelling used by `Display` for pitches
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::None => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Accepts ASCII and Unicode accidental spellings
    ///
    /// Examples:
    ///   "#" | "♯"        → Sharp
    ///   "##" | "x" | "𝄪" → DoubleSharp
    ///   "b" | "♭"        → Flat
    ///   "bb" | "𝄫"       → DoubleFlat
    ///   "" | "♮"         → None
    pub fn from_symbol(s: &str) -> Option<Accidental> {
        match s {
            "" | "♮" => Some(Accidental::None),
            "#" | "♯" => Some(Accidental::Sharp),
            "##" | "x" | "♯♯" | "𝄪" => Some(Accidental::DoubleSharp),
            "b" | "♭" => Some(Accidental::Flat),
            "bb" | "♭♭" | "𝄫" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pitch {
    note: NaturalNote,
    octave: i32,
    #[serde(default)]
    accidental: Accidental,
}

impl Pitch {
    pub fn new(note: NaturalNote, octave: i32, accidental: Accidental) -> Result<Self, TransposeError> {
        let pitch = Pitch { note, octave, accidental };
        pitch.validate()?;
        Ok(pitch)
    }

    pub fn note(&self) -> NaturalNote {
        self.note
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Absolute semitone value, with C0 = 0
    pub fn half_tone(&self) -> Result<i32, TransposeError> {
        self.octave
            .checked_mul(12)
            .and_then(|base| base.checked_add(self.note.half_tone() + self.accidental.half_tones()))
            .ok_or_else(|| TransposeError::MalformedPitch(format!("octave {} overflows", self.octave)))
    }

    /// Re-check a pitch that did not come through `new` (e.g. deserialized from JS)
    pub fn validate(&self) -> Result<(), TransposeError> {
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&self.octave) {
            return Err(TransposeError::OctaveOutOfRange(self.octave));
        }
        Ok(())
    }

    /// Move this pitch's letter + accidental by `halftones`.
    ///
    /// Returns the destination semitone class (0-11) and how many octaves the
    /// move crossed. The pitch's own octave is not included; add it yourself.
    pub fn transposed_half_tone(&self, halftones: i32) -> Result<(i32, i32), TransposeError> {
        let raw = (self.note.half_tone() + self.accidental.half_tones())
            .checked_add(halftones)
            .ok_or_else(|| {
                TransposeError::MalformedPitch(format!("{} + {} half-tones overflows", self, halftones))
            })?;
        Ok((raw.rem_euclid(12), raw.div_euclid(12)))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.note, self.accidental.symbol(), self.octave)
    }
}

impl FromStr for Pitch {
    type Err = TransposeError;

    /// Parses `<letter><accidental><octave>`, e.g. "C4", "F#3", "Bb-1", "E𝄪2"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let letter = s
            .chars()
            .next()
            .ok_or_else(|| TransposeError::MalformedPitch("empty pitch name".to_string()))?;
        let note: NaturalNote = letter.to_string().parse()?;

        let rest = &s[letter.len_utf8()..];
        let octave_start = rest
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| TransposeError::MalformedPitch(format!("'{}' has no octave", s)))?;
        let (accidental_text, octave_text) = rest.split_at(octave_start);

        let accidental = Accidental::from_symbol(accidental_text).ok_or_else(|| {
            TransposeError::MalformedPitch(format!("'{}' is not an accidental", accidental_text))
        })?;
        let octave: i32 = octave_text
            .parse()
            .map_err(|_| TransposeError::MalformedPitch(format!("'{}' is not an octave", octave_text)))?;

        Pitch::new(note, octave, accidental)
    }
}
