//! Key signatures as a signed count of sharps (positive) or flats (negative)

use serde::{Deserialize, Serialize};

use super::pitch::{Accidental, NaturalNote};
use crate::transposition::TransposeError;

/// Order in which sharps are added to a key signature
pub const SHARP_ORDER: [NaturalNote; 7] = [
    NaturalNote::F,
    NaturalNote::C,
    NaturalNote::G,
    NaturalNote::D,
    NaturalNote::A,
    NaturalNote::E,
    NaturalNote::B,
];

/// Order in which flats are added to a key signature
pub const FLAT_ORDER: [NaturalNote; 7] = [
    NaturalNote::B,
    NaturalNote::E,
    NaturalNote::A,
    NaturalNote::D,
    NaturalNote::G,
    NaturalNote::C,
    NaturalNote::F,
];

/// A key signature owned by the score model.
///
/// `original_key` is the key as written; transposition always starts from it,
/// so repeated transpositions never accumulate. `key` is what is currently
/// displayed and `transposed_by` remembers the last offset applied.
/// The default is no sharps or flats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySignature {
    pub(crate) key: i8,
    original_key: i8,
    #[serde(default)]
    pub(crate) transposed_by: i32,
}

impl KeySignature {
    pub fn new(key: i8) -> Result<Self, TransposeError> {
        if !(-7..=7).contains(&key) {
            return Err(TransposeError::KeyOutOfRange(key as i32));
        }
        Ok(KeySignature {
            key,
            original_key: key,
            transposed_by: 0,
        })
    }

    /// Re-check a key signature that did not come through `new` (e.g. deserialized from JS)
    pub fn validate(&self) -> Result<(), TransposeError> {
        if !(-7..=7).contains(&self.key) {
            return Err(TransposeError::KeyOutOfRange(self.key as i32));
        }
        Ok(())
    }

    /// Current number of sharps (positive) or flats (negative)
    pub fn key(&self) -> i8 {
        self.key
    }

    pub fn original_key(&self) -> i8 {
        self.original_key
    }

    pub fn transposed_by(&self) -> i32 {
        self.transposed_by
    }

    pub fn is_transposed(&self) -> bool {
        self.transposed_by != 0
    }

    /// Undo any transposition
    pub fn reset(&mut self) {
        self.key = self.original_key;
        self.transposed_by = 0;
    }

    /// Notes this signature alters, in the order they are written
    pub fn altered_notes(&self) -> impl Iterator<Item = NaturalNote> {
        let order = if self.key >= 0 { SHARP_ORDER } else { FLAT_ORDER };
        order.into_iter().take(self.key.unsigned_abs() as usize)
    }

    pub fn will_alter_note(&self, note: NaturalNote) -> bool {
        self.altered_notes().any(|altered| altered == note)
    }

    /// Accidental this signature puts on `note` when nothing else is written
    pub fn accidental_for(&self, note: NaturalNote) -> Accidental {
        if !self.will_alter_note(note) {
            Accidental::None
        } else if self.key > 0 {
            Accidental::Sharp
        } else {
            Accidental::Flat
        }
    }
}
