/// Pitch transposition with enharmonic spelling
///
/// Semitone arithmetic alone cannot tell A# from Bb. The spelling is chosen in
/// two passes:
///
/// 1. If the destination lands on a natural note, use it with no accidental.
/// 2. Otherwise take the letter above and either lower it (Bb) or step down a
///    letter and raise it (A#). Sharps stay sharps, flats stay flats, and a
///    natural source follows the key: sharp or neutral keys raise, flat keys lower.
///
/// The result is then run through `correct_enharmonic` for the collisions that
/// show up most often against the key signature.

use super::errors::TransposeError;
use crate::models::{Accidental, KeySignature, NaturalNote, Pitch};

/// Transpose `pitch` by `halftones`, spelled for `key`.
///
/// The result always sounds `halftones` away from `pitch`, octave carries included.
pub fn transpose_pitch(pitch: &Pitch, key: &KeySignature, halftones: i32) -> Result<Pitch, TransposeError> {
    transpose_pitch_with(pitch, key, halftones, true)
}

pub(crate) fn transpose_pitch_with(
    pitch: &Pitch,
    key: &KeySignature,
    halftones: i32,
    enharmonic_correction: bool,
) -> Result<Pitch, TransposeError> {
    pitch.validate()?;
    key.validate()?;
    let raw = spell_transposed(pitch, key, halftones)?;
    if enharmonic_correction {
        Ok(correct_enharmonic(raw, key))
    } else {
        Ok(raw)
    }
}

fn spell_transposed(pitch: &Pitch, key: &KeySignature, halftones: i32) -> Result<Pitch, TransposeError> {
    let (mut half_tone, mut octave_change) = pitch.transposed_half_tone(halftones)?;

    if let Some(&note) = NaturalNote::ALL.iter().find(|n| n.half_tone() == half_tone) {
        return Pitch::new(note, shifted_octave(pitch, octave_change)?, Accidental::None);
    }

    // Every non-natural class (1, 3, 6, 8, 10) has a natural above it within the octave.
    let above = NaturalNote::ALL
        .iter()
        .find(|n| n.half_tone() > half_tone)
        .map_or(NaturalNote::ALL.len(), |n| n.index()) as i32;

    let source_accidental = pitch.accidental().half_tones();
    let raise_letter_below = source_accidental > 0 || (source_accidental == 0 && key.key() >= 0);
    let index = if raise_letter_below { above - 1 } else { above };

    // Wrapping past B or below C moves the letter into the neighbouring octave.
    let octaves = index.div_euclid(7);
    let note = NaturalNote::ALL[index.rem_euclid(7) as usize];
    half_tone -= octaves * 12;
    octave_change += octaves;

    let accidental = Accidental::from_half_tones(half_tone - note.half_tone()).map_err(|e| {
        log::warn!("Cannot spell {} + {} half-tones on {}: {}", pitch, halftones, note, e);
        e
    })?;

    Pitch::new(note, shifted_octave(pitch, octave_change)?, accidental)
}

fn shifted_octave(pitch: &Pitch, octave_change: i32) -> Result<i32, TransposeError> {
    pitch.octave().checked_add(octave_change).ok_or_else(|| {
        TransposeError::MalformedPitch(format!("{} shifted by {} octaves overflows", pitch, octave_change))
    })
}

/// Respell the two enharmonic collisions that clash with the key signature:
///
/// - sharp key that alters E: F becomes E#
/// - flat key that alters B or E: A# becomes Bb, D# becomes Eb
///
/// Other collisions (e.g. B vs Cb in seven flats) are left alone.
pub fn correct_enharmonic(pitch: Pitch, key: &KeySignature) -> Pitch {
    let respelled = if key.accidental_for(NaturalNote::E) == Accidental::Sharp {
        match (pitch.note(), pitch.accidental()) {
            (NaturalNote::F, Accidental::None) => Some((NaturalNote::E, Accidental::Sharp)),
            _ => None,
        }
    } else if key.accidental_for(NaturalNote::B) == Accidental::Flat
        || key.accidental_for(NaturalNote::E) == Accidental::Flat
    {
        match (pitch.note(), pitch.accidental()) {
            (NaturalNote::A, Accidental::Sharp) => Some((NaturalNote::B, Accidental::Flat)),
            (NaturalNote::D, Accidental::Sharp) => Some((NaturalNote::E, Accidental::Flat)),
            _ => None,
        }
    } else {
        None
    };

    match respelled {
        // Same octave: none of the rewrites cross C.
        Some((note, accidental)) => match Pitch::new(note, pitch.octave(), accidental) {
            Ok(corrected) => {
                log::debug!("Respelled {} as {} for key {}", pitch, corrected, key.key());
                corrected
            }
            Err(e) => {
                log::warn!("Cannot respell {} for key {}: {}", pitch, key.key(), e);
                pitch
            }
        },
        None => pitch,
    }
}
