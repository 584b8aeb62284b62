//! Calculator interface used by the score model to transpose a whole sheet
//!
//! The score model holds a `TransposeCalculator` rather than calling the free
//! functions directly, so alternative spelling strategies can be swapped in.

use serde::{Deserialize, Serialize};

use super::errors::TransposeError;
use super::{key_transpose, pitch_transpose};
use crate::models::{KeySignature, Pitch};

/// Settings for `DefaultTransposeCalculator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransposeSettings {
    /// Respell F/E#, A#/Bb and D#/Eb against the key signature
    pub enharmonic_correction: bool,
}

impl Default for TransposeSettings {
    fn default() -> Self {
        Self {
            enharmonic_correction: true,
        }
    }
}

impl TransposeSettings {
    /// Missing fields take their default values
    pub fn from_json(json: &str) -> Result<Self, TransposeError> {
        serde_json::from_str(json).map_err(|e| TransposeError::InvalidSettings(e.to_string()))
    }
}

pub trait TransposeCalculator {
    fn transpose_pitch(&self, pitch: &Pitch, key: &KeySignature, halftones: i32) -> Result<Pitch, TransposeError>;

    fn transpose_key(&self, key: &mut KeySignature, halftones: i32) -> Result<(), TransposeError>;

    /// Transpose a key signature and the pitches written under it.
    ///
    /// Pitches are spelled against the transposed key. Nothing is changed unless
    /// every pitch succeeds.
    fn transpose_passage(
        &self,
        key: &mut KeySignature,
        pitches: &[Pitch],
        halftones: i32,
    ) -> Result<Vec<Pitch>, TransposeError> {
        let mut transposed_key = key.clone();
        self.transpose_key(&mut transposed_key, halftones)?;

        let pitches = pitches
            .iter()
            .map(|pitch| self.transpose_pitch(pitch, &transposed_key, halftones))
            .collect::<Result<Vec<_>, _>>()?;

        *key = transposed_key;
        Ok(pitches)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefaultTransposeCalculator {
    settings: TransposeSettings,
}

impl DefaultTransposeCalculator {
    pub fn new(settings: TransposeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TransposeSettings {
        &self.settings
    }
}

impl TransposeCalculator for DefaultTransposeCalculator {
    fn transpose_pitch(&self, pitch: &Pitch, key: &KeySignature, halftones: i32) -> Result<Pitch, TransposeError> {
        pitch_transpose::transpose_pitch_with(pitch, key, halftones, self.settings.enharmonic_correction)
    }

    fn transpose_key(&self, key: &mut KeySignature, halftones: i32) -> Result<(), TransposeError> {
        key_transpose::transpose_key(key, halftones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Accidental, NaturalNote};

    fn pitch(text: &str) -> Pitch {
        text.parse().unwrap()
    }

    #[test]
    fn test_settings_default() {
        assert!(TransposeSettings::default().enharmonic_correction);
        assert_eq!(TransposeSettings::from_json("{}").unwrap(), TransposeSettings::default());
    }

    #[test]
    fn test_settings_from_json() {
        let settings = TransposeSettings::from_json(r#"{"enharmonicCorrection": false}"#).unwrap();
        assert!(!settings.enharmonic_correction);
    }

    #[test]
    fn test_settings_invalid_json() {
        assert!(matches!(
            TransposeSettings::from_json(r#"{"enharmonicCorrection": "yes"}"#),
            Err(TransposeError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_calculator_without_correction() {
        let calculator = DefaultTransposeCalculator::new(TransposeSettings {
            enharmonic_correction: false,
        });
        let key = KeySignature::new(6).unwrap();
        assert_eq!(calculator.transpose_pitch(&pitch("F4"), &key, 0).unwrap(), pitch("F4"));

        let corrected = DefaultTransposeCalculator::default();
        assert_eq!(corrected.transpose_pitch(&pitch("F4"), &key, 0).unwrap(), pitch("E#4"));
    }

    #[test]
    fn test_passage_c_major_to_d_major() {
        let calculator = DefaultTransposeCalculator::default();
        let mut key = KeySignature::new(0).unwrap();
        let melody = [pitch("C4"), pitch("E4"), pitch("F4"), pitch("B4")];

        let transposed = calculator.transpose_passage(&mut key, &melody, 2).unwrap();

        assert_eq!(key.key(), 2);
        assert_eq!(key.transposed_by(), 2);
        assert_eq!(transposed, vec![pitch("D4"), pitch("F#4"), pitch("G4"), pitch("C#5")]);
    }

    #[test]
    fn test_passage_spells_against_transposed_key() {
        let calculator = DefaultTransposeCalculator::default();
        // G major up a half-tone lands in Ab major (four flats).
        let mut key = KeySignature::new(1).unwrap();
        let transposed = calculator.transpose_passage(&mut key, &[pitch("G4"), pitch("C#5")], 1).unwrap();

        assert_eq!(key.key(), -4);
        assert_eq!(transposed[0], Pitch::new(NaturalNote::A, 4, Accidental::Flat).unwrap());
        // C# up a half-tone is D.
        assert_eq!(transposed[1], pitch("D5"));
    }

    #[test]
    fn test_passage_is_all_or_nothing() {
        let calculator = DefaultTransposeCalculator::default();
        let mut key = KeySignature::new(0).unwrap();
        let top = Pitch::new(NaturalNote::B, crate::models::pitch::MAX_OCTAVE, Accidental::None).unwrap();

        let result = calculator.transpose_passage(&mut key, &[pitch("C4"), top], 1);

        assert!(result.is_err());
        assert_eq!(key.key(), 0);
        assert_eq!(key.transposed_by(), 0);
    }

    #[test]
    fn test_passage_rejects_unlisted_key() {
        let calculator = DefaultTransposeCalculator::default();
        let mut key = KeySignature::new(-6).unwrap();
        assert_eq!(
            calculator.transpose_passage(&mut key, &[pitch("C4")], 2),
            Err(TransposeError::InvalidKeySignature(-6))
        );
    }
}
