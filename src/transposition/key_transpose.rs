/// Key signature transposition along the circle of fifths

use super::circle_of_fifths;
use super::errors::TransposeError;
use crate::models::KeySignature;

/// Transpose `key` by `halftones`, always starting from its original key.
///
/// Updates `key.key` and `key.transposed_by` in place. Fails without touching
/// `key` if the current key is out of range or the original key has no
/// position on the circle of fifths.
pub fn transpose_key(key: &mut KeySignature, halftones: i32) -> Result<(), TransposeError> {
    key.validate()?;
    let original = key.original_key();
    let position = circle_of_fifths::position_of(original).ok_or_else(|| {
        log::warn!("Key signature {} is not on the circle of fifths", original);
        TransposeError::InvalidKeySignature(original)
    })?;

    let transposed = circle_of_fifths::key_at(position as i64 + halftones as i64);
    log::debug!("Key {} transposed by {} -> {}", original, halftones, transposed);

    key.key = transposed;
    key.transposed_by = halftones;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transposed(original: i8, halftones: i32) -> i8 {
        let mut key = KeySignature::new(original).unwrap();
        transpose_key(&mut key, halftones).unwrap();
        key.key()
    }

    #[test]
    fn test_c_major_up_a_fifth() {
        let mut key = KeySignature::new(0).unwrap();
        transpose_key(&mut key, 7).unwrap();
        assert_eq!(key.key(), 1);
        assert_eq!(key.transposed_by(), 7);
        assert_eq!(key.original_key(), 0);
    }

    #[test]
    fn test_common_transpositions() {
        // C -> D
        assert_eq!(transposed(0, 2), 2);
        // F -> G
        assert_eq!(transposed(-1, 2), 1);
        // Bb -> C (Bb instrument to concert pitch)
        assert_eq!(transposed(-2, 2), 0);
        // Eb -> C (alto sax)
        assert_eq!(transposed(-3, -3), 0);
        // D -> Db
        assert_eq!(transposed(2, -1), -5);
    }

    #[test]
    fn test_multi_octave_offsets_wrap() {
        assert_eq!(transposed(0, 12), 0);
        assert_eq!(transposed(0, 19), 1);
        assert_eq!(transposed(0, -5), 1);
        assert_eq!(transposed(3, -36), 3);
    }

    #[test]
    fn test_starts_from_original_every_time() {
        let mut key = KeySignature::new(0).unwrap();
        transpose_key(&mut key, 2).unwrap();
        transpose_key(&mut key, 2).unwrap();
        assert_eq!(key.key(), 2);

        transpose_key(&mut key, 0).unwrap();
        assert_eq!(key.key(), 0);
        assert_eq!(key.transposed_by(), 0);
    }

    #[test]
    fn test_out_of_range_current_key_is_rejected() {
        let mut key: KeySignature = serde_json::from_str(r#"{"key":100,"originalKey":0}"#).unwrap();
        assert_eq!(transpose_key(&mut key, 2), Err(TransposeError::KeyOutOfRange(100)));
        assert_eq!(key.key(), 100);
    }

    #[test]
    fn test_unlisted_original_is_rejected() {
        for original in [-7, -6, 7] {
            let mut key = KeySignature::new(original).unwrap();
            assert_eq!(
                transpose_key(&mut key, 2),
                Err(TransposeError::InvalidKeySignature(original))
            );
            assert_eq!(key.key(), original);
            assert_eq!(key.transposed_by(), 0);
        }
    }
}
