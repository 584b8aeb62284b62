/// Circle-of-fifths lookup for key signature transposition
///
/// Index = chromatic position of the tonic above C (0-11).
/// Value = key signature reached at that position (sharps positive, flats negative).
///
///   0  C   0       6  F#  6
///   1  Db -5       7  G   1
///   2  D   2       8  Ab -4
///   3  Eb -3       9  A   3
///   4  E   4      10  Bb -2
///   5  F  -1      11  B   5
///
/// Only one spelling per position is listed, so -6, -7 and 7 (Gb, Cb, C#)
/// have no entry.
pub const KEY_MAPPING: [i8; 12] = [0, -5, 2, -3, 4, -1, 6, 1, -4, 3, -2, 5];

/// Chromatic position of a key signature, if it is on the table
pub fn position_of(key: i8) -> Option<usize> {
    KEY_MAPPING.iter().position(|&mapped| mapped == key)
}

/// Key signature at any chromatic position, wrapping into 0-11
pub fn key_at(position: i64) -> i8 {
    KEY_MAPPING[position.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_a_bijection() {
        for (position, &key) in KEY_MAPPING.iter().enumerate() {
            assert_eq!(position_of(key), Some(position));
        }
    }

    #[test]
    fn test_adjacent_fifths_differ_by_one_accidental() {
        // A fifth up is seven half-tones, which adds one sharp (or removes one flat).
        for position in 0..12i64 {
            let here = key_at(position);
            let fifth_up = key_at(position + 7);
            let step = (fifth_up - here) as i32;
            assert!(step == 1 || step == -11, "{} -> {}", here, fifth_up);
        }
    }

    #[test]
    fn test_unlisted_keys() {
        assert_eq!(position_of(-6), None);
        assert_eq!(position_of(-7), None);
        assert_eq!(position_of(7), None);
        assert_eq!(position_of(12), None);
    }

    #[test]
    fn test_key_at_wraps() {
        assert_eq!(key_at(12), 0);
        assert_eq!(key_at(-1), 5);
        assert_eq!(key_at(-12 * 5 + 7), 1);
    }
}
