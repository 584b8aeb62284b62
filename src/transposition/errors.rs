//! Error types for transposition
//!
//! Every failure is local to a single call: nothing is retried and no partial
//! result is returned. Callers decide whether to skip, log, or abort.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// The key signature's original value has no position on the circle of fifths
    #[error("Key signature {0} has no position on the circle of fifths")]
    InvalidKeySignature(i8),

    /// Spelling would need more than two sharps or flats
    #[error("Accidental of {0} half-tones cannot be notated (must be -2..=2)")]
    AccidentalOutOfRange(i32),

    #[error("Octave {0} out of range (must be -16..=16)")]
    OctaveOutOfRange(i32),

    #[error("Key signature value {0} out of range (must be -7..=7)")]
    KeyOutOfRange(i32),

    /// Unparseable pitch text or semitone arithmetic that overflows
    #[error("Invalid pitch: {0}")]
    MalformedPitch(String),

    #[error("Invalid transpose settings: {0}")]
    InvalidSettings(String),
}
