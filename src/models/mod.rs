//! Value types shared by the transposition core
//!
//! Pitches and key signatures are owned by the caller's score model; the core
//! only reads pitches and updates key signatures in place.

pub mod key_signature;
pub mod pitch;

// Re-export commonly used types
pub use key_signature::KeySignature;
pub use pitch::{Accidental, NaturalNote, Pitch};
