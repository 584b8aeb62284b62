//! Transposition WASM API
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `transpose`: `transposePitch`, `transposeKey`, `transposePitchName`

pub mod helpers;
pub mod transpose;

pub use transpose::{transpose_key, transpose_pitch, transpose_pitch_name};
