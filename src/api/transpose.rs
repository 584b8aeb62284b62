//! JavaScript-facing transposition functions
//!
//! Values arrive as plain JS objects:
//!
//! ```text
//! pitch: { note: "A", octave: 4, accidental: "sharp" }
//! key:   { key: -2, originalKey: -2, transposedBy: 0 }
//! ```
//!
//! JS passes objects by value, so `transposeKey` returns the updated key
//! instead of mutating its argument.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, transpose_error};
use crate::models::{KeySignature, Pitch};
use crate::transposition;
use crate::{wasm_error, wasm_log};

/// Transpose a pitch object, spelled for the given key signature
#[wasm_bindgen(js_name = transposePitch)]
pub fn transpose_pitch(pitch: JsValue, key: JsValue, halftones: i32) -> Result<JsValue, JsValue> {
    let pitch: Pitch = deserialize(pitch, "Invalid pitch")?;
    let key: KeySignature = deserialize(key, "Invalid key signature")?;
    wasm_log!("transposePitch {} by {} in key {}", pitch, halftones, key.key());

    let transposed = transposition::transpose_pitch(&pitch, &key, halftones)
        .map_err(|e| transpose_error("transposePitch failed", e))?;

    serialize(&transposed, "Failed to serialize pitch")
}

/// Transpose a key signature object from its original key
///
/// # Returns
/// The key signature with `key` and `transposedBy` updated
#[wasm_bindgen(js_name = transposeKey)]
pub fn transpose_key(key: JsValue, halftones: i32) -> Result<JsValue, JsValue> {
    let mut key: KeySignature = deserialize(key, "Invalid key signature")?;
    wasm_log!("transposeKey {} by {}", key.original_key(), halftones);

    transposition::transpose_key(&mut key, halftones)
        .map_err(|e| transpose_error("transposeKey failed", e))?;

    serialize(&key, "Failed to serialize key signature")
}

/// Transpose a pitch written as text (e.g. "F#4") under a key signature value
///
/// # Returns
/// The transposed pitch as text, e.g. "G#4"
#[wasm_bindgen(js_name = transposePitchName)]
pub fn transpose_pitch_name(name: &str, key: i8, halftones: i32) -> Result<String, JsValue> {
    let pitch: Pitch = name.parse().map_err(|e| transpose_error("Invalid pitch name", e))?;
    let key = KeySignature::new(key).map_err(|e| transpose_error("Invalid key signature", e))?;

    match transposition::transpose_pitch(&pitch, &key, halftones) {
        Ok(transposed) => Ok(transposed.to_string()),
        Err(e) => {
            wasm_error!("transposePitchName({}, {}, {}) failed: {}", name, key.key(), halftones, e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}
