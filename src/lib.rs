//! Musical transposition with enharmonic spelling
//!
//! Transposes spelled pitches and key signatures by a number of half-tones.
//! Pitches come back spelled the way the key signature expects (A# vs Bb),
//! key signatures move along the circle of fifths.
//!
//! Usable natively and, through `api`, from JavaScript as a WASM module.

pub mod api;
pub mod models;
pub mod transposition;

// Re-export commonly used types
pub use models::{Accidental, KeySignature, NaturalNote, Pitch};
pub use transposition::{
    transpose_key, transpose_pitch, DefaultTransposeCalculator, TransposeCalculator, TransposeError,
    TransposeSettings,
};

use wasm_bindgen::prelude::*;

// Runs once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if the host page already installed a logger.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Transposition WASM module initialized");
}
