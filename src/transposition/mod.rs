pub mod calculator;
pub mod circle_of_fifths;
pub mod errors;
pub mod key_transpose;
pub mod pitch_transpose;

pub use calculator::{DefaultTransposeCalculator, TransposeCalculator, TransposeSettings};
pub use errors::TransposeError;
pub use key_transpose::transpose_key;
pub use pitch_transpose::{correct_enharmonic, transpose_pitch};
