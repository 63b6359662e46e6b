//! 출력 표기 (로마자, 가타카나)

pub mod katakana;
pub mod romanize;

pub use katakana::{collapse_sokuon, katakanize_syllable};
pub use romanize::romanize_syllable;
