pub mod config;
pub mod core;
pub mod phonology;
pub mod render;

pub use config::OutputMode;
pub use crate::core::converter::{
    katakanize, phonological_convert, pronounce_in_katakana, render, romanize, split_runs, TextRun,
};
pub use crate::core::{Cluster, Consonant, HangulError, HangulLetter, HangulSequence, JamoScalar, JamoTriple, Vowel};
pub use phonology::{Rule, PIPELINE};
