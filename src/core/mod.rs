//! 한글 글자 모델 (자모, 유니코드 조합/분해, 글자, 글자열)

pub mod converter;
pub mod error;
pub mod jamo;
pub mod letter;
pub mod sequence;
pub mod unicode;

pub use error::HangulError;
pub use jamo::{Cluster, Consonant, JamoTriple, Vowel};
pub use letter::HangulLetter;
pub use sequence::HangulSequence;
pub use unicode::JamoScalar;
