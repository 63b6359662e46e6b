//! 한글 한 글자 (완성형 음절 <-> 자모 조합)

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::core::error::HangulError;
use crate::core::jamo::{Cluster, JamoTriple, Vowel};
use crate::core::unicode::{self, JamoScalar};
use crate::render::{katakana, romanize};

/// 한글 한 음절
///
/// 완성형 코드포인트 하나와 그 자모 분해를 함께 가진다.
/// 같음/순서는 완성형 코드포인트로만 판단하므로 첫가끝 자모 입력과
/// 완성형 입력이 같은 글자로 취급된다.
#[derive(Debug, Clone, Copy)]
pub struct HangulLetter {
    syllable: char,
    indices: (u32, u32, u32),
    jamos: JamoTriple,
}

impl HangulLetter {
    /// 완성형 음절 하나로 생성
    pub fn from_char(c: char) -> Result<Self, HangulError> {
        let indices = unicode::decompose_syllable(c)?;
        let jamos = unicode::decompose(c)?;
        Ok(Self {
            syllable: c,
            indices,
            jamos,
        })
    }

    /// 구조화된 자모로 생성
    /// 초성/종성 테이블에 없는 조합이면 `InvalidJamoSequence`
    pub fn from_jamos(jamos: JamoTriple) -> Result<Self, HangulError> {
        let syllable = unicode::compose(&jamos)?;
        Self::from_char(syllable)
    }

    /// 초성/중성/종성으로 생성
    pub fn new(leading: Cluster, vowel: Vowel, trailing: Cluster) -> Result<Self, HangulError> {
        Self::from_jamos(JamoTriple::new(leading, vowel, trailing))
    }

    /// 글자 하나 분량의 문자열로 생성
    ///
    /// 완성형 음절 1개, 또는 초성+중성(+종성) 첫가끝 자모 2~3개를 받는다.
    pub fn parse(unit: &str) -> Result<Self, HangulError> {
        let chars: Vec<char> = unit.chars().collect();
        match chars.as_slice() {
            [c] => Self::from_char(*c).map_err(|_| HangulError::InvalidCharacter),
            [l, v] => Self::from_jamo_chars(*l, *v, None),
            [l, v, t] => Self::from_jamo_chars(*l, *v, Some(*t)),
            _ => Err(HangulError::InvalidCharacter),
        }
    }

    fn from_jamo_chars(l: char, v: char, t: Option<char>) -> Result<Self, HangulError> {
        let leading = match JamoScalar::from_char(l) {
            Ok(JamoScalar::Choseong(cluster)) => cluster,
            _ => return Err(HangulError::InvalidCharacter),
        };
        let vowel = match JamoScalar::from_char(v) {
            Ok(JamoScalar::Jungseong(vowel)) => vowel,
            _ => return Err(HangulError::InvalidCharacter),
        };
        let trailing = match t.map(JamoScalar::from_char) {
            None => Cluster::Empty,
            Some(Ok(JamoScalar::Jongseong(cluster))) => cluster,
            Some(_) => return Err(HangulError::InvalidCharacter),
        };

        Self::new(leading, vowel, trailing).map_err(|_| HangulError::InvalidCharacter)
    }

    /// 완성형 음절
    pub fn to_syllable(&self) -> char {
        self.syllable
    }

    /// 첫가끝 자모 문자열 (항상 분해형, 2~3 코드포인트)
    pub fn to_jamo_string(&self) -> String {
        let (cho, jung, jong) = self.indices;
        unicode::jamo_string(cho, jung, jong)
    }

    /// 구조화된 자모 (음운 규칙용)
    pub fn jamos(&self) -> JamoTriple {
        self.jamos
    }

    /// (초성, 중성, 종성) 인덱스
    pub fn indices(&self) -> (u32, u32, u32) {
        self.indices
    }

    /// 로마자 표기
    pub fn romanized(&self) -> String {
        let (cho, jung, jong) = self.indices;
        romanize::romanize_syllable(cho, jung, jong)
    }

    /// 가타카나 표기
    ///
    /// `vocalize`가 참이면 단자음 초성 ㄱ ㄷ ㅂ ㅈ을 탁음으로 읽는다.
    pub fn katakanize(&self, vocalize: bool) -> String {
        let (cho, jung, jong) = self.indices;
        katakana::katakanize_syllable(cho, jung, jong, vocalize)
    }

    /// 초성이 ㅇ(소리 없음)인지 확인
    pub fn starts_with_vowel(&self) -> bool {
        self.jamos.starts_with_vowel()
    }
}

impl PartialEq for HangulLetter {
    fn eq(&self, other: &Self) -> bool {
        self.syllable == other.syllable
    }
}

impl Eq for HangulLetter {}

impl Hash for HangulLetter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.syllable.hash(state);
    }
}

impl PartialOrd for HangulLetter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HangulLetter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.syllable.cmp(&other.syllable)
    }
}

impl std::fmt::Display for HangulLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.syllable)
    }
}

impl TryFrom<char> for HangulLetter {
    type Error = HangulError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}
