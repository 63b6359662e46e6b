//! 한글 글자열
//!
//! 음운 규칙이 제자리에서 고쳐 쓰는 대상이므로 인덱스 접근과 대입을 지원한다.

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::core::error::HangulError;
use crate::core::letter::HangulLetter;
use crate::core::unicode;
use crate::phonology;
use crate::render::katakana;

/// 한글 글자의 순서 있는 모음
///
/// 같음/순서는 글자별 완성형 코드포인트의 사전식 비교
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HangulSequence {
    letters: Vec<HangulLetter>,
}

impl HangulSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 문자열을 글자 단위로 잘라 한글 글자열 생성
    /// 한 글자라도 한글이 아니면 전체가 실패한다.
    pub fn parse(text: &str) -> Result<Self, HangulError> {
        unicode::split_units(text)
            .into_iter()
            .map(HangulLetter::parse)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HangulLetter> {
        self.letters.get(index)
    }

    /// index 위치의 글자 교체
    pub fn set(&mut self, index: usize, letter: HangulLetter) -> Option<HangulLetter> {
        self.letters
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, letter))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HangulLetter> {
        self.letters.iter()
    }

    /// 로마자 표기 (글자 사이에 separator)
    pub fn romanized(&self, separator: &str) -> String {
        self.letters
            .iter()
            .map(HangulLetter::romanized)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// 가타카나 표기
    ///
    /// ㅎ 묵음화를 먼저 적용하고, 첫 글자는 청음, 이후 글자는 탁음으로 읽는다.
    pub fn katakanize(&self) -> Result<String, HangulError> {
        let mut elided = self.clone();
        phonology::Rule::SilentHElision.apply(&mut elided)?;

        let kana: String = elided
            .iter()
            .enumerate()
            .map(|(i, letter)| letter.katakanize(i > 0))
            .collect();
        Ok(katakana::collapse_sokuon(&kana))
    }

    /// 음운 규칙 적용 후 가타카나 표기
    pub fn pronounce_in_katakana(&self) -> Result<String, HangulError> {
        self.phonological_converted()?.katakanize()
    }

    /// 표준 발음 규칙을 순서대로 적용한 새 글자열
    pub fn phonological_converted(&self) -> Result<HangulSequence, HangulError> {
        phonology::convert(self)
    }
}

impl FromStr for HangulSequence {
    type Err = HangulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for HangulSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromIterator<HangulLetter> for HangulSequence {
    fn from_iter<I: IntoIterator<Item = HangulLetter>>(iter: I) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<HangulLetter>> for HangulSequence {
    fn from(letters: Vec<HangulLetter>) -> Self {
        Self { letters }
    }
}

impl IntoIterator for HangulSequence {
    type Item = HangulLetter;
    type IntoIter = std::vec::IntoIter<HangulLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.into_iter()
    }
}

impl<'a> IntoIterator for &'a HangulSequence {
    type Item = &'a HangulLetter;
    type IntoIter = std::slice::Iter<'a, HangulLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl Index<usize> for HangulSequence {
    type Output = HangulLetter;

    fn index(&self, index: usize) -> &Self::Output {
        &self.letters[index]
    }
}

impl IndexMut<usize> for HangulSequence {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.letters[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> HangulSequence {
        HangulSequence::parse(text).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let s = seq("안녕하세요");
        assert_eq!(s.len(), 5);
        assert_eq!(s.to_string(), "안녕하세요");
        assert_eq!(s[1].to_syllable(), '녕');

        // 첫가끝 입력도 완성형으로 출력
        let jamo = seq("\u{1100}\u{1161}\u{11A8}\u{1112}\u{1161}");
        assert_eq!(jamo.to_string(), "각하");
        assert_eq!(jamo, seq("각하"));
    }

    #[test]
    fn test_parse_failure_is_total() {
        for input in ["a", "ㅇ", " ", "아 이", "안녕!"] {
            assert_eq!(
                HangulSequence::parse(input),
                Err(HangulError::InvalidCharacter),
                "input: {:?}",
                input
            );
        }
        assert!(seq("").is_empty());
    }

    #[test]
    fn test_from_str() {
        let s: HangulSequence = "한글".parse().unwrap();
        assert_eq!(s, seq("한글"));
    }

    #[test]
    fn test_ordering() {
        assert!(seq("") < seq("안"));
        assert!(seq("안") < seq("았"));
        assert!(seq("안") < seq("안녕"));
        assert!(seq("각") == seq("\u{1100}\u{1161}\u{11A8}"));
    }

    #[test]
    fn test_get_set() {
        let mut s = seq("가나");
        let da = HangulLetter::from_char('다').unwrap();
        assert_eq!(s.set(1, da).map(|l| l.to_syllable()), Some('나'));
        assert_eq!(s.to_string(), "가다");
        assert_eq!(s.set(5, da), None);
        assert_eq!(s.get(2), None);

        s[0] = HangulLetter::from_char('라').unwrap();
        assert_eq!(s.to_string(), "라다");
    }

    #[test]
    fn test_iterators() {
        let s = seq("한국어");
        let collected: HangulSequence = s.iter().copied().collect();
        assert_eq!(collected, s);

        let syllables: String = (&s).into_iter().map(|l| l.to_syllable()).collect();
        assert_eq!(syllables, "한국어");
        assert_eq!(s.into_iter().count(), 3);
    }

    #[test]
    fn test_romanized() {
        assert_eq!(seq("안녕하세요").romanized(" "), "an nyeong ha se yo");
        assert_eq!(seq("안녕하세요").romanized(""), "annyeonghaseyo");
        assert_eq!(seq("").romanized(" "), "");
    }

    #[test]
    fn test_katakanize() {
        assert_eq!(seq("안녕하세요").katakanize().unwrap(), "アンニョンハセヨ");
        // ㅎ 묵음화: 전화 -> 저놔
        assert_eq!(seq("전화").katakanize().unwrap(), "チョヌァ");
        // 규칙 없이 읽으면 교는 탁음
        assert_eq!(seq("학교").katakanize().unwrap(), "ハ(ク)ギョ");
        assert_eq!(seq("").katakanize().unwrap(), "");
    }

    #[test]
    fn test_pronounce_in_katakana() {
        assert_eq!(seq("학교").pronounce_in_katakana().unwrap(), "ハ(ク)ッキョ");
        assert_eq!(seq("안녕하세요").pronounce_in_katakana().unwrap(), "アンニョンハセヨ");
    }

    #[test]
    fn test_phonological_converted() {
        assert_eq!(seq("옷을").phonological_converted().unwrap().to_string(), "오슬");
        assert_eq!(seq("많다").phonological_converted().unwrap().to_string(), "만타");
        assert_eq!(seq("독립").phonological_converted().unwrap().to_string(), "동닙");
    }
}
