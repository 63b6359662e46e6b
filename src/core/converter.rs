//! 문자열 단위 통합 변환기
//!
//! 입력을 한글 구간과 그 밖의 구간으로 나눈 뒤, 한글 구간만 변환하고
//! 나머지(라틴 문자, 숫자, 공백, 문장 부호)는 그대로 이어 붙인다.

use crate::config::OutputMode;
use crate::core::error::HangulError;
use crate::core::letter::HangulLetter;
use crate::core::sequence::HangulSequence;
use crate::core::unicode::split_units;

/// 입력 문자열의 한 구간
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRun<'a> {
    /// 한글 글자만으로 이루어진 구간
    Hangul(HangulSequence),
    /// 한글이 아닌 구간 (원문 그대로)
    Other(&'a str),
}

/// 문자열을 한글 구간과 비한글 구간으로 분리
pub fn split_runs(text: &str) -> Vec<TextRun<'_>> {
    let mut runs = Vec::new();
    let mut letters: Vec<HangulLetter> = Vec::new();
    let mut other_start: Option<usize> = None;
    let mut offset = 0;

    for unit in split_units(text) {
        match HangulLetter::parse(unit) {
            Ok(letter) => {
                if let Some(start) = other_start.take() {
                    runs.push(TextRun::Other(&text[start..offset]));
                }
                letters.push(letter);
            }
            Err(_) => {
                if !letters.is_empty() {
                    runs.push(TextRun::Hangul(letters.drain(..).collect()));
                }
                other_start.get_or_insert(offset);
            }
        }
        offset += unit.len();
    }

    if let Some(start) = other_start {
        runs.push(TextRun::Other(&text[start..]));
    }
    if !letters.is_empty() {
        runs.push(TextRun::Hangul(letters.into_iter().collect()));
    }

    runs
}

/// 한글 구간마다 `f`를 적용하고 나머지 구간은 그대로 이어 붙임
fn map_hangul_runs<F>(text: &str, mut f: F) -> Result<String, HangulError>
where
    F: FnMut(&HangulSequence) -> Result<String, HangulError>,
{
    let mut output = String::with_capacity(text.len());
    for run in split_runs(text) {
        match run {
            TextRun::Hangul(sequence) => output.push_str(&f(&sequence)?),
            TextRun::Other(other) => output.push_str(other),
        }
    }
    Ok(output)
}

/// 로마자 표기 (한글 글자 사이에 separator)
/// 한글이 아닌 문자는 그대로 유지
pub fn romanize(text: &str, separator: &str) -> String {
    split_runs(text)
        .into_iter()
        .map(|run| match run {
            TextRun::Hangul(sequence) => sequence.romanized(separator),
            TextRun::Other(other) => other.to_string(),
        })
        .collect()
}

/// 가타카나 표기 (한글 구간마다 첫 글자는 청음)
pub fn katakanize(text: &str) -> Result<String, HangulError> {
    map_hangul_runs(text, HangulSequence::katakanize)
}

/// 발음 규칙 적용 후 가타카나 표기
pub fn pronounce_in_katakana(text: &str) -> Result<String, HangulError> {
    map_hangul_runs(text, HangulSequence::pronounce_in_katakana)
}

/// 발음 규칙 적용 결과 (완성형)
pub fn phonological_convert(text: &str) -> Result<String, HangulError> {
    map_hangul_runs(text, |sequence| {
        sequence
            .phonological_converted()
            .map(|converted| converted.to_string())
    })
}

/// 출력 모드에 따라 변환
pub fn render(text: &str, mode: OutputMode, separator: &str) -> Result<String, HangulError> {
    match mode {
        OutputMode::Romanize => Ok(romanize(text, separator)),
        OutputMode::Katakana => katakanize(text),
        OutputMode::Pronounce => pronounce_in_katakana(text),
        OutputMode::Convert => phonological_convert(text),
    }
}
