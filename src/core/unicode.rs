//! 유니코드 한글 조합/분해 유틸리티
//!
//! 완성형 음절(U+AC00~U+D7A3)과 첫가끝 자모(U+1100 영역) 사이의 변환,
//! 자음 조합과 초성/종성 코드포인트 사이의 변환을 담당합니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::error::HangulError;
use crate::core::jamo::{Cluster, Consonant, JamoTriple, Vowel};

use Consonant::*;

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 자모 시작 (ᄀ)
const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 자모 시작 (ᅡ)
const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 자모 시작 - 1 (종성 인덱스 0 = 종성 없음)
const JONGSEONG_BASE: u32 = 0x11A7;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서의 자음 조합
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
const CHOSEONG_CLUSTERS: [Cluster; 19] = [
    Cluster::Single(Giyeok),
    Cluster::Double(Giyeok, Giyeok),
    Cluster::Single(Nieun),
    Cluster::Single(Digeut),
    Cluster::Double(Digeut, Digeut),
    Cluster::Single(Rieul),
    Cluster::Single(Mieum),
    Cluster::Single(Bieup),
    Cluster::Double(Bieup, Bieup),
    Cluster::Single(Siot),
    Cluster::Double(Siot, Siot),
    Cluster::Single(Ieung),
    Cluster::Single(Jieut),
    Cluster::Double(Jieut, Jieut),
    Cluster::Single(Chieut),
    Cluster::Single(Kieuk),
    Cluster::Single(Tieut),
    Cluster::Single(Pieup),
    Cluster::Single(Hieut),
];

/// 종성 인덱스 1~27 순서의 자음 조합
/// ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9) ㄻ(10)
/// ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19) ㅆ(20)
/// ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
const JONGSEONG_CLUSTERS: [Cluster; 27] = [
    Cluster::Single(Giyeok),
    Cluster::Double(Giyeok, Giyeok),
    Cluster::Double(Giyeok, Siot),
    Cluster::Single(Nieun),
    Cluster::Double(Nieun, Jieut),
    Cluster::Double(Nieun, Hieut),
    Cluster::Single(Digeut),
    Cluster::Single(Rieul),
    Cluster::Double(Rieul, Giyeok),
    Cluster::Double(Rieul, Mieum),
    Cluster::Double(Rieul, Bieup),
    Cluster::Double(Rieul, Siot),
    Cluster::Double(Rieul, Tieut),
    Cluster::Double(Rieul, Pieup),
    Cluster::Double(Rieul, Hieut),
    Cluster::Single(Mieum),
    Cluster::Single(Bieup),
    Cluster::Double(Bieup, Siot),
    Cluster::Single(Siot),
    Cluster::Double(Siot, Siot),
    Cluster::Single(Ieung),
    Cluster::Single(Jieut),
    Cluster::Single(Chieut),
    Cluster::Single(Kieuk),
    Cluster::Single(Tieut),
    Cluster::Single(Pieup),
    Cluster::Single(Hieut),
];

lazy_static! {
    /// 자음 조합 -> 초성 인덱스
    static ref CHOSEONG_INDEX: HashMap<Cluster, u32> = CHOSEONG_CLUSTERS
        .iter()
        .enumerate()
        .map(|(i, cluster)| (*cluster, i as u32))
        .collect();

    /// 자음 조합 -> 종성 인덱스 (1~27)
    static ref JONGSEONG_INDEX: HashMap<Cluster, u32> = JONGSEONG_CLUSTERS
        .iter()
        .enumerate()
        .map(|(i, cluster)| (*cluster, i as u32 + 1))
        .collect();
}

/// 완성형 한글 음절인지 확인 (U+AC00 ~ U+D7A3)
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성 자모인지 확인 (U+1100 ~ U+1112)
pub fn is_choseong_jamo(c: char) -> bool {
    (CHOSEONG_BASE..CHOSEONG_BASE + CHOSEONG_COUNT).contains(&(c as u32))
}

/// 중성 자모인지 확인 (U+1161 ~ U+1175)
pub fn is_jungseong_jamo(c: char) -> bool {
    (JUNGSEONG_BASE..JUNGSEONG_BASE + JUNGSEONG_COUNT).contains(&(c as u32))
}

/// 종성 자모인지 확인 (U+11A8 ~ U+11C2)
pub fn is_jongseong_jamo(c: char) -> bool {
    (JONGSEONG_BASE + 1..JONGSEONG_BASE + JONGSEONG_COUNT).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Result<char, HangulError> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return Err(HangulError::InvalidJamoSequence);
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code).ok_or(HangulError::InvalidJamoSequence)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Result<(u32, u32, u32), HangulError> {
    if !is_syllable(c) {
        return Err(HangulError::InvalidCharacter);
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / JONGSEONG_COUNT / JUNGSEONG_COUNT;
    Ok((choseong, jungseong, jongseong))
}

/// 자음 조합 -> 초성 인덱스
pub fn choseong_index(cluster: Cluster) -> Result<u32, HangulError> {
    CHOSEONG_INDEX
        .get(&cluster)
        .copied()
        .ok_or(HangulError::InvalidJamoSequence)
}

/// 자음 조합 -> 종성 인덱스 (종성 없음 = 0)
pub fn jongseong_index(cluster: Cluster) -> Result<u32, HangulError> {
    if cluster.is_empty() {
        return Ok(0);
    }
    JONGSEONG_INDEX
        .get(&cluster)
        .copied()
        .ok_or(HangulError::InvalidJamoSequence)
}

/// 초성 인덱스 -> 자음 조합
pub fn choseong_cluster(index: u32) -> Option<Cluster> {
    CHOSEONG_CLUSTERS.get(index as usize).copied()
}

/// 종성 인덱스 -> 자음 조합 (0 = 종성 없음)
pub fn jongseong_cluster(index: u32) -> Option<Cluster> {
    match index {
        0 => Some(Cluster::Empty),
        i => JONGSEONG_CLUSTERS.get(i as usize - 1).copied(),
    }
}

/// 구조화된 자모를 완성형 음절로 조합
pub fn compose(jamos: &JamoTriple) -> Result<char, HangulError> {
    let choseong = choseong_index(jamos.leading)?;
    let jongseong = jongseong_index(jamos.trailing)?;
    compose_syllable(choseong, jamos.vowel.index(), jongseong)
}

/// 완성형 음절을 구조화된 자모로 분해
pub fn decompose(c: char) -> Result<JamoTriple, HangulError> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    let leading = choseong_cluster(cho).ok_or(HangulError::InvalidCharacter)?;
    let vowel = Vowel::from_index(jung).ok_or(HangulError::InvalidCharacter)?;
    let trailing = jongseong_cluster(jong).ok_or(HangulError::InvalidCharacter)?;
    Ok(JamoTriple::new(leading, vowel, trailing))
}

/// 초성/중성/종성 인덱스 -> 첫가끝 자모 문자열 (종성 인덱스 0이면 2 코드포인트)
pub fn jamo_string(choseong: u32, jungseong: u32, jongseong: u32) -> String {
    let mut codes = vec![CHOSEONG_BASE + choseong, JUNGSEONG_BASE + jungseong];
    if jongseong > 0 {
        codes.push(JONGSEONG_BASE + jongseong);
    }
    codes.into_iter().filter_map(char::from_u32).collect()
}

/// 첫가끝 자모 하나 (초성, 중성 또는 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoScalar {
    Choseong(Cluster),
    Jungseong(Vowel),
    Jongseong(Cluster),
}

impl JamoScalar {
    /// 코드포인트를 자모로 변환
    /// 세 자모 영역 밖이면 `InvalidUnicodeScalar`
    pub fn from_char(c: char) -> Result<Self, HangulError> {
        let code = c as u32;
        let scalar = if is_choseong_jamo(c) {
            choseong_cluster(code - CHOSEONG_BASE).map(JamoScalar::Choseong)
        } else if is_jungseong_jamo(c) {
            Vowel::from_index(code - JUNGSEONG_BASE).map(JamoScalar::Jungseong)
        } else if is_jongseong_jamo(c) {
            jongseong_cluster(code - JONGSEONG_BASE).map(JamoScalar::Jongseong)
        } else {
            None
        };
        scalar.ok_or(HangulError::InvalidUnicodeScalar)
    }

    /// 자모를 코드포인트로 변환
    /// 초성/종성 테이블에 없는 조합이면 `InvalidJamoSequence` (예: 종성 ㄸ)
    pub fn to_char(&self) -> Result<char, HangulError> {
        let code = match *self {
            JamoScalar::Choseong(cluster) => CHOSEONG_BASE + choseong_index(cluster)?,
            JamoScalar::Jungseong(vowel) => JUNGSEONG_BASE + vowel.index(),
            JamoScalar::Jongseong(cluster) => {
                if cluster.is_empty() {
                    return Err(HangulError::InvalidJamoSequence);
                }
                JONGSEONG_BASE + jongseong_index(cluster)?
            }
        };
        char::from_u32(code).ok_or(HangulError::InvalidJamoSequence)
    }
}

/// 문자 단위 분류 (한글 자소 클러스터 규칙용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitClass {
    L,
    V,
    T,
    Lv,
    Lvt,
    Other,
}

fn classify(c: char) -> UnitClass {
    if is_choseong_jamo(c) {
        UnitClass::L
    } else if is_jungseong_jamo(c) {
        UnitClass::V
    } else if is_jongseong_jamo(c) {
        UnitClass::T
    } else if is_syllable(c) {
        if (c as u32 - HANGUL_SYLLABLE_BASE) % JONGSEONG_COUNT == 0 {
            UnitClass::Lv
        } else {
            UnitClass::Lvt
        }
    } else {
        UnitClass::Other
    }
}

fn joins(prev: UnitClass, next: UnitClass) -> bool {
    use UnitClass::*;
    matches!(
        (prev, next),
        (L, L | V | Lv | Lvt) | (Lv | V, V | T) | (Lvt | T, T)
    )
}

/// 문자열을 글자 단위로 자름
///
/// 첫가끝 자모 연속(ᄀ+ᅡ+ᆨ)은 한 단위로 묶고, 나머지 문자는 각각 한 단위
pub fn split_units(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut prev: Option<UnitClass> = None;

    for (i, c) in text.char_indices() {
        let class = classify(c);
        if let Some(p) = prev {
            if !joins(p, class) {
                units.push(&text[start..i]);
                start = i;
            }
        }
        prev = Some(class);
    }
    if prev.is_some() {
        units.push(&text[start..]);
    }

    units
}
