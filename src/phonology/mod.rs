//! 표준 발음 규칙 (음운 변동)
//!
//! 규칙은 정해진 순서로 한 번씩 글자열 전체를 앞에서부터 훑는다.
//! 각 규칙은 인접한 두 글자를 고쳐 쓴 뒤 바로 다음 쌍으로 넘어가므로,
//! 고쳐 쓴 뒤 글자가 다음 쌍의 앞 글자가 된다.

pub mod rules;

use log::{debug, error, log_enabled, Level};

use crate::core::error::HangulError;
use crate::core::jamo::JamoTriple;
use crate::core::letter::HangulLetter;
use crate::core::sequence::HangulSequence;

/// 음운 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// 구개음화
    Palatalisation,
    /// 연음
    Resyllabification,
    /// 경음화
    Reinforcement,
    /// 비음화
    Nasalisation,
    /// 유음화
    Assimilation,
    /// 받침 대표음
    EndingConsonantSimplification,
    /// 격음화
    Aspiration,
    /// ㅎ 묵음화 (가타카나 표기 전용, `PIPELINE`에 없음)
    SilentHElision,
}

/// 발음 변환 규칙 적용 순서
pub const PIPELINE: [Rule; 7] = [
    Rule::Palatalisation,
    Rule::Resyllabification,
    Rule::Reinforcement,
    Rule::Nasalisation,
    Rule::Assimilation,
    Rule::EndingConsonantSimplification,
    Rule::Aspiration,
];

type PairRewrite = fn(&JamoTriple, &JamoTriple) -> Option<(JamoTriple, JamoTriple)>;

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Palatalisation => "Palatalisation",
            Rule::Resyllabification => "Resyllabification",
            Rule::Reinforcement => "Reinforcement",
            Rule::Nasalisation => "Nasalisation",
            Rule::Assimilation => "Assimilation",
            Rule::EndingConsonantSimplification => "EndingConsonantSimplification",
            Rule::Aspiration => "Aspiration",
            Rule::SilentHElision => "SilentHElision",
        }
    }

    /// 두 글자 단위 규칙의 치환 함수 (받침 대표음은 한 글자 단위라 없음)
    fn pair_rewrite(self) -> Option<PairRewrite> {
        match self {
            Rule::Palatalisation => Some(rules::palatalise),
            Rule::Resyllabification => Some(rules::resyllabify),
            Rule::Reinforcement => Some(rules::reinforce),
            Rule::Nasalisation => Some(rules::nasalise),
            Rule::Assimilation => Some(rules::assimilate),
            Rule::Aspiration => Some(rules::aspirate),
            Rule::SilentHElision => Some(rules::elide_silent_h),
            Rule::EndingConsonantSimplification => None,
        }
    }

    /// 규칙이 만든 자모로 글자를 다시 조합
    /// 실패는 규칙 테이블의 결함이므로 `RuleInconsistency`로 돌려준다.
    fn rebuild(self, jamos: JamoTriple) -> Result<HangulLetter, HangulError> {
        HangulLetter::from_jamos(jamos).map_err(|e| {
            error!(
                "[{}] 잘못된 글자 생성: {}+{:?}+{} ({})",
                self.name(),
                jamos.leading,
                jamos.vowel,
                jamos.trailing,
                e
            );
            HangulError::RuleInconsistency(self.name())
        })
    }

    /// 글자열에 규칙을 제자리 적용
    pub fn apply(self, sequence: &mut HangulSequence) -> Result<(), HangulError> {
        let before = log_enabled!(Level::Debug).then(|| sequence.to_string());

        match self.pair_rewrite() {
            Some(rewrite) => {
                for i in 1..sequence.len() {
                    let current = sequence[i - 1].jamos();
                    let next = sequence[i].jamos();
                    if let Some((a, b)) = rewrite(&current, &next) {
                        sequence[i - 1] = self.rebuild(a)?;
                        sequence[i] = self.rebuild(b)?;
                    }
                }
            }
            None => {
                for i in 0..sequence.len() {
                    let next = sequence.get(i + 1).map(HangulLetter::jamos);
                    if let Some(simplified) = rules::simplify_ending(&sequence[i].jamos(), next.as_ref()) {
                        sequence[i] = self.rebuild(simplified)?;
                    }
                }
            }
        }

        if let Some(before) = before {
            let after = sequence.to_string();
            if before != after {
                debug!("[{}] {} -> {}", self.name(), before, after);
            }
        }
        Ok(())
    }
}

/// 발음 규칙을 순서대로 모두 적용한 새 글자열
pub fn convert(sequence: &HangulSequence) -> Result<HangulSequence, HangulError> {
    let mut converted = sequence.clone();
    for rule in PIPELINE {
        rule.apply(&mut converted)?;
    }
    Ok(converted)
}
