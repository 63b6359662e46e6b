//! 한글 처리 에러 정의

/// 한글 문자/자모 처리 에러
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangulError {
    /// 문자열 길이 오류 (현재 규칙에서는 사용하지 않음)
    InvalidStringLength,
    /// 완성형 음절도, 유효한 자모 조합도 아닌 문자
    InvalidCharacter,
    /// 초성/중성/종성 자모 영역 밖의 코드포인트
    InvalidUnicodeScalar,
    /// 초성/종성 테이블에 없는 자음 조합
    InvalidJamoSequence,
    /// 음운 규칙이 유효하지 않은 글자를 만들어냄 (규칙 테이블 결함)
    RuleInconsistency(&'static str),
}

impl std::fmt::Display for HangulError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HangulError::InvalidStringLength => write!(f, "잘못된 문자열 길이"),
            HangulError::InvalidCharacter => write!(f, "한글 음절이 아닌 문자"),
            HangulError::InvalidUnicodeScalar => write!(f, "한글 자모 영역이 아닌 코드포인트"),
            HangulError::InvalidJamoSequence => write!(f, "유효하지 않은 자음 조합"),
            HangulError::RuleInconsistency(rule) => {
                write!(f, "음운 규칙 결함: {} 규칙이 잘못된 글자를 생성함", rule)
            }
        }
    }
}

impl std::error::Error for HangulError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(HangulError::InvalidCharacter.to_string(), "한글 음절이 아닌 문자");
        assert!(HangulError::RuleInconsistency("Aspiration")
            .to_string()
            .contains("Aspiration"));
    }

    #[test]
    fn test_defect_is_distinct_from_input_errors() {
        let defect = HangulError::RuleInconsistency("Resyllabification");
        assert_ne!(defect, HangulError::InvalidJamoSequence);
        assert_ne!(defect, HangulError::InvalidCharacter);
    }
}
