//! 국어의 로마자 표기법 (음절 단위 직접 치환)

/// 초성 로마자 (초성 인덱스 순서)
const CHOSEONG_ROMAN: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t",
    "p", "h",
];

/// 중성 로마자 (중성 인덱스 순서)
const JUNGSEONG_ROMAN: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo",
    "we", "wi", "yu", "eu", "ui", "i",
];

/// 종성 로마자 (종성 인덱스 순서, 0 = 종성 없음)
const JONGSEONG_ROMAN: [&str; 28] = [
    "",   // 없음
    "k",  // ㄱ
    "kk", // ㄲ
    "ks", // ㄳ
    "n",  // ㄴ
    "nj", // ㄵ
    "nh", // ㄶ
    "t",  // ㄷ
    "l",  // ㄹ
    "lk", // ㄺ
    "lm", // ㄻ
    "lp", // ㄼ
    "ls", // ㄽ
    "lt", // ㄾ
    "lp", // ㄿ
    "lh", // ㅀ
    "m",  // ㅁ
    "p",  // ㅂ
    "ps", // ㅄ
    "s",  // ㅅ
    "ss", // ㅆ
    "ng", // ㅇ
    "j",  // ㅈ
    "ch", // ㅊ
    "k",  // ㅋ
    "t",  // ㅌ
    "p",  // ㅍ
    "h",  // ㅎ
];

/// 초성/중성/종성 인덱스로 한 음절의 로마자 표기 생성
pub fn romanize_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> String {
    fn lookup(table: &[&'static str], index: u32) -> &'static str {
        table.get(index as usize).copied().unwrap_or("")
    }

    let mut roman = String::with_capacity(6);
    roman.push_str(lookup(&CHOSEONG_ROMAN, choseong));
    roman.push_str(lookup(&JUNGSEONG_ROMAN, jungseong));
    roman.push_str(lookup(&JONGSEONG_ROMAN, jongseong));
    roman
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_romanize_syllable() {
        assert_eq!(romanize_syllable(0, 0, 0), "ga");
        assert_eq!(romanize_syllable(11, 0, 4), "an");
        assert_eq!(romanize_syllable(2, 6, 21), "nyeong");
        assert_eq!(romanize_syllable(18, 20, 27), "hih");
    }

    #[test]
    fn test_silent_ieung() {
        assert_eq!(romanize_syllable(11, 20, 0), "i");
        assert_eq!(romanize_syllable(11, 19, 0), "ui");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(romanize_syllable(19, 21, 28), "");
    }
}
