//! 한글 -> 가타카나 표기
//!
//! 초성+중성 쌍을 가타카나 기본형으로 바꾸고, 종성은 촉음(ッ), 발음(ン)
//! 또는 괄호로 감싼 작은 음절로 덧붙인다.

/// 초성 인덱스별 탁음화 대상
const CHOSEONG_GIYEOK: u32 = 0;
const CHOSEONG_DIGEUT: u32 = 3;
const CHOSEONG_BIEUP: u32 = 7;
const CHOSEONG_JIEUT: u32 = 12;

/// 초성 x 중성 -> 가타카나
///
/// 행: 초성 인덱스 (ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ)
/// 열: 중성 인덱스 (ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ)
#[rustfmt::skip]
const SYLLABLE_KANA: [[&str; 21]; 19] = [
    // ㄱ
    ["カ", "ケ", "キャ", "ケ", "コ", "ケ", "キョ", "ケ", "コ", "クァ", "クェ", "クェ", "キョ", "ク", "クォ", "クェ", "クィ", "キュ", "ク", "キ", "キ"],
    // ㄲ
    ["ッカ", "ッケ", "ッキャ", "ッケ", "ッコ", "ッケ", "ッキョ", "ッケ", "ッコ", "ックァ", "ックェ", "ックェ", "ッキョ", "ック", "ックォ", "ックェ", "ックィ", "ッキュ", "ック", "ッキ", "ッキ"],
    // ㄴ
    ["ナ", "ネ", "ニャ", "ネ", "ノ", "ネ", "ニョ", "ネ", "ノ", "ヌァ", "ヌェ", "ヌェ", "ニョ", "ヌ", "ヌォ", "ヌェ", "ヌィ", "ニュ", "ヌ", "ニ", "ニ"],
    // ㄷ
    ["タ", "テ", "ティャ", "テ", "ト", "テ", "テョ", "テ", "ト", "トァ", "トェ", "トェ", "テョ", "トゥ", "トォ", "トェ", "トィ", "テュ", "トゥ", "ティ", "ティ"],
    // ㄸ
    ["ッタ", "ッテ", "ッティャ", "ッテ", "ット", "ッテ", "ッテョ", "ッテ", "ット", "ットァ", "ットェ", "ットェ", "ッテョ", "ットゥ", "ットォ", "ットェ", "ットィ", "ッテュ", "ットゥ", "ットィ", "ッティ"],
    // ㄹ
    ["ラ", "レ", "リャ", "レ", "ロ", "レ", "リョ", "レ", "ロ", "ルァ", "ルェ", "ルェ", "リョ", "ル", "ルォ", "ルェ", "ルィ", "リュ", "ル", "リ", "リ"],
    // ㅁ
    ["マ", "メ", "ミャ", "メ", "モ", "メ", "ミョ", "メ", "モ", "ムァ", "ムェ", "ムェ", "ミョ", "ム", "ムォ", "ムェ", "ムィ", "ミュ", "ム", "ミ", "ミ"],
    // ㅂ
    ["パ", "ペ", "ピャ", "ペ", "ポ", "ペ", "ピョ", "ペ", "ポ", "プァ", "プェ", "プェ", "ピョ", "プ", "ポォ", "プェ", "プィ", "ピュ", "プ", "ピ", "ピ"],
    // ㅃ
    ["ッパ", "ッペ", "ッピャ", "ッペ", "ッポ", "ッペ", "ッピョ", "ッペ", "ッポ", "ップァ", "ップェ", "ップェ", "ッピョ", "ップ", "ップォ", "ップェ", "ップィ", "ッピュ", "ップ", "ッピ", "ッピ"],
    // ㅅ
    ["サ", "セ", "シャ", "セ", "ソ", "セ", "ショ", "セ", "ソ", "スァ", "スェ", "スェ", "ショ", "ス", "スォ", "スェ", "スィ", "シュ", "ス", "シ", "シ"],
    // ㅆ
    ["ッサ", "ッセ", "ッシャ", "ッセ", "ッソ", "ッセ", "ッショ", "ッセ", "ッソ", "ッスァ", "ッスェ", "ッスェ", "ッショ", "ッス", "ッスォ", "ッスェ", "ッスィ", "ッシュ", "ッス", "ッシ", "ッシ"],
    // ㅇ
    ["ア", "エ", "ヤ", "イェ", "オ", "エ", "ヨ", "イェ", "オ", "ワ", "ウェ", "ウェ", "ヨ", "ウ", "ウォ", "ウェ", "ウィ", "ユ", "ウ", "ウィ", "イ"],
    // ㅈ
    ["チャ", "チェ", "チャ", "チェ", "チョ", "チェ", "チョ", "チェ", "チョ", "チュァ", "チュェ", "チェ", "チョ", "チュ", "チョ", "チェ", "チュィ", "チュ", "チュ", "チィ", "チ"],
    // ㅉ
    ["ッチャ", "ッチェ", "ッチャ", "ッチェ", "ッチョ", "ッチェ", "ッチョ", "ッチェ", "ッチョ", "ッチャ", "ッチェ", "ッチェ", "ッチョ", "ッチュ", "ッチョ", "ッチェ", "ッチィ", "ッチュ", "ッチュ", "ッチィ", "ッチ"],
    // ㅊ
    ["チャ", "チェ", "チャ", "チェ", "チョ", "チェ", "チョ", "チェ", "チョ", "チュァ", "チュェ", "チェ", "チョ", "チュ", "チョ", "チェ", "チュィ", "チュ", "チュ", "チィ", "チ"],
    // ㅋ
    ["カ", "ケ", "キャ", "ケ", "コ", "ケ", "キョ", "ケ", "コ", "クァ", "クェ", "クェ", "キョ", "ク", "クォ", "クェ", "クィ", "キュ", "ク", "キ", "キ"],
    // ㅌ
    ["タ", "テ", "ティャ", "テ", "ト", "テ", "テョ", "テ", "ト", "トァ", "トェ", "トェ", "テョ", "トゥ", "トォ", "トェ", "トゥィ", "テュ", "トゥ", "トィ", "ティ"],
    // ㅍ
    ["パ", "ペ", "ピャ", "ペ", "ポ", "ペ", "ピョ", "ペ", "ポ", "プァ", "プェ", "プェ", "ピョ", "プ", "プォ", "プェ", "プィ", "ピュ", "プ", "ピ", "ピ"],
    // ㅎ
    ["ハ", "ヘ", "ヒャ", "ヘ", "ホ", "ヘ", "ヒョ", "ヘ", "ホ", "ファ", "フェ", "フェ", "ヒョ", "フ", "フォ", "フェ", "フィ", "ヒュ", "フ", "ヒ", "ヒ"],
];

/// 종성 -> 가타카나 (종성 인덱스 순서, 0 = 종성 없음)
const JONGSEONG_KANA: [&str; 28] = [
    "",     // 없음
    "(ク)", // ㄱ
    "(ク)", // ㄲ
    "(ク)", // ㄳ
    "ン",   // ㄴ
    "ン",   // ㄵ
    "ン",   // ㄶ
    "ッ",   // ㄷ
    "(ル)", // ㄹ
    "(ク)", // ㄺ
    "(ム)", // ㄻ
    "(ル)", // ㄼ
    "(ル)", // ㄽ
    "(ル)", // ㄾ
    "(プ)", // ㄿ
    "(ル)", // ㅀ
    "(ム)", // ㅁ
    "(プ)", // ㅂ
    "(プ)", // ㅄ
    "ッ",   // ㅅ
    "ッ",   // ㅆ
    "ン",   // ㅇ
    "ッ",   // ㅈ
    "ッ",   // ㅊ
    "(ク)", // ㅋ
    "ッ",   // ㅌ
    "(プ)", // ㅍ
    "ッ",   // ㅎ
];

/// 반탁음(パ행) -> 탁음(バ행)
fn voice_semi_voiced(c: char) -> char {
    match c {
        'パ' => 'バ',
        'ピ' => 'ビ',
        'プ' => 'ブ',
        'ペ' => 'ベ',
        'ポ' => 'ボ',
        other => other,
    }
}

/// 청음 -> 탁음 (カ행, タ행)
fn voice_unvoiced(c: char) -> char {
    match c {
        'カ' => 'ガ',
        'キ' => 'ギ',
        'ク' => 'グ',
        'ケ' => 'ゲ',
        'コ' => 'ゴ',
        'タ' => 'ダ',
        'テ' => 'デ',
        'ト' => 'ド',
        other => other,
    }
}

/// 초성에 따른 탁음화
/// ㅂ은 반탁음을 탁음으로, ㄱ/ㄷ은 첫 글자를 탁음으로, ㅈ은 チ를 ジ로 바꾼다.
fn vocalize(choseong: u32, kana: &str) -> String {
    match choseong {
        CHOSEONG_BIEUP => kana.chars().map(voice_semi_voiced).collect(),
        CHOSEONG_GIYEOK | CHOSEONG_DIGEUT => {
            let mut chars = kana.chars();
            match chars.next() {
                Some(first) => std::iter::once(voice_unvoiced(first)).chain(chars).collect(),
                None => String::new(),
            }
        }
        CHOSEONG_JIEUT => kana.replace('チ', "ジ"),
        _ => kana.to_string(),
    }
}

/// 초성/중성/종성 인덱스로 한 음절의 가타카나 표기 생성
///
/// `voiced`가 참이면 단자음 초성(ㄱ ㄷ ㅂ ㅈ)을 탁음으로 읽는다.
/// 단어 첫 글자는 보통 `voiced = false`로 호출한다.
pub fn katakanize_syllable(choseong: u32, jungseong: u32, jongseong: u32, voiced: bool) -> String {
    let base = SYLLABLE_KANA
        .get(choseong as usize)
        .and_then(|row| row.get(jungseong as usize))
        .copied()
        .unwrap_or("");

    let mut kana = if voiced {
        vocalize(choseong, base)
    } else {
        base.to_string()
    };

    if let Some(suffix) = JONGSEONG_KANA.get(jongseong as usize) {
        kana.push_str(suffix);
    }
    kana
}

/// 연속된 촉음 정리 (ッッ -> ッ)
pub fn collapse_sokuon(kana: &str) -> String {
    kana.replace("ッッ", "ッ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_syllables() {
        // 가, 나, 아
        assert_eq!(katakanize_syllable(0, 0, 0, false), "カ");
        assert_eq!(katakanize_syllable(2, 0, 0, false), "ナ");
        assert_eq!(katakanize_syllable(11, 0, 0, false), "ア");
        // 의, 얘
        assert_eq!(katakanize_syllable(11, 19, 0, false), "ウィ");
        assert_eq!(katakanize_syllable(11, 3, 0, false), "イェ");
    }

    #[test]
    fn test_trailing_suffix() {
        // 먹
        assert_eq!(katakanize_syllable(6, 4, 1, false), "モ(ク)");
        // 좋
        assert_eq!(katakanize_syllable(12, 8, 27, false), "チョッ");
        // 안
        assert_eq!(katakanize_syllable(11, 0, 4, false), "アン");
        // 잘
        assert_eq!(katakanize_syllable(12, 0, 8, false), "チャ(ル)");
    }

    #[test]
    fn test_voicing() {
        // 가 -> ガ, 교 -> ギョ
        assert_eq!(katakanize_syllable(0, 0, 0, true), "ガ");
        assert_eq!(katakanize_syllable(0, 12, 0, true), "ギョ");
        // 다, 두
        assert_eq!(katakanize_syllable(3, 0, 0, true), "ダ");
        assert_eq!(katakanize_syllable(3, 13, 0, true), "ドゥ");
        // 바, 봐
        assert_eq!(katakanize_syllable(7, 0, 0, true), "バ");
        assert_eq!(katakanize_syllable(7, 9, 0, true), "ブァ");
        // 지, 주
        assert_eq!(katakanize_syllable(12, 20, 0, true), "ジ");
        assert_eq!(katakanize_syllable(12, 13, 0, true), "ジュ");
    }

    #[test]
    fn test_voicing_skips_other_leading() {
        // 까, 하, 차 는 탁음화 대상이 아님
        assert_eq!(katakanize_syllable(1, 0, 0, true), "ッカ");
        assert_eq!(katakanize_syllable(18, 0, 0, true), "ハ");
        assert_eq!(katakanize_syllable(14, 0, 0, true), "チャ");
    }

    #[test]
    fn test_collapse_sokuon() {
        assert_eq!(collapse_sokuon("マッッタ"), "マッタ");
        assert_eq!(collapse_sokuon("ハ(ク)ッキョ"), "ハ(ク)ッキョ");
    }
}
