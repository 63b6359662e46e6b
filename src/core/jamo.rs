//! 한글 자모 목록 (자음 14개, 모음 21개, 자음 조합)

/// 기본 자음 14개
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Consonant {
    Giyeok, // ㄱ
    Nieun,  // ㄴ
    Digeut, // ㄷ
    Rieul,  // ㄹ
    Mieum,  // ㅁ
    Bieup,  // ㅂ
    Siot,   // ㅅ
    Ieung,  // ㅇ
    Jieut,  // ㅈ
    Chieut, // ㅊ
    Kieuk,  // ㅋ
    Tieut,  // ㅌ
    Pieup,  // ㅍ
    Hieut,  // ㅎ
}

impl Consonant {
    /// 호환용 자모 문자 (로그/표시용)
    pub fn to_compat_char(self) -> char {
        match self {
            Consonant::Giyeok => 'ㄱ',
            Consonant::Nieun => 'ㄴ',
            Consonant::Digeut => 'ㄷ',
            Consonant::Rieul => 'ㄹ',
            Consonant::Mieum => 'ㅁ',
            Consonant::Bieup => 'ㅂ',
            Consonant::Siot => 'ㅅ',
            Consonant::Ieung => 'ㅇ',
            Consonant::Jieut => 'ㅈ',
            Consonant::Chieut => 'ㅊ',
            Consonant::Kieuk => 'ㅋ',
            Consonant::Tieut => 'ㅌ',
            Consonant::Pieup => 'ㅍ',
            Consonant::Hieut => 'ㅎ',
        }
    }
}

/// 모음 21개
///
/// 선언 순서 = 유니코드 중성 순서 (ㅏ U+1161 ~ ㅣ U+1175)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vowel {
    A,   // ㅏ
    Ae,  // ㅐ
    Ya,  // ㅑ
    Yae, // ㅒ
    Eo,  // ㅓ
    E,   // ㅔ
    Yeo, // ㅕ
    Ye,  // ㅖ
    O,   // ㅗ
    Wa,  // ㅘ
    Wae, // ㅙ
    Oe,  // ㅚ
    Yo,  // ㅛ
    U,   // ㅜ
    Wo,  // ㅝ
    We,  // ㅞ
    Wi,  // ㅟ
    Yu,  // ㅠ
    Eu,  // ㅡ
    Ui,  // ㅢ
    I,   // ㅣ
}

impl Vowel {
    /// 중성 인덱스 순서의 전체 모음
    pub const ALL: [Vowel; 21] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    /// 중성 인덱스 (0~20)
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 중성 인덱스 -> 모음
    pub fn from_index(index: u32) -> Option<Vowel> {
        Self::ALL.get(index as usize).copied()
    }
}

/// 자음 0~2개로 이루어진 초성/종성 조합
///
/// 종성 없음은 `Empty`로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cluster {
    #[default]
    Empty,
    Single(Consonant),
    Double(Consonant, Consonant),
}

impl Cluster {
    pub fn len(&self) -> usize {
        match self {
            Cluster::Empty => 0,
            Cluster::Single(_) => 1,
            Cluster::Double(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cluster::Empty)
    }

    /// 첫 번째 자음
    pub fn first(&self) -> Option<Consonant> {
        match *self {
            Cluster::Empty => None,
            Cluster::Single(c) | Cluster::Double(c, _) => Some(c),
        }
    }

    /// 마지막 자음
    pub fn last(&self) -> Option<Consonant> {
        match *self {
            Cluster::Empty => None,
            Cluster::Single(c) | Cluster::Double(_, c) => Some(c),
        }
    }

    /// 마지막 자음을 뺀 조합
    pub fn without_last(&self) -> Cluster {
        match *self {
            Cluster::Empty | Cluster::Single(_) => Cluster::Empty,
            Cluster::Double(c, _) => Cluster::Single(c),
        }
    }

    /// 단일 자음을 쌍자음으로 (ㄱ -> ㄲ)
    pub fn doubled(&self) -> Cluster {
        match *self {
            Cluster::Single(c) => Cluster::Double(c, c),
            other => other,
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Cluster::Empty => Ok(()),
            Cluster::Single(c) => write!(f, "{}", c.to_compat_char()),
            Cluster::Double(a, b) => write!(f, "{}{}", a.to_compat_char(), b.to_compat_char()),
        }
    }
}

/// 구조화된 한 음절의 자모 (초성, 중성, 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JamoTriple {
    pub leading: Cluster,
    pub vowel: Vowel,
    pub trailing: Cluster,
}

impl JamoTriple {
    pub fn new(leading: Cluster, vowel: Vowel, trailing: Cluster) -> Self {
        Self {
            leading,
            vowel,
            trailing,
        }
    }

    /// 초성이 ㅇ(소리 없는 초성)인지 확인
    pub fn starts_with_vowel(&self) -> bool {
        self.leading == Cluster::Single(Consonant::Ieung)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_index_roundtrip() {
        for (i, v) in Vowel::ALL.iter().enumerate() {
            assert_eq!(v.index(), i as u32);
            assert_eq!(Vowel::from_index(i as u32), Some(*v));
        }
        assert_eq!(Vowel::from_index(21), None);
        assert_eq!(Vowel::I.index(), 20);
    }

    #[test]
    fn test_cluster_accessors() {
        let lg = Cluster::Double(Consonant::Rieul, Consonant::Giyeok);
        assert_eq!(lg.len(), 2);
        assert_eq!(lg.first(), Some(Consonant::Rieul));
        assert_eq!(lg.last(), Some(Consonant::Giyeok));
        assert_eq!(lg.without_last(), Cluster::Single(Consonant::Rieul));

        let g = Cluster::Single(Consonant::Giyeok);
        assert_eq!(g.without_last(), Cluster::Empty);
        assert_eq!(g.doubled(), Cluster::Double(Consonant::Giyeok, Consonant::Giyeok));

        assert!(Cluster::Empty.is_empty());
        assert_eq!(Cluster::Empty.first(), None);
        assert_eq!(Cluster::Empty.last(), None);
        assert_eq!(Cluster::Empty.doubled(), Cluster::Empty);
    }

    #[test]
    fn test_cluster_display() {
        assert_eq!(Cluster::Empty.to_string(), "");
        assert_eq!(Cluster::Single(Consonant::Hieut).to_string(), "ㅎ");
        assert_eq!(
            Cluster::Double(Consonant::Bieup, Consonant::Siot).to_string(),
            "ㅂㅅ"
        );
    }

    #[test]
    fn test_starts_with_vowel() {
        let a = JamoTriple::new(Cluster::Single(Consonant::Ieung), Vowel::A, Cluster::Empty);
        let ga = JamoTriple::new(Cluster::Single(Consonant::Giyeok), Vowel::A, Cluster::Empty);
        assert!(a.starts_with_vowel());
        assert!(!ga.starts_with_vowel());
    }
}
