//! 음운 규칙별 자모 치환
//!
//! 각 함수는 인접한 두 글자(앞 글자 A, 뒤 글자 B)의 자모를 받아,
//! 규칙이 적용되면 바뀐 두 글자를, 아니면 `None`을 돌려준다.

use crate::core::jamo::{Cluster, Consonant, JamoTriple, Vowel};

use Consonant::*;

type Pair = (JamoTriple, JamoTriple);

/// A의 종성 마지막 자음을 떼어 B의 초성 자리에 `moved`로 넣는다.
fn carry_last(a: &JamoTriple, b: &JamoTriple, moved: Consonant) -> Pair {
    (
        JamoTriple::new(a.leading, a.vowel, a.trailing.without_last()),
        JamoTriple::new(Cluster::Single(moved), b.vowel, b.trailing),
    )
}

/// 구개음화: 굳이 -> 구지, 같이 -> 가치, 묻히다 -> 무치다
pub fn palatalise(a: &JamoTriple, b: &JamoTriple) -> Option<Pair> {
    if b.vowel != Vowel::I {
        return None;
    }
    let mapped = match (b.leading, a.trailing.last()) {
        (Cluster::Single(Ieung), Some(Digeut)) => Jieut,
        (Cluster::Single(Ieung), Some(Tieut)) => Chieut,
        (Cluster::Single(Hieut), Some(Digeut)) => Chieut,
        _ => return None,
    };
    Some(carry_last(a, b, mapped))
}

/// 쌍받침 중 통째로 넘어가는 겹자음
fn is_geminate(first: Consonant, second: Consonant) -> bool {
    first == second && matches!(first, Giyeok | Digeut | Bieup | Siot | Chieut)
}

/// 연음: 옷을 -> 오슬, 앉아 -> 안자, 있어요 -> 이써요
///
/// 홑받침 ㅎ은 B와 상관없이 탈락한다 (좋아 -> 조아, 좋다 -> 조다).
/// 그 밖에는 B가 모음으로 시작할 때만 적용하며, 겹받침의 ㅎ은 넘기지 않고
/// 탈락시키고 (싫어 -> 시러), 받침 ㅇ은 그대로 둔다 (생일).
pub fn resyllabify(a: &JamoTriple, b: &JamoTriple) -> Option<Pair> {
    if a.trailing == Cluster::Single(Hieut) {
        return Some((JamoTriple::new(a.leading, a.vowel, Cluster::Empty), *b));
    }
    if !b.starts_with_vowel() {
        return None;
    }

    let trailing = match a.trailing.last() {
        Some(Hieut) => a.trailing.without_last(),
        _ => a.trailing,
    };

    let (kept, moved) = match trailing {
        Cluster::Empty | Cluster::Single(Ieung) => {
            if trailing == a.trailing {
                return None;
            }
            (trailing, b.leading)
        }
        Cluster::Double(first, second) if !is_geminate(first, second) => {
            (Cluster::Single(first), Cluster::Single(second))
        }
        whole => (Cluster::Empty, whole),
    };

    Some((
        JamoTriple::new(a.leading, a.vowel, kept),
        JamoTriple::new(moved, b.vowel, b.trailing),
    ))
}

/// 경음화: 책상 -> 책쌍, 꽃집 -> 꽃찝
///
/// 받침 ㅎ 뒤에서는 ㅅ만 ㅆ으로 바뀐다 (낳습니다 -> 낳씁니다).
pub fn reinforce(a: &JamoTriple, b: &JamoTriple) -> Option<Pair> {
    let triggers = match a.trailing {
        Cluster::Double(Siot, Siot) | Cluster::Double(Giyeok, Giyeok) => true,
        _ => match a.trailing.last() {
            Some(Giyeok | Digeut | Tieut | Siot | Chieut | Jieut | Bieup | Pieup) => true,
            Some(Hieut) => b.leading == Cluster::Single(Siot),
            _ => false,
        },
    };
    if !triggers {
        return None;
    }

    match b.leading {
        Cluster::Single(Bieup | Jieut | Digeut | Giyeok | Siot) => Some((
            *a,
            JamoTriple::new(b.leading.doubled(), b.vowel, b.trailing),
        )),
        _ => None,
    }
}

/// 비음화: 박물관 -> 방물관, 믿는 -> 민는, 독립 -> 동닙
pub fn nasalise(a: &JamoTriple, b: &JamoTriple) -> Option<Pair> {
    match b.leading {
        Cluster::Single(Rieul) => {
            if a.trailing != Cluster::Single(Giyeok) {
                return None;
            }
            Some((
                JamoTriple::new(a.leading, a.vowel, Cluster::Single(Ieung)),
                JamoTriple::new(Cluster::Single(Nieun), b.vowel, b.trailing),
            ))
        }
        Cluster::Single(Mieum | Nieun) => {
            let nasal = match a.trailing {
                Cluster::Single(Giyeok) | Cluster::Double(Rieul, Giyeok) => Ieung,
                Cluster::Single(Digeut | Siot | Jieut | Chieut) => Nieun,
                Cluster::Single(Bieup) => Mieum,
                _ => return None,
            };
            Some((
                JamoTriple::new(a.leading, a.vowel, Cluster::Single(nasal)),
                *b,
            ))
        }
        _ => None,
    }
}

/// 유음화: 실내 -> 실래, 신라 -> 실라
pub fn assimilate(a: &JamoTriple, b: &JamoTriple) -> Option<Pair> {
    match (a.trailing, b.leading) {
        (Cluster::Single(Rieul), Cluster::Single(Nieun))
        | (Cluster::Single(Nieun), Cluster::Single(Rieul)) => Some((
            JamoTriple::new(a.leading, a.vowel, Cluster::Single(Rieul)),
            JamoTriple::new(Cluster::Single(Rieul), b.vowel, b.trailing),
        )),
        _ => None,
    }
}

/// 받침 대표음: 녘 -> 녁, 꽃 -> 꼳, 밖 -> 박
///
/// 다음 글자가 모음으로 시작하면 연음 대상이므로 그대로 둔다.
pub fn simplify_ending(letter: &JamoTriple, next: Option<&JamoTriple>) -> Option<JamoTriple> {
    if next.and_then(|n| n.leading.first()) == Some(Ieung) {
        return None;
    }

    let simplified = match letter.trailing {
        Cluster::Single(Kieuk) | Cluster::Double(Giyeok, Giyeok) => Giyeok,
        Cluster::Single(Tieut | Siot | Chieut | Jieut | Hieut) | Cluster::Double(Siot, Siot) => {
            Digeut
        }
        Cluster::Single(Pieup) => Bieup,
        _ => return None,
    };
    Some(JamoTriple::new(
        letter.leading,
        letter.vowel,
        Cluster::Single(simplified),
    ))
}

/// 평음 -> 격음
fn aspirated(c: Consonant) -> Option<Consonant> {
    match c {
        Giyeok => Some(Kieuk),
        Digeut => Some(Tieut),
        Bieup => Some(Pieup),
        Jieut => Some(Chieut),
        _ => None,
    }
}

/// 격음화: 축하해 -> 추카해, 많다 -> 만타, 입학 -> 이팍
///
/// A의 받침 ㅎ + B의 평음을 먼저 보고, 그다음 A의 평음 + B의 초성 ㅎ을 본다.
pub fn aspirate(a: &JamoTriple, b: &JamoTriple) -> Option<Pair> {
    if a.trailing.last() == Some(Hieut) {
        if let Some(mapped) = b.leading.first().and_then(aspirated) {
            return Some(carry_last(a, b, mapped));
        }
    }
    if b.leading.first() == Some(Hieut) {
        if let Some(mapped) = a.trailing.last().and_then(aspirated) {
            return Some(carry_last(a, b, mapped));
        }
    }
    None
}

/// ㅎ 묵음화 (가타카나 표기 전용): 결혼 -> 겨론, 전화 -> 저놔
pub fn elide_silent_h(a: &JamoTriple, b: &JamoTriple) -> Option<Pair> {
    if b.leading != Cluster::Single(Hieut) {
        return None;
    }
    match a.trailing {
        Cluster::Single(c @ (Nieun | Rieul | Mieum)) => Some((
            JamoTriple::new(a.leading, a.vowel, Cluster::Empty),
            JamoTriple::new(Cluster::Single(c), b.vowel, b.trailing),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unicode;

    fn jamos(c: char) -> JamoTriple {
        unicode::decompose(c).unwrap()
    }

    fn pair(rule: fn(&JamoTriple, &JamoTriple) -> Option<Pair>, input: &str) -> Option<String> {
        let chars: Vec<char> = input.chars().collect();
        rule(&jamos(chars[0]), &jamos(chars[1])).map(|(a, b)| {
            [unicode::compose(&a).unwrap(), unicode::compose(&b).unwrap()]
                .iter()
                .collect()
        })
    }

    #[test]
    fn test_palatalise() {
        assert_eq!(pair(palatalise, "굳이").as_deref(), Some("구지"));
        assert_eq!(pair(palatalise, "같이").as_deref(), Some("가치"));
        assert_eq!(pair(palatalise, "묻히").as_deref(), Some("무치"));
        assert_eq!(pair(palatalise, "핥이").as_deref(), Some("할치"));
        assert_eq!(pair(palatalise, "같아"), None);
        assert_eq!(pair(palatalise, "같히"), None);
    }

    #[test]
    fn test_resyllabify() {
        assert_eq!(pair(resyllabify, "옷을").as_deref(), Some("오슬"));
        assert_eq!(pair(resyllabify, "앉아").as_deref(), Some("안자"));
        assert_eq!(pair(resyllabify, "깎아").as_deref(), Some("까까"));
        assert_eq!(pair(resyllabify, "좋아").as_deref(), Some("조아"));
        assert_eq!(pair(resyllabify, "싫어").as_deref(), Some("시러"));
        assert_eq!(pair(resyllabify, "좋다").as_deref(), Some("조다"));
        assert_eq!(pair(resyllabify, "놓고").as_deref(), Some("노고"));
        assert_eq!(pair(resyllabify, "생일"), None);
        assert_eq!(pair(resyllabify, "바아"), None);
        assert_eq!(pair(resyllabify, "안사"), None);
        assert_eq!(pair(resyllabify, "많다"), None);
    }

    #[test]
    fn test_reinforce() {
        assert_eq!(pair(reinforce, "책상").as_deref(), Some("책쌍"));
        assert_eq!(pair(reinforce, "있다").as_deref(), Some("있따"));
        assert_eq!(pair(reinforce, "낳습").as_deref(), Some("낳씁"));
        assert_eq!(pair(reinforce, "낳다"), None);
        assert_eq!(pair(reinforce, "책마"), None);
    }

    #[test]
    fn test_nasalise() {
        assert_eq!(pair(nasalise, "박물").as_deref(), Some("방물"));
        assert_eq!(pair(nasalise, "독립").as_deref(), Some("동닙"));
        assert_eq!(pair(nasalise, "합니").as_deref(), Some("함니"));
        assert_eq!(pair(nasalise, "한라"), None);
    }

    #[test]
    fn test_assimilate() {
        assert_eq!(pair(assimilate, "실내").as_deref(), Some("실래"));
        assert_eq!(pair(assimilate, "신라").as_deref(), Some("실라"));
        assert_eq!(pair(assimilate, "신나"), None);
    }

    #[test]
    fn test_simplify_ending() {
        let simplify = |c: char, next: Option<char>| {
            let next = next.map(jamos);
            simplify_ending(&jamos(c), next.as_ref()).map(|j| unicode::compose(&j).unwrap())
        };
        assert_eq!(simplify('녘', None), Some('녁'));
        assert_eq!(simplify('꽃', Some('씨')), Some('꼳'));
        assert_eq!(simplify('밖', None), Some('박'));
        assert_eq!(simplify('좋', Some('다')), Some('졷'));
        assert_eq!(simplify('덮', Some('이')), None);
        assert_eq!(simplify('박', None), None);
    }

    #[test]
    fn test_aspirate() {
        assert_eq!(pair(aspirate, "북한").as_deref(), Some("부칸"));
        assert_eq!(pair(aspirate, "좋다").as_deref(), Some("조타"));
        assert_eq!(pair(aspirate, "입학").as_deref(), Some("이팍"));
        assert_eq!(pair(aspirate, "잃지").as_deref(), Some("일치"));
        assert_eq!(pair(aspirate, "북아"), None);
        assert_eq!(pair(aspirate, "안하"), None);
    }

    #[test]
    fn test_elide_silent_h() {
        assert_eq!(pair(elide_silent_h, "결혼").as_deref(), Some("겨론"));
        assert_eq!(pair(elide_silent_h, "전화").as_deref(), Some("저놔"));
        assert_eq!(pair(elide_silent_h, "엄하").as_deref(), Some("어마"));
        assert_eq!(pair(elide_silent_h, "학하"), None);
        assert_eq!(pair(elide_silent_h, "않하"), None);
    }
}
