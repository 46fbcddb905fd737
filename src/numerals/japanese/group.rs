use super::lexicon::{self, Forms, Morpheme, morpheme};

pub const MAX_GROUP: u64 = 9_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Thousand,
    Hundred,
    Ten,
}

impl Position {
    const ORDER: [(Position, u64); 3] = [
        (Position::Thousand, 1_000),
        (Position::Hundred, 100),
        (Position::Ten, 10),
    ];

    fn name(self) -> Morpheme {
        match self {
            Position::Thousand => morpheme("sen", "せん", "千"),
            Position::Hundred => morpheme("hyaku", "ひゃく", "百"),
            Position::Ten => morpheme("juu", "じゅう", "十"),
        }
    }
}

/// Digit + position spellings that are not a plain concatenation
/// (omitted ichi, rendaku, gemination).
const POSITIONAL_IRREGULARS: [(Position, u8, Morpheme); 8] = [
    (Position::Thousand, 1, morpheme("sen", "せん", "千")),
    (Position::Thousand, 3, morpheme("sanzen", "さんぜん", "三千")),
    (Position::Thousand, 8, morpheme("hassen", "はっせん", "八千")),
    (Position::Hundred, 1, morpheme("hyaku", "ひゃく", "百")),
    (Position::Hundred, 3, morpheme("sanbyaku", "さんびゃく", "三百")),
    (Position::Hundred, 6, morpheme("roppyaku", "ろっぴゃく", "六百")),
    (Position::Hundred, 8, morpheme("happyaku", "はっぴゃく", "八百")),
    (Position::Ten, 1, morpheme("juu", "じゅう", "十")),
];

pub(crate) fn positional_irregular(position: Position, digit: u8) -> Option<Morpheme> {
    POSITIONAL_IRREGULARS
        .iter()
        .find(|(pos, trigger, _)| *pos == position && *trigger == digit)
        .map(|(_, _, forms)| *forms)
}

/// Reads `0..=9999`. Zero reads as nothing; callers handle a bare zero.
///
/// Panics when `n` exceeds [`MAX_GROUP`]: the composer never produces such
/// a group, so this is a bug upstream rather than bad input.
pub(crate) fn read_group_forms(n: u64) -> Forms {
    assert!(n <= MAX_GROUP, "japanese group out of range: {}", n);
    let mut forms = Forms::default();
    for (position, weight) in Position::ORDER {
        let digit = ((n / weight) % 10) as u8;
        if digit == 0 {
            continue;
        }
        match positional_irregular(position, digit) {
            Some(irregular) => forms.push(irregular),
            None => {
                forms.push(lexicon::lookup(digit).into());
                forms.push(position.name());
            }
        }
    }
    let units = (n % 10) as u8;
    if units != 0 {
        forms.push(lexicon::lookup(units).into());
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(n: u64) -> (String, String, String) {
        let forms = read_group_forms(n);
        (forms.romanized, forms.hiragana, forms.kanji)
    }

    #[test]
    fn zero_group_is_empty() {
        assert_eq!(read_group_forms(0), Forms::default());
    }

    #[test]
    fn regular_positions_concatenate_digit_and_name() {
        assert_eq!(
            read(2_000),
            ("nisen".into(), "にせん".into(), "二千".into())
        );
        assert_eq!(
            read(45),
            ("yonjuugo".into(), "よんじゅうご".into(), "四十五".into())
        );
        assert_eq!(
            read(9_999),
            (
                "kyuusenkyuuhyakukyuujuukyuu".into(),
                "きゅうせんきゅうひゃくきゅうじゅうきゅう".into(),
                "九千九百九十九".into()
            )
        );
    }

    #[test]
    fn euphonic_irregulars_replace_regular_forms() {
        assert_eq!(read(1_000).1, "せん");
        assert_eq!(read(3_000).0, "sanzen");
        assert_eq!(read(8_000).1, "はっせん");
        assert_eq!(read(100).2, "百");
        assert_eq!(read(300).0, "sanbyaku");
        assert_eq!(read(600).1, "ろっぴゃく");
        assert_eq!(read(800).0, "happyaku");
        assert_eq!(read(10).1, "じゅう");
        assert_eq!(read(11).0, "juuichi");
    }

    #[test]
    fn mixed_group_keeps_constituent_order() {
        assert_eq!(
            read(3_608),
            (
                "sanzenroppyakuhachi".into(),
                "さんぜんろっぴゃくはち".into(),
                "三千六百八".into()
            )
        );
    }

    #[test]
    fn irregular_table_lookup() {
        assert!(positional_irregular(Position::Ten, 3).is_none());
        assert_eq!(
            positional_irregular(Position::Hundred, 6).map(|m| m.romanized),
            Some("roppyaku")
        );
    }

    #[test]
    #[should_panic(expected = "japanese group out of range")]
    fn oversized_group_is_a_bug() {
        read_group_forms(10_000);
    }
}
