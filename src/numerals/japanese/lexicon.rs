/// Every spoken form of a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitForms {
    pub romanized: &'static str,
    pub hiragana: &'static str,
    pub katakana: &'static str,
    pub kanji: &'static str,
}

const fn digit(
    romanized: &'static str,
    hiragana: &'static str,
    katakana: &'static str,
    kanji: &'static str,
) -> DigitForms {
    DigitForms {
        romanized,
        hiragana,
        katakana,
        kanji,
    }
}

const DIGITS: [DigitForms; 10] = [
    digit("zero", "ぜろ", "ゼロ", "零"),
    digit("ichi", "いち", "イチ", "一"),
    digit("ni", "に", "ニ", "二"),
    digit("san", "さん", "サン", "三"),
    digit("yon", "よん", "ヨン", "四"),
    digit("go", "ご", "ゴ", "五"),
    digit("roku", "ろく", "ロク", "六"),
    digit("nana", "なな", "ナナ", "七"),
    digit("hachi", "はち", "ハチ", "八"),
    digit("kyuu", "きゅう", "キュウ", "九"),
];

/// Panics when `digit > 9`.
pub fn lookup(digit: u8) -> DigitForms {
    assert!(digit <= 9, "digit out of range: {}", digit);
    DIGITS[digit as usize]
}

/// Romanized, hiragana and kanji spelling of one morpheme. Katakana is
/// never stored; it is derived from the hiragana after assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Morpheme {
    pub(crate) romanized: &'static str,
    pub(crate) hiragana: &'static str,
    pub(crate) kanji: &'static str,
}

pub(crate) const fn morpheme(
    romanized: &'static str,
    hiragana: &'static str,
    kanji: &'static str,
) -> Morpheme {
    Morpheme {
        romanized,
        hiragana,
        kanji,
    }
}

impl From<DigitForms> for Morpheme {
    fn from(forms: DigitForms) -> Self {
        morpheme(forms.romanized, forms.hiragana, forms.kanji)
    }
}

/// Accumulates morphemes in spoken order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Forms {
    pub(crate) romanized: String,
    pub(crate) hiragana: String,
    pub(crate) kanji: String,
}

impl Forms {
    pub(crate) fn push(&mut self, part: Morpheme) {
        self.romanized.push_str(part.romanized);
        self.hiragana.push_str(part.hiragana);
        self.kanji.push_str(part.kanji);
    }

    pub(crate) fn extend(&mut self, other: &Forms) {
        self.romanized.push_str(&other.romanized);
        self.hiragana.push_str(&other.hiragana);
        self.kanji.push_str(&other.kanji);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_every_digit() {
        assert_eq!(lookup(0).hiragana, "ぜろ");
        assert_eq!(lookup(4).romanized, "yon");
        assert_eq!(lookup(7).katakana, "ナナ");
        assert_eq!(lookup(9).kanji, "九");
    }

    #[test]
    #[should_panic(expected = "digit out of range")]
    fn lookup_rejects_non_digits() {
        lookup(10);
    }

    #[test]
    fn stored_katakana_matches_transliteration() {
        for d in 0..=9 {
            let forms = lookup(d);
            assert_eq!(
                super::super::kana::hiragana_to_katakana(forms.hiragana),
                forms.katakana
            );
        }
    }
}
