const HIRAGANA_START: u32 = 0x3041; // ぁ
const HIRAGANA_END: u32 = 0x3096; // ゖ
const KATAKANA_OFFSET: u32 = 0x60;
const LONG_VOWEL_MARK: char = 'ー';

/// Maps hiragana to katakana one char at a time. The long-vowel mark and
/// anything outside the hiragana block are left as they are.
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars().map(to_katakana).collect()
}

fn to_katakana(c: char) -> char {
    if c == LONG_VOWEL_MARK {
        return c;
    }
    let code = c as u32;
    if (HIRAGANA_START..=HIRAGANA_END).contains(&code) {
        char::from_u32(code + KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_small_and_voiced_kana() {
        assert_eq!(hiragana_to_katakana("いっせんまん"), "イッセンマン");
        assert_eq!(hiragana_to_katakana("ろっぴゃく"), "ロッピャク");
        assert_eq!(hiragana_to_katakana("ぁゖ"), "ァヶ");
    }

    #[test]
    fn passes_through_other_characters() {
        assert_eq!(hiragana_to_katakana("らーめん 1億"), "ラーメン 1億");
        assert_eq!(hiragana_to_katakana("カナ"), "カナ");
        assert_eq!(hiragana_to_katakana(""), "");
    }

    #[test]
    fn preserves_length() {
        let input = "きゅうせんきゅうひゃくきゅうじゅうきゅうちょう";
        assert_eq!(
            hiragana_to_katakana(input).chars().count(),
            input.chars().count()
        );
    }
}
