#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitForms {
    pub native: &'static str,
    pub romanized: &'static str,
}

const DIGITS: [DigitForms; 10] = [
    DigitForms { native: "ศูนย์", romanized: "sun" },
    DigitForms { native: "หนึ่ง", romanized: "nueng" },
    DigitForms { native: "สอง", romanized: "song" },
    DigitForms { native: "สาม", romanized: "sam" },
    DigitForms { native: "สี่", romanized: "si" },
    DigitForms { native: "ห้า", romanized: "ha" },
    DigitForms { native: "หก", romanized: "hok" },
    DigitForms { native: "เจ็ด", romanized: "chet" },
    DigitForms { native: "แปด", romanized: "paet" },
    DigitForms { native: "เก้า", romanized: "kao" },
];

pub const TEN: &str = "สิบ";
/// 20 is ยี่สิบ, never สองสิบ.
pub const TWENTY: &str = "ยี่สิบ";
/// Final 1 after a nonzero tens digit (21 = ยี่สิบเอ็ด).
pub const ONE_CONJUNCT: &str = "เอ็ด";
pub const HUNDRED: &str = "ร้อย";
pub const THOUSAND: &str = "พัน";
pub const TEN_THOUSAND: &str = "หมื่น";
pub const HUNDRED_THOUSAND: &str = "แสน";
pub const MILLION: &str = "ล้าน";

const UNIT_ROMANIZATION: [(&str, &str); 8] = [
    (TEN, "sip"),
    (TWENTY, "yi sip"),
    (ONE_CONJUNCT, "et"),
    (HUNDRED, "roi"),
    (THOUSAND, "phan"),
    (TEN_THOUSAND, "muen"),
    (HUNDRED_THOUSAND, "saen"),
    (MILLION, "lan"),
];

const NATIVE_DIGITS: [char; 10] = ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'];

/// Panics when `digit > 9`.
pub fn lookup(digit: u8) -> DigitForms {
    assert!(digit <= 9, "digit out of range: {}", digit);
    DIGITS[digit as usize]
}

/// RTGS spelling of a token; tokens without an entry come back unchanged.
pub fn romanize(token: &str) -> &str {
    let found: Option<&str> = DIGITS
        .iter()
        .map(|forms| (forms.native, forms.romanized))
        .chain(UNIT_ROMANIZATION)
        .find(|(native, _)| *native == token)
        .map(|(_, romanized)| romanized);
    found.unwrap_or(token)
}

pub fn native_digit(digit: u8) -> char {
    assert!(digit <= 9, "digit out of range: {}", digit);
    NATIVE_DIGITS[digit as usize]
}

pub fn from_native_digit(c: char) -> Option<u8> {
    NATIVE_DIGITS
        .iter()
        .position(|&native| native == c)
        .map(|index| index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn romanize_known_tokens() {
        assert_eq!(romanize("ศูนย์"), "sun");
        assert_eq!(romanize(TWENTY), "yi sip");
        assert_eq!(romanize(ONE_CONJUNCT), "et");
        assert_eq!(romanize(MILLION), "lan");
        assert_eq!(romanize(lookup(8).native), "paet");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(romanize("ครึ่ง"), "ครึ่ง");
        assert_eq!(romanize(""), "");
    }

    #[test]
    fn native_digit_table_is_invertible() {
        for d in 0..=9 {
            assert_eq!(from_native_digit(native_digit(d)), Some(d));
        }
        assert_eq!(from_native_digit('7'), None);
    }
}
