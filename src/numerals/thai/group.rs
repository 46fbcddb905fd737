use super::lexicon::{
    self, HUNDRED, HUNDRED_THOUSAND, ONE_CONJUNCT, TEN, TEN_THOUSAND, THOUSAND, TWENTY,
};

pub const MAX_GROUP: u64 = 999_999;

/// Positions read as plain digit + position name.
const PLAIN_POSITIONS: [(u64, &str); 4] = [
    (100_000, HUNDRED_THOUSAND),
    (10_000, TEN_THOUSAND),
    (1_000, THOUSAND),
    (100, HUNDRED),
];

/// Reads `0..=999_999` into native tokens in spoken order. Zero reads as
/// no tokens.
///
/// Panics when `n` exceeds [`MAX_GROUP`].
pub fn read_group(n: u64) -> Vec<&'static str> {
    assert!(n <= MAX_GROUP, "thai group out of range: {}", n);
    let mut tokens = Vec::new();
    for (weight, name) in PLAIN_POSITIONS {
        let digit = ((n / weight) % 10) as u8;
        if digit != 0 {
            tokens.push(lexicon::lookup(digit).native);
            tokens.push(name);
        }
    }

    let tens = ((n / 10) % 10) as u8;
    match tens {
        0 => {}
        1 => tokens.push(TEN),
        2 => tokens.push(TWENTY),
        digit => {
            tokens.push(lexicon::lookup(digit).native);
            tokens.push(TEN);
        }
    }

    let units = (n % 10) as u8;
    if units == 1 && tens >= 1 {
        tokens.push(ONE_CONJUNCT);
    } else if units != 0 {
        tokens.push(lexicon::lookup(units).native);
    }
    tokens
}
