use serde::Serialize;

use super::ensure_in_range;
use super::magnitude::{GroupScheme, compose};
use crate::error::NumeralError;

mod group;
pub mod lexicon;

pub use group::{MAX_GROUP, read_group};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThaiReading {
    pub romanized: String,
    pub native: String,
    pub native_digits: String,
    pub arabic_formatted: String,
}

/// Tier `i` is 1,000,000^i, named by repeating ล้าน `i` times.
struct Million;

impl GroupScheme for Million {
    const NAME: &'static str = "thai";
    const BASE: u64 = 1_000_000;
    type Output = Vec<&'static str>;

    fn push_group(output: &mut Vec<&'static str>, group: u64, tier: usize) {
        output.extend(read_group(group));
        output.extend(std::iter::repeat_n(lexicon::MILLION, tier));
    }
}

/// Native-script tokens for `n`, largest tier first.
pub fn thai_tokens(n: u64) -> Result<Vec<&'static str>, NumeralError> {
    if n == 0 {
        return Ok(vec![lexicon::lookup(0).native]);
    }
    ensure_in_range(n)?;
    Ok(compose::<Million>(n))
}

pub fn transcribe_thai(n: u64) -> Result<ThaiReading, NumeralError> {
    let tokens = thai_tokens(n)?;
    Ok(ThaiReading {
        romanized: tokens
            .iter()
            .map(|token| lexicon::romanize(token))
            .collect::<Vec<_>>()
            .join(" "),
        native: tokens.concat(),
        native_digits: to_native_digits(n),
        arabic_formatted: format_with_commas(n),
    })
}

pub fn to_native_digits(n: u64) -> String {
    n.to_string()
        .bytes()
        .map(|b| lexicon::native_digit(b - b'0'))
        .collect()
}

/// Inverse of [`to_native_digits`]; `None` if any char is not a Thai digit.
pub fn from_native_digits(text: &str) -> Option<String> {
    text.chars()
        .map(|c| lexicon::from_native_digit(c).map(|d| char::from(b'0' + d)))
        .collect()
}

pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
