use crate::error::NumeralError;
use crate::numerals::MAX_VALUE;

/// 10^16 written out is 17 digits.
pub const MAX_INPUT_DIGITS: usize = 17;

/// Validates raw user text before it reaches the transcription core: ASCII
/// digits only (surrounding whitespace ignored), at most 17 of them, and a
/// value no larger than 10^16.
pub fn parse_number(raw: &str) -> Result<u64, NumeralError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NumeralError::malformed(raw, "input is empty"));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumeralError::malformed(raw, "only the digits 0-9 are allowed"));
    }
    if trimmed.len() > MAX_INPUT_DIGITS {
        return Err(NumeralError::malformed(raw, "too many digits"));
    }
    let value: u64 = trimmed
        .parse()
        .map_err(|_| NumeralError::malformed(raw, "not a decimal integer"))?;
    if value > MAX_VALUE {
        return Err(NumeralError::OutOfRange { value });
    }
    Ok(value)
}
