use std::fmt;

use crate::numerals::{Language, MAX_VALUE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// The integer lies outside `0..=10^16`.
    OutOfRange { value: u64 },
    /// Raw text rejected at the input boundary.
    MalformedInput { input: String, reason: &'static str },
    /// The speech collaborator failed; any transcription already produced stays valid.
    SynthesisFailure { language: Language, message: String },
}

impl NumeralError {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        NumeralError::MalformedInput {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn synthesis(language: Language, message: impl Into<String>) -> Self {
        NumeralError::SynthesisFailure {
            language,
            message: message.into(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NumeralError::OutOfRange { .. } | NumeralError::MalformedInput { .. }
        )
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::OutOfRange { value } => {
                write!(f, "{} is out of the supported range (0 to {})", value, MAX_VALUE)
            }
            NumeralError::MalformedInput { input, reason } => {
                write!(f, "invalid number '{}': {}", input, reason)
            }
            NumeralError::SynthesisFailure { language, message } => {
                write!(f, "speech synthesis failed for {}: {}", language.tag(), message)
            }
        }
    }
}

impl std::error::Error for NumeralError {}
