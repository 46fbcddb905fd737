use serde::{Deserialize, Serialize};

use crate::error::NumeralError;
use crate::input;
use crate::numerals::{Language, Transcription};

/// Numbers may arrive as JSON integers or as digit strings; strings are the
/// only way to send values above 2^53 from a browser. Anything else (negative
/// or fractional numbers, arrays) is kept so it can be rejected as malformed
/// input instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberField {
    Integer(u64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberField {
    pub(crate) fn parse(&self) -> Result<u64, NumeralError> {
        match self {
            NumberField::Integer(value) => input::parse_number(&value.to_string()),
            NumberField::Text(text) => input::parse_number(text),
            NumberField::Other(value) => Err(NumeralError::malformed(
                &value.to_string(),
                "expected a non-negative integer or a digit string",
            )),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct ReadRequest {
    pub(crate) number: Option<NumberField>,
    pub(crate) lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SpeakResponse {
    pub(crate) number: String,
    pub(crate) readings: Vec<Transcription>,
    pub(crate) speech: Vec<SpeechPayload>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SpeechPayload {
    pub(crate) language: Language,
    pub(crate) text: String,
    pub(crate) mime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) audio_base64: Option<String>,
    /// `data:audio/mpeg;base64,...`, ready for an `<audio>` element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: String,
}
