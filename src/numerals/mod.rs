use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NumeralError;

pub mod japanese;
mod magnitude;
pub mod thai;

pub use japanese::{JapaneseReading, transcribe_japanese};
pub use thai::{ThaiReading, transcribe_thai};

/// Largest integer either pipeline accepts (10^16, one 京).
pub const MAX_VALUE: u64 = 10_000_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "th")]
    Thai,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Japanese, Language::Thai];

    /// BCP 47 tag handed to the speech collaborator.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::Thai => "th",
        }
    }

    /// Parses `ja`, `th` or `all` into the list of pipelines to run.
    pub fn parse_selection(value: &str) -> anyhow::Result<Vec<Language>> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(Language::ALL.to_vec());
        }
        Ok(vec![value.parse()?])
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "ja" | "jp" | "jpn" | "japanese" => Ok(Language::Japanese),
            "th" | "tha" | "thai" => Ok(Language::Thai),
            other => Err(anyhow::anyhow!(
                "unsupported language '{}' (expected ja or th)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "language")]
pub enum Transcription {
    #[serde(rename = "ja")]
    Japanese(JapaneseReading),
    #[serde(rename = "th")]
    Thai(ThaiReading),
}

impl Transcription {
    pub fn language(&self) -> Language {
        match self {
            Transcription::Japanese(_) => Language::Japanese,
            Transcription::Thai(_) => Language::Thai,
        }
    }

    /// The field read aloud: hiragana for Japanese, native script for Thai.
    pub fn phonetic(&self) -> &str {
        match self {
            Transcription::Japanese(reading) => &reading.hiragana,
            Transcription::Thai(reading) => &reading.native,
        }
    }
}

pub fn transcribe(n: u64, language: Language) -> Result<Transcription, NumeralError> {
    match language {
        Language::Japanese => transcribe_japanese(n).map(Transcription::Japanese),
        Language::Thai => transcribe_thai(n).map(Transcription::Thai),
    }
}

pub(crate) fn ensure_in_range(n: u64) -> Result<(), NumeralError> {
    if n > MAX_VALUE {
        return Err(NumeralError::OutOfRange { value: n });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_reject_values_above_one_kei() {
        for language in Language::ALL {
            let err = transcribe(MAX_VALUE + 1, language).unwrap_err();
            assert_eq!(err, NumeralError::OutOfRange { value: MAX_VALUE + 1 });
        }
        assert!(transcribe(u64::MAX, Language::Thai).is_err());
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let ja = transcribe(MAX_VALUE, Language::Japanese).expect("ja");
        assert_eq!(ja.phonetic(), "いっけい");
        let th = transcribe(MAX_VALUE, Language::Thai).expect("th");
        assert_eq!(th.phonetic(), "หนึ่งหมื่นล้านล้าน");
    }

    #[test]
    fn transcription_is_pure() {
        for n in [0, 7, 1_000, 10_000_000, 123_456_789_012_345, MAX_VALUE] {
            for language in Language::ALL {
                assert_eq!(
                    transcribe(n, language).unwrap(),
                    transcribe(n, language).unwrap()
                );
            }
        }
    }

    #[test]
    fn language_selection_parsing() {
        assert_eq!(Language::parse_selection("all").unwrap(), Language::ALL.to_vec());
        assert_eq!(
            Language::parse_selection(" TH ").unwrap(),
            vec![Language::Thai]
        );
        assert_eq!("japanese".parse::<Language>().unwrap(), Language::Japanese);
        assert!(Language::parse_selection("en").is_err());
    }

    #[test]
    fn transcription_serializes_with_language_tag() {
        let value = serde_json::to_value(transcribe(8, Language::Japanese).unwrap()).unwrap();
        assert_eq!(value["language"], "ja");
        assert_eq!(value["kanji"], "八");
    }
}
