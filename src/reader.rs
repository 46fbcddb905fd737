use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::error::NumeralError;
use crate::numerals::{Language, Transcription, transcribe};
use crate::speech::{SpeechOutput, Synthesizer, speak};

/// Everything produced for one number: one reading per requested language
/// and, when asked for, the outcome of speaking each of them.
#[derive(Debug, Clone, Serialize)]
pub struct ReadOutput {
    #[serde(serialize_with = "as_decimal_string")]
    pub number: u64,
    pub readings: Vec<Transcription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub speech: Vec<SpeechResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SpeechResult {
    Spoken(SpeechOutput),
    Failed { language: Language, message: String },
}

/// JSON consumers would lose precision above 2^53.
fn as_decimal_string<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

/// Transcribes `n` for every language. Fails as a whole if any pipeline does.
pub fn read(n: u64, languages: &[Language]) -> Result<ReadOutput, NumeralError> {
    let readings = languages
        .iter()
        .map(|&language| transcribe(n, language))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ReadOutput {
        number: n,
        readings,
        speech: Vec::new(),
    })
}

/// Speaks every reading. A failure is recorded next to the reading it
/// belongs to; the readings themselves are never touched.
pub async fn speak_all<S: Synthesizer>(output: &mut ReadOutput, synthesizer: &S) {
    let mut results = Vec::with_capacity(output.readings.len());
    for reading in &output.readings {
        let language = reading.language();
        match speak(reading, synthesizer).await {
            Ok(speech) => {
                info!(
                    "synthesized {} bytes of {} speech",
                    speech.audio.len(),
                    language.tag()
                );
                results.push(SpeechResult::Spoken(speech));
            }
            Err(err) => {
                warn!("{}", err);
                results.push(SpeechResult::Failed {
                    language,
                    message: err.to_string(),
                });
            }
        }
    }
    output.speech = results;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::testing::EchoSynthesizer;

    #[test]
    fn reads_each_language_in_order() {
        let output = read(121, &Language::ALL).unwrap();
        assert_eq!(output.readings.len(), 2);
        assert_eq!(output.readings[0].phonetic(), "ひゃくにじゅういち");
        assert_eq!(output.readings[1].phonetic(), "หนึ่งร้อยยี่สิบเอ็ด");
    }

    #[test]
    fn out_of_range_fails_atomically() {
        let err = read(10_000_000_000_000_001, &Language::ALL).unwrap_err();
        assert!(matches!(err, NumeralError::OutOfRange { .. }));
    }

    #[tokio::test]
    async fn speech_failures_are_recorded_per_language() {
        let mut output = read(5, &Language::ALL).unwrap();
        speak_all(&mut output, &EchoSynthesizer::failing()).await;
        assert_eq!(output.speech.len(), 2);
        assert!(
            output
                .speech
                .iter()
                .all(|result| matches!(result, SpeechResult::Failed { .. }))
        );
        assert_eq!(output.readings[0].phonetic(), "ご");
    }

    #[tokio::test]
    async fn spoken_results_carry_audio() {
        let mut output = read(5, &[Language::Thai]).unwrap();
        speak_all(&mut output, &EchoSynthesizer::default()).await;
        match &output.speech[0] {
            SpeechResult::Spoken(speech) => assert_eq!(speech.audio, "th:ห้า".as_bytes()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn number_serializes_as_string() {
        let output = read(10_000_000_000_000_000, &[Language::Japanese]).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["number"], "10000000000000000");
        assert!(value.get("speech").is_none());
    }
}
