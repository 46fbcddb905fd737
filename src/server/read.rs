use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::NumeralError;
use crate::numerals::Language;
use crate::reader::{self, ReadOutput, SpeechResult};
use crate::settings;
use crate::speech::{AUDIO_MIME, Synthesizer, audio_data_url};

use super::models::{ReadRequest, SpeakResponse, SpeechPayload};

#[derive(Debug)]
pub(crate) struct ServerError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
}

impl ServerError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<NumeralError> for ServerError {
    fn from(err: NumeralError) -> Self {
        if err.is_client_error() {
            ServerError::bad_request(err.to_string())
        } else {
            ServerError::internal(err.to_string())
        }
    }
}

/// Validates the payload and transcribes it. `default_lang` applies when
/// the request names no language.
pub(crate) fn read_request(
    request: &ReadRequest,
    default_lang: &str,
) -> Result<ReadOutput, ServerError> {
    let Some(number) = request.number.as_ref() else {
        return Err(ServerError::bad_request("number is required"));
    };
    let lang = request.lang.as_deref().unwrap_or(default_lang);
    let languages = Language::parse_selection(lang)
        .map_err(|err| ServerError::bad_request(err.to_string()))?;
    let number = number.parse()?;
    Ok(reader::read(number, &languages)?)
}

pub(crate) async fn speak_request<S: Synthesizer>(
    settings: &settings::Settings,
    synthesizer: &S,
    request: ReadRequest,
) -> Result<SpeakResponse, ServerError> {
    let mut output = read_request(&request, &settings.lang)?;
    reader::speak_all(&mut output, synthesizer).await;

    let speech = output
        .speech
        .iter()
        .zip(&output.readings)
        .map(|(result, reading)| match result {
            SpeechResult::Spoken(speech) => SpeechPayload {
                language: speech.language,
                text: speech.text.clone(),
                mime: AUDIO_MIME.to_string(),
                audio_base64: Some(BASE64.encode(&speech.audio)),
                audio_url: Some(audio_data_url(&speech.audio)),
                warning: None,
            },
            SpeechResult::Failed { language, message } => SpeechPayload {
                language: *language,
                text: reading.phonetic().to_string(),
                mime: AUDIO_MIME.to_string(),
                audio_base64: None,
                audio_url: None,
                warning: Some(message.clone()),
            },
        })
        .collect();

    Ok(SpeakResponse {
        number: output.number.to_string(),
        readings: output.readings,
        speech,
    })
}
