use anyhow::{Context, Result};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::retry::{
    RATE_LIMIT_BASE_DELAY, RATE_LIMIT_MAX_RETRIES, is_rate_limited, retry_after, wait_with_backoff,
};
use super::{SynthesisFuture, Synthesizer};
use crate::error::NumeralError;
use crate::numerals::Language;
use crate::settings::TtsSettings;

/// The endpoint rejects longer `q` values.
const MAX_CHUNK_CHARS: usize = 100;

/// Speech from the public Google Translate TTS endpoint. Long text is sent
/// in chunks and the returned MP3 frames are concatenated.
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    client: reqwest::Client,
    base_url: String,
    slow: bool,
}

impl GoogleTranslateTts {
    pub fn new(settings: &TtsSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .with_context(|| "failed to build speech HTTP client")?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            slow: settings.slow,
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        index: usize,
        total: usize,
        language: Language,
    ) -> Result<Vec<u8>, NumeralError> {
        let url = format!("{}/translate_tts", self.base_url);
        let speed = if self.slow { "0.24" } else { "1" };
        let index = index.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let query = [
            ("ie", "UTF-8"),
            ("q", chunk),
            ("tl", language.tag()),
            ("client", "tw-ob"),
            ("ttsspeed", speed),
            ("idx", index.as_str()),
            ("total", total.as_str()),
            ("textlen", textlen.as_str()),
        ];

        let mut attempt = 0usize;
        let mut delay = RATE_LIMIT_BASE_DELAY;
        loop {
            attempt += 1;
            let response = self
                .client
                .get(&url)
                .query(&query)
                .send()
                .await
                .map_err(|err| NumeralError::synthesis(language, err.to_string()))?;
            let status = response.status();
            let wait_hint = retry_after(response.headers());
            let body = response
                .bytes()
                .await
                .map_err(|err| NumeralError::synthesis(language, err.to_string()))?;
            if status.is_success() {
                return Ok(body.to_vec());
            }
            if is_rate_limited(status, &body) && attempt < RATE_LIMIT_MAX_RETRIES {
                delay = wait_with_backoff(attempt, delay, wait_hint).await;
                continue;
            }
            return Err(NumeralError::synthesis(
                language,
                format!("speech service returned {}", status),
            ));
        }
    }
}

impl Synthesizer for GoogleTranslateTts {
    fn synthesize(&self, text: &str, language: Language) -> SynthesisFuture {
        let this = self.clone();
        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        Box::pin(async move {
            let mut audio = Vec::new();
            let total = chunks.len();
            for (index, chunk) in chunks.iter().enumerate() {
                debug!("requesting speech chunk {}/{} ({})", index + 1, total, language.tag());
                let bytes = this.fetch_chunk(chunk, index, total, language).await?;
                audio.extend_from_slice(&bytes);
            }
            Ok(audio)
        })
    }
}

/// Splits trimmed `text` into pieces of at most `max_chars` chars, cutting
/// only between grapheme clusters so Thai vowel and tone marks stay with
/// their consonant. Blank text yields no chunks.
fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;
    for grapheme in text.trim().graphemes(true) {
        let width = grapheme.chars().count();
        if current_chars + width > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        current.push_str(grapheme);
        current_chars += width;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
