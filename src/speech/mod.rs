use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

use crate::error::NumeralError;
use crate::numerals::{Language, Transcription};
use crate::paths;
use crate::settings::TtsSettings;

mod cache;
mod google;
mod retry;

pub use cache::CachedSynthesizer;
pub use google::GoogleTranslateTts;

pub const AUDIO_MIME: &str = "audio/mpeg";

pub type SynthesisFuture = Pin<Box<dyn Future<Output = Result<Vec<u8>, NumeralError>> + Send>>;

/// A text-to-speech backend. Output depends only on `(text, language)`, so
/// implementations may be memoized.
pub trait Synthesizer: Clone + Send + Sync + 'static {
    fn synthesize(&self, text: &str, language: Language) -> SynthesisFuture;
}

/// The configured backend: the HTTP service, optionally behind the disk cache.
#[derive(Debug, Clone)]
pub enum SpeechBackend {
    Direct(GoogleTranslateTts),
    Cached(CachedSynthesizer<GoogleTranslateTts>),
}

impl Synthesizer for SpeechBackend {
    fn synthesize(&self, text: &str, language: Language) -> SynthesisFuture {
        match self {
            SpeechBackend::Direct(backend) => backend.synthesize(text, language),
            SpeechBackend::Cached(backend) => backend.synthesize(text, language),
        }
    }
}

pub fn build_synthesizer(settings: &TtsSettings) -> anyhow::Result<SpeechBackend> {
    let tts = GoogleTranslateTts::new(settings)?;
    if settings.cache {
        Ok(SpeechBackend::Cached(CachedSynthesizer::new(
            tts,
            paths::audio_cache_dir(),
        )))
    } else {
        Ok(SpeechBackend::Direct(tts))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeechOutput {
    pub text: String,
    pub language: Language,
    #[serde(skip)]
    pub audio: Vec<u8>,
}

/// Speaks the phonetic field of an already computed reading.
pub async fn speak<S: Synthesizer>(
    transcription: &Transcription,
    synthesizer: &S,
) -> Result<SpeechOutput, NumeralError> {
    let language = transcription.language();
    let text = transcription.phonetic().to_string();
    let audio = synthesizer.synthesize(&text, language).await?;
    Ok(SpeechOutput {
        text,
        language,
        audio,
    })
}

pub fn audio_data_url(audio: &[u8]) -> String {
    format!("data:{};base64,{}", AUDIO_MIME, BASE64.encode(audio))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns `"<tag>:<text>"` as the audio bytes and counts calls.
    #[derive(Clone, Default)]
    pub(crate) struct EchoSynthesizer {
        pub(crate) calls: Arc<AtomicUsize>,
        pub(crate) fail: bool,
    }

    impl EchoSynthesizer {
        pub(crate) fn failing() -> Self {
            Self {
                calls: Arc::default(),
                fail: true,
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Synthesizer for EchoSynthesizer {
        fn synthesize(&self, text: &str, language: Language) -> SynthesisFuture {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = if self.fail {
                Err(NumeralError::synthesis(language, "service unavailable"))
            } else {
                Ok(format!("{}:{}", language.tag(), text).into_bytes())
            };
            Box::pin(async move { result })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::EchoSynthesizer;
    use super::*;
    use crate::numerals::transcribe;

    #[tokio::test]
    async fn speaks_hiragana_for_japanese() {
        let reading = transcribe(10_000_000, Language::Japanese).unwrap();
        let synth = EchoSynthesizer::default();
        let output = speak(&reading, &synth).await.expect("speech");
        assert_eq!(output.text, "いっせんまん");
        assert_eq!(output.audio, "ja:いっせんまん".as_bytes());
    }

    #[tokio::test]
    async fn speaks_native_script_for_thai() {
        let reading = transcribe(121, Language::Thai).unwrap();
        let output = speak(&reading, &EchoSynthesizer::default())
            .await
            .expect("speech");
        assert_eq!(output.language, Language::Thai);
        assert_eq!(output.audio, "th:หนึ่งร้อยยี่สิบเอ็ด".as_bytes());
    }

    #[tokio::test]
    async fn synthesis_failure_leaves_reading_intact() {
        let reading = transcribe(8, Language::Japanese).unwrap();
        let err = speak(&reading, &EchoSynthesizer::failing())
            .await
            .unwrap_err();
        assert!(matches!(err, NumeralError::SynthesisFailure { .. }));
        assert_eq!(reading.phonetic(), "はち");
    }

    #[test]
    fn cache_setting_picks_the_backend() {
        crate::test_util::with_temp_home(|_| {
            let mut settings = TtsSettings::default();
            settings.cache = true;
            assert!(matches!(
                build_synthesizer(&settings).unwrap(),
                SpeechBackend::Cached(_)
            ));
            settings.cache = false;
            assert!(matches!(
                build_synthesizer(&settings).unwrap(),
                SpeechBackend::Direct(_)
            ));
        });
    }

    #[test]
    fn data_url_is_base64_mp3() {
        assert_eq!(audio_data_url(b"abc"), "data:audio/mpeg;base64,YWJj");
    }
}
