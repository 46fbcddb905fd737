use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

pub mod error;
pub mod input;
pub mod logging;
pub mod numerals;
mod paths;
pub mod presets;
pub mod reader;
pub mod server;
pub mod settings;
pub mod speech;
mod test_util;

pub use error::NumeralError;
pub use numerals::{
    JapaneseReading, Language, MAX_VALUE, ThaiReading, Transcription, transcribe,
    transcribe_japanese, transcribe_thai,
};
pub use reader::{ReadOutput, SpeechResult};
pub use settings::OutputFormat;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `ja`, `th` or `all`; falls back to the settings file.
    pub lang: Option<String>,
    /// `text` or `json`; falls back to the settings file.
    pub format: Option<String>,
    pub speak: bool,
    pub audio_out: Option<String>,
    pub settings_path: Option<String>,
    pub show_presets: bool,
}

pub async fn run(config: Config, input: Option<String>) -> Result<String> {
    let settings_path = config.settings_path.as_deref().map(Path::new);
    let settings = settings::load_settings(settings_path)?;
    let format = match config.format.as_deref() {
        Some(value) => OutputFormat::parse(value)?,
        None => settings.format,
    };

    if config.show_presets {
        return format_presets(format);
    }

    let input = input.unwrap_or_default();
    let number = input::parse_number(&input)?;
    let lang = config.lang.as_deref().unwrap_or(&settings.lang);
    let languages = Language::parse_selection(lang)?;

    let mut output = reader::read(number, &languages)?;
    let mut audio_files = Vec::new();
    if config.speak {
        let synthesizer = speech::build_synthesizer(&settings.tts)?;
        reader::speak_all(&mut output, &synthesizer).await;
        audio_files = write_audio_files(&output, config.audio_out.as_deref())?;
    }
    format_output(&output, &audio_files, format)
}

/// Writes each spoken reading to disk. With several languages the language
/// tag is appended to the file stem.
fn write_audio_files(output: &ReadOutput, audio_out: Option<&str>) -> Result<Vec<PathBuf>> {
    let spoken = output
        .speech
        .iter()
        .filter_map(|result| match result {
            SpeechResult::Spoken(speech) if !speech.audio.is_empty() => Some(speech),
            _ => None,
        })
        .collect::<Vec<_>>();
    let mut written = Vec::new();
    for speech in &spoken {
        let path = audio_path(output.number, speech.language, audio_out, spoken.len() > 1);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, &speech.audio)
            .with_context(|| format!("failed to write audio: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn audio_path(number: u64, language: Language, audio_out: Option<&str>, tagged: bool) -> PathBuf {
    let Some(out) = audio_out.map(str::trim).filter(|value| !value.is_empty()) else {
        return PathBuf::from(format!("{}_{}.mp3", number, language.tag()));
    };
    let path = PathBuf::from(out);
    if !tagged {
        return path;
    }
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| number.to_string());
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_else(|| "mp3".to_string());
    path.with_file_name(format!("{}_{}.{}", stem, language.tag(), ext))
}

pub fn format_output(
    output: &ReadOutput,
    audio_files: &[PathBuf],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).with_context(|| "failed to serialize reading")
        }
        OutputFormat::Text => Ok(format_text(output, audio_files)),
    }
}

fn format_text(output: &ReadOutput, audio_files: &[PathBuf]) -> String {
    let mut sections = Vec::new();
    for reading in &output.readings {
        let mut lines = vec![format!("[{}]", reading.language().tag())];
        match reading {
            Transcription::Japanese(ja) => {
                lines.push(format!("romanized: {}", ja.romanized));
                lines.push(format!("hiragana: {}", ja.hiragana));
                lines.push(format!("katakana: {}", ja.katakana));
                lines.push(format!("kanji: {}", ja.kanji));
            }
            Transcription::Thai(th) => {
                lines.push(format!("romanized: {}", th.romanized));
                lines.push(format!("native: {}", th.native));
                lines.push(format!("native digits: {}", th.native_digits));
                lines.push(format!("arabic: {}", th.arabic_formatted));
            }
        }
        sections.push(lines.join("\n"));
    }

    let mut notes = Vec::new();
    for path in audio_files {
        notes.push(format!("audio: {}", path.display()));
    }
    for result in &output.speech {
        if let SpeechResult::Failed { message, .. } = result {
            notes.push(format!("warning: {}", message));
        }
    }
    if !notes.is_empty() {
        sections.push(notes.join("\n"));
    }
    sections.join("\n\n")
}

fn format_presets(format: OutputFormat) -> Result<String> {
    let sections = presets::sections();
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&sections)
            .with_context(|| "failed to serialize presets"),
        OutputFormat::Text => Ok(sections
            .iter()
            .map(|section| {
                let numbers = section
                    .numbers
                    .iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{}\t{}\t{}", section.key, section.title, numbers)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Parses and transcribes `raw` without loading settings or synthesizing
/// speech.
pub fn read_text(raw: &str, languages: &[Language]) -> Result<ReadOutput> {
    if languages.is_empty() {
        return Err(anyhow!("no language selected"));
    }
    let number = input::parse_number(raw)?;
    Ok(reader::read(number, languages)?)
}
