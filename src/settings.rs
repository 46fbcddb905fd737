use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::numerals::Language;
use crate::paths;

const DEFAULT_SETTINGS_TOML: &str = include_str!("../settings.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub lang: String,
    pub format: OutputFormat,
    pub tts: TtsSettings,
    pub server_addr: String,
}

#[derive(Debug, Clone)]
pub struct TtsSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub cache: bool,
    pub slow: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: "ja".to_string(),
            format: OutputFormat::Text,
            tts: TtsSettings::default(),
            server_addr: "127.0.0.1:11400".to_string(),
        }
    }
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google.com".to_string(),
            timeout: Duration::from_secs(10),
            cache: true,
            slow: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    system: Option<SystemSection>,
    tts: Option<TtsSection>,
    server: Option<ServerSection>,
}

#[derive(Debug, Default, Deserialize)]
struct SystemSection {
    lang: Option<String>,
    format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TtsSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    cache: Option<bool>,
    slow: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
    addr: Option<String>,
}

pub fn load_settings(extra_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();
    settings.merge(parse_settings(DEFAULT_SETTINGS_TOML, Path::new("<embedded>"))?)?;
    ensure_home_settings_file()?;

    let mut ordered_paths = vec![
        PathBuf::from("settings.toml"),
        PathBuf::from("settings.local.toml"),
    ];
    if let Some(home) = paths::base_dir() {
        ordered_paths.push(home.join("settings.toml"));
        ordered_paths.push(home.join("settings.local.toml"));
    }
    if let Some(extra) = extra_path {
        if !extra.exists() {
            return Err(anyhow!("settings file not found: {}", extra.display()));
        }
        ordered_paths.push(extra.to_path_buf());
    }

    for path in ordered_paths {
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            let parsed = parse_settings(&content, &path)?;
            settings
                .merge(parsed)
                .with_context(|| format!("invalid settings in {}", path.display()))?;
        }
    }

    Ok(settings)
}

fn parse_settings(content: &str, path: &Path) -> Result<SettingsFile> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse settings: {}", path.display()))
}

impl Settings {
    fn merge(&mut self, incoming: SettingsFile) -> Result<()> {
        if let Some(system) = incoming.system {
            if let Some(lang) = system.lang
                && !lang.trim().is_empty()
            {
                Language::parse_selection(&lang)?;
                self.lang = lang.trim().to_string();
            }
            if let Some(format) = system.format {
                self.format = OutputFormat::parse(&format)?;
            }
        }
        if let Some(tts) = incoming.tts {
            if let Some(url) = tts.base_url
                && !url.trim().is_empty()
            {
                self.tts.base_url = url.trim().trim_end_matches('/').to_string();
            }
            if let Some(secs) = tts.timeout_secs
                && secs > 0
            {
                self.tts.timeout = Duration::from_secs(secs);
            }
            if let Some(cache) = tts.cache {
                self.tts.cache = cache;
            }
            if let Some(slow) = tts.slow {
                self.tts.slow = slow;
            }
        }
        if let Some(server) = incoming.server
            && let Some(addr) = server.addr
            && !addr.trim().is_empty()
        {
            self.server_addr = addr.trim().to_string();
        }
        Ok(())
    }
}

fn ensure_home_settings_file() -> Result<()> {
    let Some(home) = paths::base_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&home)
        .with_context(|| format!("failed to create settings directory: {}", home.display()))?;
    let path = home.join("settings.toml");
    if !path.exists() {
        fs::write(&path, DEFAULT_SETTINGS_TOML)
            .with_context(|| format!("failed to write settings: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_temp_home;

    #[test]
    fn embedded_defaults_are_loaded_and_copied_home() {
        with_temp_home(|home| {
            let settings = load_settings(None).expect("settings");
            assert_eq!(settings.lang, "ja");
            assert_eq!(settings.format, OutputFormat::Text);
            assert_eq!(settings.tts.timeout, Duration::from_secs(10));
            assert!(home.join(".numeral-reader-rust/settings.toml").exists());
        });
    }

    #[test]
    fn extra_file_overrides_defaults() {
        with_temp_home(|home| {
            let extra = home.join("extra.toml");
            fs::write(
                &extra,
                "[system]\nlang = \"th\"\nformat = \"json\"\n\n[tts]\nbase_url = \"http://localhost:9000/\"\ncache = false\n\n[server]\naddr = \"0.0.0.0:8080\"\n",
            )
            .expect("write extra");
            let settings = load_settings(Some(&extra)).expect("settings");
            assert_eq!(settings.lang, "th");
            assert_eq!(settings.format, OutputFormat::Json);
            assert_eq!(settings.tts.base_url, "http://localhost:9000");
            assert!(!settings.tts.cache);
            assert_eq!(settings.server_addr, "0.0.0.0:8080");
        });
    }

    #[test]
    fn missing_extra_file_is_an_error() {
        with_temp_home(|home| {
            let err = load_settings(Some(&home.join("nope.toml"))).unwrap_err();
            assert!(err.to_string().contains("settings file not found"));
        });
    }

    #[test]
    fn unknown_language_is_rejected_at_load() {
        with_temp_home(|home| {
            let extra = home.join("bad_lang.toml");
            fs::write(&extra, "[system]\nlang = \"en\"\n").expect("write");
            let err = load_settings(Some(&extra)).unwrap_err();
            assert!(format!("{:#}", err).contains("unsupported language 'en'"));

            fs::write(&extra, "[system]\nlang = \"all\"\n").expect("write");
            assert_eq!(load_settings(Some(&extra)).expect("settings").lang, "all");
        });
    }

    #[test]
    fn bad_format_value_is_rejected() {
        with_temp_home(|home| {
            let extra = home.join("bad.toml");
            fs::write(&extra, "[system]\nformat = \"yaml\"\n").expect("write");
            assert!(load_settings(Some(&extra)).is_err());
        });
    }
}
