use std::path::{Path, PathBuf};

const BASE_DIR_ENV: &str = "NUMERAL_READER_RUST_DIR";
const BASE_DIR_NAME: &str = ".numeral-reader-rust";

/// `$NUMERAL_READER_RUST_DIR`, else `~/.numeral-reader-rust`.
pub(crate) fn base_dir() -> Option<PathBuf> {
    if let Some(dir) = base_dir_override() {
        return Some(dir);
    }
    home_join(BASE_DIR_NAME)
}

pub(crate) fn audio_cache_dir() -> PathBuf {
    base_dir()
        .unwrap_or_else(|| PathBuf::from(BASE_DIR_NAME))
        .join(".cache")
        .join("audio")
}

fn base_dir_override() -> Option<PathBuf> {
    std::env::var(BASE_DIR_ENV)
        .ok()
        .and_then(|value| normalize_dir(&value))
}

fn home_join(suffix: &str) -> Option<PathBuf> {
    std::env::var("HOME").ok().and_then(|home| {
        let home = home.trim();
        if home.is_empty() {
            None
        } else {
            Some(Path::new(home).join(suffix))
        }
    })
}

fn normalize_dir(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let expanded = expand_tilde(trimmed);
    let mut normalized = PathBuf::new();
    for component in Path::new(&expanded).components() {
        normalized.push(component.as_os_str());
    }
    Some(normalized)
}

fn expand_tilde(value: &str) -> String {
    if (value == "~" || value.starts_with("~/"))
        && let Ok(home) = std::env::var("HOME")
    {
        let home = home.trim();
        if home.is_empty() {
            return value.to_string();
        }
        return format!("{}{}", home, &value[1..]);
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_temp_home;

    #[test]
    fn audio_cache_lives_under_home() {
        with_temp_home(|home| {
            assert_eq!(
                audio_cache_dir(),
                home.join(".numeral-reader-rust/.cache/audio")
            );
        });
    }

    #[test]
    fn tilde_expands_to_home() {
        with_temp_home(|home| {
            let expected = format!("{}/cache", home.display());
            assert_eq!(expand_tilde("~/cache"), expected);
            assert_eq!(expand_tilde("/tmp/x"), "/tmp/x");
        });
    }
}
