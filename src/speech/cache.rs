use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{SynthesisFuture, Synthesizer};
use crate::numerals::Language;

/// Memoizes another synthesizer on disk, keyed by md5 of `tag:text`.
/// Cache read or write problems are logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct CachedSynthesizer<S> {
    inner: S,
    dir: PathBuf,
}

impl<S: Synthesizer> CachedSynthesizer<S> {
    pub fn new(inner: S, dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            dir: dir.into(),
        }
    }

    fn entry_path(&self, text: &str, language: Language) -> PathBuf {
        let key = format!("{}:{}", language.tag(), text);
        let digest = format!("{:x}", md5::compute(key.as_bytes()));
        self.dir.join(format!("{}.mp3", digest))
    }
}

impl<S: Synthesizer> Synthesizer for CachedSynthesizer<S> {
    fn synthesize(&self, text: &str, language: Language) -> SynthesisFuture {
        let path = self.entry_path(text, language);
        let inner = self.inner.clone();
        let dir = self.dir.clone();
        let text = text.to_string();
        Box::pin(async move {
            if let Ok(bytes) = fs::read(&path) {
                debug!("speech cache hit: {}", path.display());
                return Ok(bytes);
            }
            let audio = inner.synthesize(&text, language).await?;
            if !audio.is_empty()
                && let Err(err) = write_atomic(&dir, &path, &audio)
            {
                warn!("failed to write speech cache {}: {}", path.display(), err);
            }
            Ok(audio)
        })
    }
}

fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
