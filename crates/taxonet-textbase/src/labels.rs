//! Human-readable label loading and merging

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::Glob;

/// Lines starting with this character are comments.
pub const COMMENT_MARKER: char = '#';

/// Mapping from notation code to its display label for one language.
#[derive(Debug, Default)]
pub struct LabelIndex {
    labels: HashMap<String, String>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for a code, or the empty string when unknown.
    pub fn label(&self, code: &str) -> &str {
        self.labels.get(code).map(String::as_str).unwrap_or("")
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(code.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Merge one `code|label` file into the index. Existing codes are
    /// overwritten, so later files win on collision.
    ///
    /// Blank lines, comment lines, and lines without a `|` separator are
    /// skipped silently.
    pub fn merge_file(&mut self, path: &Path) -> io::Result<usize> {
        let reader = BufReader::new(File::open(path)?);
        let mut merged = 0;
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            match line.split_once('|') {
                Some((code, label)) => {
                    self.labels.insert(code.to_string(), label.to_string());
                    merged += 1;
                }
                None => {
                    tracing::debug!(path = %path.display(), "label line without separator skipped");
                }
            }
        }
        Ok(merged)
    }

    /// Merge every `txt_<lang>_*.txt` file under `dir/<lang>/`.
    ///
    /// Files are applied in sorted filename order so that collisions resolve
    /// deterministically (last file wins). A missing language directory
    /// yields an empty index rather than an error.
    pub fn load_language(dir: &Path, lang: &str) -> anyhow::Result<Self> {
        let mut index = LabelIndex::new();
        let lang_dir = dir.join(lang);
        if !lang_dir.is_dir() {
            tracing::warn!(dir = %lang_dir.display(), "label directory missing, labels will be empty");
            return Ok(index);
        }

        let matcher = Glob::new(&format!("txt_{lang}_*.txt"))?.compile_matcher();
        let mut files: Vec<PathBuf> = Vec::new();
        let entries = fs::read_dir(&lang_dir)
            .with_context(|| format!("reading label directory {}", lang_dir.display()))?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && matcher.is_match(entry.file_name()) {
                files.push(path);
            }
        }
        files.sort();

        for path in &files {
            let merged = index
                .merge_file(path)
                .with_context(|| format!("reading label file {}", path.display()))?;
            tracing::debug!(path = %path.display(), merged, "merged label file");
        }
        tracing::info!(lang, files = files.len(), labels = index.len(), "labels loaded");
        Ok(index)
    }
}
