use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One Markdown document contributing one section to the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

impl SourceFile {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, contents: S) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Read the whole file as UTF-8. The handle is closed before returning.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        Ok(Self::new(path, contents))
    }

    /// The base name used as the section heading, e.g. `01_intro.md`.
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_strips_directories() {
        let file = SourceFile::new("docs/chapters/01_intro.md", "");
        assert_eq!(file.label(), "01_intro.md");
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, [0xffu8, 0xfe, 0x00, 0x80]).unwrap();
        let err = SourceFile::read(&path).unwrap_err();
        assert!(err.to_string().contains("bad.md"));
    }
}
