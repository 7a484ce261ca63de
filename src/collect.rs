use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};

/// List the files directly inside `dir` whose name matches `pattern`,
/// sorted by file name.
///
/// Hidden entries (leading `.`) and anything that isn't a regular file are
/// left out. An empty result is not an error here.
pub fn markdown_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile(pattern)?;

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read an entry of '{}'", dir.display()))?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') || !matcher.is_match(&name) {
            continue;
        }

        let path = entry.path();
        // follows symlinks, unlike DirEntry::file_type
        if !path.is_file() {
            log::debug!("skipping non-file entry {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!(
        "found {} file(s) matching '{}' in {}",
        files.len(),
        pattern,
        dir.display()
    );
    Ok(files)
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    let glob = Glob::new(pattern).with_context(|| format!("Invalid file pattern '{pattern}'"))?;
    Ok(glob.compile_matcher())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn sorts_markdown_files_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.md", "10_z.md", "02_y.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = markdown_files(dir.path(), "*.md").unwrap();
        assert_eq!(names(&files), vec!["02_y.md", "10_z.md", "a.md", "b.md"]);
    }

    #[test]
    fn ignores_other_extensions_hidden_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("README.MD"), "x").unwrap();
        fs::write(dir.path().join(".draft.md"), "x").unwrap();
        fs::write(dir.path().join("keep.md"), "x").unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        let files = markdown_files(dir.path(), "*.md").unwrap();
        assert_eq!(names(&files), vec!["keep.md"]);
    }

    #[test]
    fn does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.md"), "x").unwrap();

        let files = markdown_files(dir.path(), "*.md").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn custom_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.markdown"), "x").unwrap();
        fs::write(dir.path().join("b.md"), "x").unwrap();

        let files = markdown_files(dir.path(), "*.{md,markdown}").unwrap();
        assert_eq!(names(&files), vec!["a.markdown", "b.md"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = markdown_files(&missing, "*.md").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(markdown_files(dir.path(), "[").is_err());
    }
}
