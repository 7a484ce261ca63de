use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub input: InputConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentConfig {
    pub title: String,
    /// Replaces the built-in stylesheet when set.
    pub stylesheet: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Concatenated Document".to_string(),
            stylesheet: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Glob matched against file names in the input directory.
    pub pattern: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pattern: "*.md".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub program: String,
    /// Extra arguments placed before the input and output operands.
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "wkhtmltopdf".to_string(),
            args: Vec::new(),
        }
    }
}

impl Config {
    /// The configuration bundled into the binary from `default_config.toml`.
    /// `build.rs` has already checked that it parses.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Keys missing from the file keep their
    /// compiled defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The stylesheet that ends up in the HTML document.
    pub fn stylesheet(&self) -> String {
        match &self.document.stylesheet {
            Some(custom) => custom.clone(),
            None => Self::compiled_default()
                .document
                .stylesheet
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_bundled_file() {
        let config = Config::compiled_default();
        assert_eq!(config.document.title, "Concatenated Document");
        assert_eq!(config.input.pattern, "*.md");
        assert_eq!(config.engine.program, "wkhtmltopdf");
        assert!(config.engine.args.is_empty());
        let stylesheet = config.document.stylesheet.expect("bundled stylesheet");
        assert!(stylesheet.contains("page-break-before: always"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml("[document]\ntitle = \"Handbook\"\n").unwrap();
        assert_eq!(config.document.title, "Handbook");
        assert_eq!(config.input.pattern, "*.md");
        assert_eq!(config.engine.program, "wkhtmltopdf");
        assert!(config.stylesheet().contains(".page-break"));
    }

    #[test]
    fn custom_stylesheet_replaces_default() {
        let config = Config::from_toml(
            "[document]\nstylesheet = \"body { margin: 0; }\"\n\n[engine]\nargs = [\"--page-size\", \"A5\"]\n",
        )
        .unwrap();
        assert_eq!(config.stylesheet(), "body { margin: 0; }");
        assert_eq!(config.engine.args, vec!["--page-size", "A5"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[document\ntitle = 3").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
