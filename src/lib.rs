//! Concatenate a directory of Markdown files into one PDF.
//!
//! Files are collected in name order, joined with a heading per file and a
//! page break between files, rendered to HTML, wrapped in a styled template
//! and handed to an external HTML-to-PDF engine.

mod assemble;
mod collect;
mod config;
mod engine;
mod markdown;
mod source;
mod template;

pub use assemble::{Assembled, PAGE_BREAK, Skipped, assemble, concatenate};
pub use collect::markdown_files;
pub use config::{Config, DocumentConfig, EngineConfig, InputConfig};
pub use engine::{EngineError, PdfRenderer, Wkhtmltopdf};
pub use markdown::{CommonMark, MarkdownRenderer};
pub use source::SourceFile;
pub use template::Template;

use anyhow::Context;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct Options {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
    pub template: Template,
    /// Also write the wrapped HTML document here.
    pub html_output: Option<PathBuf>,
}

impl Options {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_dir: I, output: O) -> Self {
        Self::from_config(input_dir, output, &Config::compiled_default())
    }

    pub fn from_config<I: Into<PathBuf>, O: Into<PathBuf>>(
        input_dir: I,
        output: O,
        config: &Config,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output: output.into(),
            pattern: config.input.pattern.clone(),
            template: Template::from_config(config),
            html_output: None,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct Report {
    pub output: PathBuf,
    /// Files that made it into the PDF, in order.
    pub sections: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl Report {
    pub fn message(&self) -> String {
        let n = self.sections.len();
        format!(
            "Created '{}' from {} Markdown file{}",
            self.output.display(),
            n,
            if n == 1 { "" } else { "s" }
        )
    }
}

#[derive(Debug)]
pub enum BundleError {
    NoMarkdownFiles { dir: PathBuf, pattern: String },
    NothingReadable { dir: PathBuf, count: usize },
    EngineUnavailable { program: String },
    Other(anyhow::Error),
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleError::NoMarkdownFiles { dir, pattern } => write!(
                f,
                "no files matching '{pattern}' found in '{}'; check the path",
                dir.display()
            ),
            BundleError::NothingReadable { dir, count } => write!(
                f,
                "none of the {count} Markdown file(s) in '{}' could be read",
                dir.display()
            ),
            BundleError::EngineUnavailable { program } => write!(
                f,
                "could not run the PDF rendering engine '{program}'. wkhtmltopdf must be \
                 installed and on your PATH (or pass its location with --engine)"
            ),
            BundleError::Other(e) => write!(f, "unexpected error: {e:#}"),
        }
    }
}

impl std::error::Error for BundleError {}

impl From<anyhow::Error> for BundleError {
    fn from(e: anyhow::Error) -> Self {
        BundleError::Other(e)
    }
}

impl From<EngineError> for BundleError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Unavailable { program } => BundleError::EngineUnavailable { program },
            EngineError::Failed(e) => BundleError::Other(e),
        }
    }
}

/// Assemble the Markdown document for a directory without rendering it.
pub fn assemble_dir(dir: &Path, pattern: &str) -> Result<Assembled, BundleError> {
    let paths = markdown_files(dir, pattern)?;
    if paths.is_empty() {
        return Err(BundleError::NoMarkdownFiles {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    let assembled = assemble(&paths);
    if assembled.sections.is_empty() {
        return Err(BundleError::NothingReadable {
            dir: dir.to_path_buf(),
            count: paths.len(),
        });
    }
    Ok(assembled)
}

/// Collect, assemble, render and write the PDF.
pub fn bundle(
    options: &Options,
    markdown: &dyn MarkdownRenderer,
    pdf: &dyn PdfRenderer,
) -> Result<Report, BundleError> {
    let assembled = assemble_dir(&options.input_dir, &options.pattern)?;
    log::debug!(
        "assembled {} section(s), {} skipped",
        assembled.sections.len(),
        assembled.skipped.len()
    );

    let body = markdown.render(&assembled.markdown);
    let html = options.template.wrap(&body);

    if let Some(path) = &options.html_output {
        create_parent(path)?;
        fs::write(path, &html)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    create_parent(&options.output)?;
    pdf.render(&html, &options.output)?;
    log::info!("wrote {}", options.output.display());

    Ok(Report {
        output: options.output.clone(),
        sections: assembled.sections,
        skipped: assembled.skipped.into_iter().map(|s| s.path).collect(),
    })
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory '{}'", parent.display())
            })?;
        }
    }
    Ok(())
}
