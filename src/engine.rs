use anyhow::{Context, anyhow};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::EngineConfig;

/// HTML document to PDF file conversion.
pub trait PdfRenderer {
    /// Render `html` into a PDF at `output`, replacing any existing file.
    fn render(&self, html: &str, output: &Path) -> Result<(), EngineError>;
}

#[derive(Debug)]
pub enum EngineError {
    /// The rendering engine binary isn't installed or isn't on the search path.
    Unavailable { program: String },
    Failed(anyhow::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Unavailable { program } => {
                write!(f, "rendering engine '{program}' could not be started")
            }
            EngineError::Failed(e) => write!(f, "{e:#}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<anyhow::Error> for EngineError {
    fn from(e: anyhow::Error) -> Self {
        EngineError::Failed(e)
    }
}

/// Drives the `wkhtmltopdf` binary, feeding the document on stdin.
#[derive(Debug, Clone)]
pub struct Wkhtmltopdf {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for Wkhtmltopdf {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl Wkhtmltopdf {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    fn command(&self, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--quiet")
            .arg("--encoding")
            .arg("utf-8")
            .args(&self.args)
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }
}

impl PdfRenderer for Wkhtmltopdf {
    fn render(&self, html: &str, output: &Path) -> Result<(), EngineError> {
        let mut cmd = self.command(output);
        log::debug!("running {:?}", cmd);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(EngineError::Unavailable {
                    program: self.program.clone(),
                });
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to start '{}'", self.program))
                    .into());
            }
        };

        // dropping stdin closes the pipe so the engine sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(html.as_bytes()) {
                // the engine may exit early; its status and stderr say why
                log::debug!("writing to {} failed: {e}", self.program);
            }
        }

        let result = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for '{}'", self.program))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let stderr = stderr.trim();
            let error = if stderr.is_empty() {
                anyhow!("'{}' exited with {}", self.program, result.status)
            } else {
                anyhow!("'{}' exited with {}: {stderr}", self.program, result.status)
            };
            return Err(EngineError::Failed(error));
        }

        Ok(())
    }
}
