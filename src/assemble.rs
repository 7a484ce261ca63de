use std::path::PathBuf;

use crate::source::SourceFile;

/// Raw HTML block placed between sections. The stylesheet turns it into a
/// new page.
pub const PAGE_BREAK: &str = "<div class=\"page-break\"></div>";

/// A file that was listed but could not be read
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// The concatenated Markdown stream and what went into it
#[derive(Debug)]
pub struct Assembled {
    pub markdown: String,
    /// Paths of the sections, in output order.
    pub sections: Vec<PathBuf>,
    pub skipped: Vec<Skipped>,
}

/// Read every path and concatenate the readable ones.
///
/// An unreadable file is logged once, recorded in [`Assembled::skipped`] and
/// left out; separators only go between sections that were read.
pub fn assemble(paths: &[PathBuf]) -> Assembled {
    let mut files = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();

    for path in paths {
        match SourceFile::read(path) {
            Ok(file) => files.push(file),
            Err(error) => {
                log::warn!("skipping {}: {error:#}", path.display());
                skipped.push(Skipped {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    Assembled {
        markdown: concatenate(&files),
        sections: files.into_iter().map(|f| f.path).collect(),
        skipped,
    }
}

/// Join files into one Markdown document: a level-1 heading with the file
/// name, the file's text verbatim, and a page break before the next file.
pub fn concatenate(files: &[SourceFile]) -> String {
    let mut out = String::new();

    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
            out.push_str(PAGE_BREAK);
            out.push_str("\n\n");
        }
        out.push_str("# ");
        out.push_str(&file.label());
        out.push_str("\n\n");
        out.push_str(&file.contents);
    }

    out
}
