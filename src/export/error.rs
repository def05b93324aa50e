//! Error types for export runs.

use std::path::PathBuf;
use thiserror::Error;

use crate::infra::FsError;

/// Errors that end an export run.
///
/// `MissingInputFile` and `MissingDependency` are detected before any output
/// file is opened. The PDF exporter treats `MissingDependency` for its
/// rendering engine as recoverable unless the HTML fallback is disabled.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File {} not found!", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("{name} not found.\nPlease install: {hint}")]
    MissingDependency { name: String, hint: String },

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Unknown theme: '{0}'. Use 'print', 'pdf', 'fallback', or a path to a CSS file.")]
    UnknownTheme(String),

    #[error("failed to read {what} {}: {source}", path.display())]
    Asset {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{engine} failed to render {}: {detail}", output.display())]
    PdfRender {
        engine: String,
        output: PathBuf,
        detail: String,
    },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
