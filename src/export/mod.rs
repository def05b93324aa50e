//! Export pipelines converting Markdown documents to HTML and PDF.
//!
//! Markdown parsing is delegated to `pulldown-cmark`, document assembly to
//! `minijinja` templates with embedded stylesheets, and PDF pagination to an
//! external HTML-to-PDF engine found at start-up.

mod convert;
mod error;
mod html;
pub mod pdf;
pub mod template;
mod theme;

pub use convert::{
    ExportOutcome, ExportSettings, OutputKind, export_html, export_pdf, select_render_mode,
};
pub use error::{ExportError, ExportResult};
pub use html::{MarkdownFlavor, first_heading, markdown_to_html};
pub use pdf::{CommandEngine, EngineKind, EnginePreference, EngineProbe, PdfEngine, RenderMode};
pub use template::{Layout, RenderOptions, format_timestamp, render_document};
pub use theme::{THEME_FALLBACK, THEME_PDF, THEME_PRINT, get_theme_css};
