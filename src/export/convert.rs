//! The two export pipelines: Markdown to print HTML, and Markdown to PDF.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::export::error::{ExportError, ExportResult};
use crate::export::html::{MarkdownFlavor, first_heading, markdown_to_html};
use crate::export::pdf::{
    ENGINE_INSTALL_HINT, EnginePreference, EngineProbe, PdfEngine, RenderMode,
};
use crate::export::template::{DEFAULT_TITLE, Layout, RenderOptions, render_document};
use crate::infra::{derive_output_path, read_markdown, write_atomic};

/// Caller-supplied overrides shared by both exporters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportSettings<'a> {
    /// Document title; defaults to the first level-1 heading.
    pub title: Option<&'a str>,
    /// Footer line for print documents.
    pub footer_title: Option<&'a str>,
    /// Theme name or CSS file path.
    pub theme: Option<&'a str>,
    /// Custom template file.
    pub template_path: Option<&'a Path>,
}

impl<'a> ExportSettings<'a> {
    fn render_options(&self) -> RenderOptions<'a> {
        RenderOptions {
            template_path: self.template_path,
            theme: self.theme,
            footer_title: self.footer_title,
        }
    }

    fn resolve_title(&self, markdown: &str) -> String {
        self.title
            .map(str::to_string)
            .or_else(|| first_heading(markdown))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }
}

/// What an export run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    Html,
    Pdf,
    HtmlFallback,
}

/// Result of a successful export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: OutputKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

/// Reads the source, failing with `MissingInputFile` before anything else.
fn read_source(input: &Path) -> ExportResult<String> {
    if !input.is_file() {
        return Err(ExportError::MissingInputFile {
            path: input.to_path_buf(),
        });
    }
    Ok(read_markdown(input)?)
}

/// Converts `input` to a print-styled HTML document beside it.
///
/// `generated_on` is the footer timestamp text.
pub fn export_html(
    input: &Path,
    settings: &ExportSettings,
    generated_on: &str,
) -> ExportResult<ExportOutcome> {
    let markdown = read_source(input)?;
    let output = derive_output_path(input, "html");
    let title = settings.resolve_title(&markdown);

    let fragment = markdown_to_html(&markdown, MarkdownFlavor::CommonMark);
    let document = render_document(
        Layout::Print,
        &title,
        &fragment,
        generated_on,
        &settings.render_options(),
    )?;

    write_atomic(&output, document.as_bytes())?;
    info!(input = %input.display(), output = %output.display(), "exported html");

    Ok(ExportOutcome {
        input: input.to_path_buf(),
        output,
        kind: OutputKind::Html,
        title,
        engine: None,
    })
}

/// Picks the render mode once, before any document is read.
///
/// Without an engine the result is `HtmlFallback`, unless `allow_fallback` is
/// false, in which case the run fails with `MissingDependency`.
pub fn select_render_mode(
    probe: &EngineProbe,
    preference: EnginePreference,
    allow_fallback: bool,
) -> ExportResult<RenderMode> {
    let engine = probe
        .probe(preference)
        .map(|engine| Box::new(engine) as Box<dyn PdfEngine>);

    if engine.is_none() && !allow_fallback {
        let name = match preference {
            EnginePreference::Auto => "PDF rendering engine",
            EnginePreference::Only(kind) => kind.name(),
        };
        return Err(ExportError::MissingDependency {
            name: name.to_string(),
            hint: ENGINE_INSTALL_HINT.to_string(),
        });
    }

    let mode = RenderMode::from_engine(engine);
    debug!(?mode, "selected render mode");
    Ok(mode)
}

/// Converts `input` to PDF, or to fallback HTML when `mode` says so.
pub fn export_pdf(
    input: &Path,
    mode: &RenderMode,
    settings: &ExportSettings,
) -> ExportResult<ExportOutcome> {
    let markdown = read_source(input)?;
    let title = settings.resolve_title(&markdown);
    let fragment = markdown_to_html(&markdown, MarkdownFlavor::Extra);
    let options = settings.render_options();

    match mode {
        RenderMode::NativePdf(engine) => {
            let output = derive_output_path(input, "pdf");
            let document = render_document(Layout::Pdf, &title, &fragment, "", &options)?;
            engine.render(&document, &output)?;
            info!(
                input = %input.display(),
                output = %output.display(),
                engine = engine.name(),
                "exported pdf"
            );

            Ok(ExportOutcome {
                input: input.to_path_buf(),
                output,
                kind: OutputKind::Pdf,
                title,
                engine: Some(engine.name().to_string()),
            })
        }
        RenderMode::HtmlFallback => {
            let output = derive_output_path(input, "html");
            let document = render_document(Layout::Fallback, &title, &fragment, "", &options)?;
            write_atomic(&output, document.as_bytes())?;
            warn!(output = %output.display(), "no pdf engine; wrote html instead");

            Ok(ExportOutcome {
                input: input.to_path_buf(),
                output,
                kind: OutputKind::HtmlFallback,
                title,
                engine: None,
            })
        }
    }
}
