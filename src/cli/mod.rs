//! CLI definitions for the `md2html` and `md2pdf` entry points.

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Args, Parser, ValueEnum};
use std::path::PathBuf;

use crate::export::{EngineKind, EnginePreference};
use crate::infra::DEFAULT_MARKDOWN_PATH;
use output::OutputFormat;

/// md2html - convert a Markdown document to print-ready HTML
#[derive(Parser, Debug)]
#[command(name = "md2html", version, about, long_about = None)]
pub struct HtmlCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Footer line printed above the generation timestamp
    #[arg(long)]
    pub footer_title: Option<String>,
}

/// md2pdf - convert a Markdown document to PDF, or to HTML when no PDF engine is installed
#[derive(Parser, Debug)]
#[command(name = "md2pdf", version, about, long_about = None)]
pub struct PdfCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// HTML-to-PDF engine to use
    #[arg(long, value_enum)]
    pub engine: Option<EngineChoice>,

    /// Fail instead of writing HTML when no PDF engine is available
    #[arg(long)]
    pub no_fallback: bool,
}

/// Arguments shared by both exporters.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Markdown file to convert
    #[arg(value_name = "MARKDOWN_PATH", default_value = DEFAULT_MARKDOWN_PATH)]
    pub markdown: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Document title (defaults to the first heading)
    #[arg(long)]
    pub title: Option<String>,

    /// CSS theme (print, pdf, fallback, or path to CSS file)
    #[arg(long)]
    pub theme: Option<String>,

    /// Custom template file
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// CLI output format (for status messages, not document content)
    #[arg(long = "cli-format", value_enum, default_value_t = OutputFormat::Human)]
    pub cli_format: OutputFormat,
}

/// Engine selection for `md2pdf --engine`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EngineChoice {
    /// First installed engine (wkhtmltopdf, weasyprint, chromium)
    #[default]
    Auto,
    Wkhtmltopdf,
    Weasyprint,
    /// Headless Chromium or Google Chrome
    Chromium,
}

impl From<EngineChoice> for EnginePreference {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::Auto => EnginePreference::Auto,
            EngineChoice::Wkhtmltopdf => EnginePreference::Only(EngineKind::Wkhtmltopdf),
            EngineChoice::Weasyprint => EnginePreference::Only(EngineKind::Weasyprint),
            EngineChoice::Chromium => EnginePreference::Only(EngineKind::Chromium),
        }
    }
}
