//! mdexport - Markdown to print-ready HTML and PDF

pub mod cli;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    HtmlCli, PdfCli,
    config::Config,
    handlers::{handle_html, handle_pdf},
    logging::init_logging,
};

/// Entry point for `md2html`.
pub fn run_html() -> Result<()> {
    let cli = HtmlCli::parse();
    init_logging(cli.common.verbose);
    let config = Config::load()?;
    handle_html(&cli, &config)
}

/// Entry point for `md2pdf`.
pub fn run_pdf() -> Result<()> {
    let cli = PdfCli::parse();
    init_logging(cli.common.verbose);
    let config = Config::load()?;
    handle_pdf(&cli, &config)
}
