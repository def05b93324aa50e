//! Handler for `md2pdf`.

use anyhow::Result;

use crate::cli::PdfCli;
use crate::cli::config::Config;
use crate::cli::output::OutputFormat;
use crate::export::{
    EngineProbe, ExportSettings, OutputKind, export_pdf, select_render_mode,
};

use super::{manual_pdf_instructions, print_result};

/// Internal implementation that accepts an explicit engine probe.
pub fn handle_pdf_impl(cli: &PdfCli, config: &Config, probe: &EngineProbe) -> Result<()> {
    let args = &cli.common;
    let preference = config.engine_preference(cli.engine)?;
    let mode = select_render_mode(probe, preference, !cli.no_fallback)?;

    let settings = ExportSettings {
        title: config.title(args.title.as_deref()),
        footer_title: config.footer_title(None),
        theme: config.theme(args.theme.as_deref()),
        template_path: args.template.as_deref(),
    };
    let outcome = export_pdf(&args.markdown, &mode, &settings)?;

    if mode.is_fallback() && matches!(args.cli_format, OutputFormat::Human) {
        println!("PDF conversion libraries not available.");
        println!("Creating HTML version instead...");
    }

    let message = match outcome.kind {
        OutputKind::HtmlFallback => format!(
            "✓ Created HTML file: {}\n\n{}",
            outcome.output.display(),
            manual_pdf_instructions(&outcome.output)
        ),
        _ => format!(
            "✓ Successfully converted {} to {}",
            outcome.input.display(),
            outcome.output.display()
        ),
    };
    print_result(args.cli_format, &outcome, &message)
}

/// Handle the `md2pdf` command, probing `PATH` for an engine.
pub fn handle_pdf(cli: &PdfCli, config: &Config) -> Result<()> {
    let probe = config.engine_probe()?;
    handle_pdf_impl(cli, config, &probe)
}
