//! Handler for `md2html`.

use anyhow::Result;
use chrono::Local;

use crate::cli::HtmlCli;
use crate::cli::config::Config;
use crate::export::{ExportSettings, export_html, format_timestamp};

use super::{manual_pdf_instructions, print_result};

/// Handle the `md2html` command.
pub fn handle_html(cli: &HtmlCli, config: &Config) -> Result<()> {
    let args = &cli.common;
    let settings = ExportSettings {
        title: config.title(args.title.as_deref()),
        footer_title: config.footer_title(cli.footer_title.as_deref()),
        theme: config.theme(args.theme.as_deref()),
        template_path: args.template.as_deref(),
    };

    let generated_on = format_timestamp(&Local::now());
    let outcome = export_html(&args.markdown, &settings, &generated_on)?;

    let message = format!(
        "✓ Successfully converted {} to {}\n\n{}",
        outcome.input.display(),
        outcome.output.display(),
        manual_pdf_instructions(&outcome.output)
    );
    print_result(args.cli_format, &outcome, &message)
}
