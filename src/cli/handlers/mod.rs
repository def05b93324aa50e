//! Command handlers for the CLI.

mod html;
mod pdf;


use std::path::Path;

use anyhow::Result;

use crate::cli::output::{Output, OutputFormat};
use crate::export::ExportOutcome;

pub use html::handle_html;
pub use pdf::{handle_pdf, handle_pdf_impl};

// ===========================================
// Shared Utilities
// ===========================================

/// Steps for turning an HTML file into a PDF by hand.
pub(crate) fn manual_pdf_instructions(html_file: &Path) -> String {
    format!(
        "To convert to PDF:\n\
         1. Open the HTML file in your web browser\n   \
         File: {}\n\
         2. Press Ctrl+P (Windows/Linux) or Cmd+P (Mac)\n\
         3. Select 'Save as PDF' as the destination\n\
         4. Click 'Save'\n\
         \n\
         Alternatively, you can use online converters:\n\
         - https://www.ilovepdf.com/html-to-pdf\n\
         - https://www.adobe.com/acrobat/online/html-to-pdf.html",
        html_file.display()
    )
}

/// Print the result in the requested format.
pub(crate) fn print_result(
    format: OutputFormat,
    outcome: &ExportOutcome,
    human_message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", human_message);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(outcome))?);
        }
    }
    Ok(())
}
