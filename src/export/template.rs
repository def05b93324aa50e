//! HTML templates wrapping rendered Markdown fragments.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use minijinja::{Environment, Value, context};

use crate::export::error::{ExportError, ExportResult};
use crate::export::theme::{THEME_FALLBACK, THEME_PDF, THEME_PRINT, get_theme_css};

/// Title used when neither the caller nor the document supplies one.
pub const DEFAULT_TITLE: &str = "Reminder API - Requirements Document";

/// Static footer line for print documents.
pub const DEFAULT_FOOTER_TITLE: &str = "Reminder API Requirements Document - Version 1.0";

/// Print-ready document with a footer, written by the HTML exporter.
pub const PRINT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <style>{{ theme_css }}</style>
</head>
<body>
{{ content }}
    <hr>
    <footer style="text-align: center; color: #7f8c8d; margin-top: 50px; font-size: 0.9em;">
        <p>{{ footer_title }}</p>
        <p>Generated on: {{ generated_on }}</p>
    </footer>
</body>
</html>
"##;

/// Document handed to the PDF engine.
pub const PDF_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{{ title }}</title>
    <style>{{ theme_css }}</style>
</head>
<body>
{{ content }}
</body>
</html>
"##;

/// Screen document written when no PDF engine is available.
pub const FALLBACK_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{{ title }}</title>
    <style>{{ theme_css }}</style>
</head>
<body>
{{ content }}
</body>
</html>
"##;

/// Which built-in document shape to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Print,
    Pdf,
    Fallback,
}

impl Layout {
    fn template(self) -> &'static str {
        match self {
            Layout::Print => PRINT_TEMPLATE,
            Layout::Pdf => PDF_TEMPLATE,
            Layout::Fallback => FALLBACK_TEMPLATE,
        }
    }

    fn default_css(self) -> &'static str {
        match self {
            Layout::Print => THEME_PRINT,
            Layout::Pdf => THEME_PDF,
            Layout::Fallback => THEME_FALLBACK,
        }
    }
}

/// Options for rendering a document.
#[derive(Default)]
pub struct RenderOptions<'a> {
    /// Path to a custom template file.
    pub template_path: Option<&'a Path>,
    /// Theme name or path to a CSS file.
    pub theme: Option<&'a str>,
    /// Footer line; defaults to [`DEFAULT_FOOTER_TITLE`].
    pub footer_title: Option<&'a str>,
}

/// Renders an HTML fragment into a complete document.
///
/// The fragment and stylesheet are inserted verbatim. `title`,
/// `footer_title`, and `generated_on` are HTML-escaped.
pub fn render_document(
    layout: Layout,
    title: &str,
    fragment: &str,
    generated_on: &str,
    options: &RenderOptions,
) -> ExportResult<String> {
    let theme_css = get_theme_css(options.theme, layout.default_css())?;

    let template_str = match options.template_path {
        Some(p) => std::fs::read_to_string(p).map_err(|source| ExportError::Asset {
            what: "template",
            path: p.to_path_buf(),
            source,
        })?,
        None => layout.template().to_string(),
    };

    // The .html name turns on auto-escaping for the plain-text fields.
    let mut env = Environment::new();
    env.add_template("document.html", &template_str)?;
    let tmpl = env.get_template("document.html")?;

    let html = tmpl.render(context! {
        title => title,
        content => Value::from_safe_string(fragment.to_string()),
        theme_css => Value::from_safe_string(theme_css),
        footer_title => options.footer_title.unwrap_or(DEFAULT_FOOTER_TITLE),
        generated_on => generated_on,
    })?;

    Ok(html)
}

/// Formats a timestamp in the layout of `date`'s default output.
///
/// `%Z` comes from the offset type: `Utc` prints `UTC`, while `Local` and
/// `FixedOffset` print the numeric offset (`+02:00`) rather than a zone
/// abbreviation such as `CEST`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%a %b %e %H:%M:%S %Z %Y").to_string()
}
