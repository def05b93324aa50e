//! Stylesheets embedded in exported documents.

use std::path::Path;

use crate::export::error::{ExportError, ExportResult};

/// Print-oriented stylesheet for the HTML exporter.
pub const THEME_PRINT: &str = r#"
@media print {
    @page {
        size: A4;
        margin: 2cm;
    }
    body {
        margin: 0;
        padding: 0;
    }
}

body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    max-width: 900px;
    margin: 0 auto;
    padding: 40px 20px;
    line-height: 1.7;
    color: #333;
    background-color: #fff;
}

h1 {
    color: #2c3e50;
    border-bottom: 4px solid #3498db;
    padding-bottom: 15px;
    margin-bottom: 30px;
    font-size: 2.5em;
}

h2 {
    color: #34495e;
    border-bottom: 2px solid #95a5a6;
    padding-bottom: 10px;
    margin-top: 40px;
    margin-bottom: 20px;
    font-size: 1.8em;
}

h3 {
    color: #555;
    margin-top: 30px;
    margin-bottom: 15px;
    font-size: 1.4em;
}

h4 {
    color: #666;
    margin-top: 20px;
    margin-bottom: 10px;
    font-size: 1.2em;
}

table {
    border-collapse: collapse;
    width: 100%;
    margin: 25px 0;
    box-shadow: 0 2px 5px rgba(0,0,0,0.1);
}

th {
    background-color: #3498db;
    color: white;
    font-weight: bold;
    padding: 15px;
    text-align: left;
    border: 1px solid #2980b9;
}

td {
    padding: 12px 15px;
    border: 1px solid #ddd;
}

tr:nth-child(even) { background-color: #f8f9fa; }
tr:hover { background-color: #e8f4f8; }

code {
    background-color: #f4f4f4;
    padding: 3px 8px;
    border-radius: 4px;
    font-family: 'Courier New', Consolas, monospace;
    font-size: 0.9em;
    color: #e83e8c;
}

pre {
    background-color: #f4f4f4;
    padding: 20px;
    border-radius: 6px;
    overflow-x: auto;
    border-left: 4px solid #3498db;
    margin: 20px 0;
}

pre code {
    background-color: transparent;
    padding: 0;
    color: #333;
}

blockquote {
    border-left: 4px solid #3498db;
    margin: 25px 0;
    padding: 15px 25px;
    background-color: #f8f9fa;
    color: #555;
    font-style: italic;
}

ul, ol { margin: 15px 0; padding-left: 40px; }
li { margin: 8px 0; }

a { color: #3498db; text-decoration: none; }
a:hover { text-decoration: underline; }

hr {
    border: none;
    border-top: 2px solid #ecf0f1;
    margin: 40px 0;
}

.toc {
    background-color: #f8f9fa;
    padding: 20px;
    border-radius: 6px;
    margin: 30px 0;
}
.toc ul { list-style-type: none; padding-left: 20px; }
.toc a { color: #34495e; }

.highlight-box {
    background-color: #e8f4f8;
    border-left: 4px solid #3498db;
    padding: 15px 20px;
    margin: 20px 0;
    border-radius: 4px;
}

@media print {
    body { padding: 0; }
    h1, h2, h3 { page-break-after: avoid; }
    table { page-break-inside: avoid; }
}
"#;

/// Paged stylesheet for documents handed to a PDF engine.
pub const THEME_PDF: &str = r#"
@page {
    size: A4;
    margin: 2cm;
}
body {
    font-family: 'DejaVu Sans', Arial, sans-serif;
    line-height: 1.6;
    color: #333;
}
h1 {
    color: #2c3e50;
    border-bottom: 3px solid #3498db;
    padding-bottom: 10px;
}
h2 {
    color: #34495e;
    border-bottom: 2px solid #95a5a6;
    padding-bottom: 5px;
    margin-top: 30px;
}
h3 { color: #555; margin-top: 20px; }
h1, h2, h3 { page-break-after: avoid; }
table {
    border-collapse: collapse;
    width: 100%;
    margin: 20px 0;
    page-break-inside: avoid;
}
th, td {
    border: 1px solid #ddd;
    padding: 12px;
    text-align: left;
}
th {
    background-color: #3498db;
    color: white;
    font-weight: bold;
}
tr:nth-child(even) { background-color: #f2f2f2; }
code {
    background-color: #f4f4f4;
    padding: 2px 6px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
}
pre {
    background-color: #f4f4f4;
    padding: 15px;
    border-radius: 5px;
    overflow-x: auto;
}
.codehilite pre { border-left: 4px solid #3498db; }
pre code { background-color: transparent; padding: 0; }
.codehilite .comment { color: #6a737d; font-style: italic; }
.codehilite .keyword, .codehilite .storage { color: #d73a49; }
.codehilite .string { color: #032f62; }
.codehilite .constant { color: #005cc5; }
.codehilite .entity { color: #6f42c1; }
blockquote {
    border-left: 4px solid #3498db;
    margin: 20px 0;
    padding-left: 20px;
    color: #666;
}
ul, ol { margin: 10px 0; padding-left: 30px; }
li { margin: 5px 0; }
a { color: #3498db; }
"#;

/// Compact screen stylesheet for the HTML written when no PDF engine exists.
pub const THEME_FALLBACK: &str = r#"
body {
    font-family: Arial, sans-serif;
    max-width: 900px;
    margin: 0 auto;
    padding: 20px;
    line-height: 1.6;
}
h1 { color: #2c3e50; border-bottom: 3px solid #3498db; }
h2 { color: #34495e; border-bottom: 2px solid #95a5a6; margin-top: 30px; }
table { border-collapse: collapse; width: 100%; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
th { background-color: #3498db; color: white; }
code { background-color: #f4f4f4; padding: 2px 6px; }
pre { background-color: #f4f4f4; padding: 15px; overflow-x: auto; }
.codehilite .comment { color: #6a737d; font-style: italic; }
.codehilite .keyword, .codehilite .storage { color: #d73a49; }
.codehilite .string { color: #032f62; }
.codehilite .constant { color: #005cc5; }
.codehilite .entity { color: #6f42c1; }
@media print {
    @page { size: A4; margin: 2cm; }
    h1, h2, h3 { page-break-after: avoid; }
    table { page-break-inside: avoid; }
}
"#;

/// Gets CSS for the requested theme.
///
/// # Arguments
///
/// * `theme` - Theme name ("print", "pdf", "fallback") or path to a CSS file.
/// * `default_css` - Stylesheet used when no theme is requested.
///
/// # Errors
///
/// Returns an error if the theme name is unknown or the CSS file cannot be read.
pub fn get_theme_css(theme: Option<&str>, default_css: &str) -> ExportResult<String> {
    match theme {
        None => Ok(default_css.to_string()),
        Some("print") => Ok(THEME_PRINT.to_string()),
        Some("pdf") => Ok(THEME_PDF.to_string()),
        Some("fallback") => Ok(THEME_FALLBACK.to_string()),
        Some(name) => {
            let path = Path::new(name);
            if path.is_file() {
                std::fs::read_to_string(path).map_err(|source| ExportError::Asset {
                    what: "stylesheet",
                    path: path.to_path_buf(),
                    source,
                })
            } else {
                Err(ExportError::UnknownTheme(name.to_string()))
            }
        }
    }
}
