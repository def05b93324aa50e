//! Output path derivation for exported documents.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Markdown source used when no path is given on the command line.
pub const DEFAULT_MARKDOWN_PATH: &str = "API_REQUIREMENTS_DOCUMENT.md";

/// Derives the output path for `input` with the given extension.
///
/// - A trailing `.md` extension (ASCII case-insensitive) is replaced
/// - Any other path gets the extension appended, keeping the original name
/// - Parent directories are preserved as given
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use mdexport::infra::derive_output_path;
///
/// assert_eq!(derive_output_path(Path::new("report.md"), "html"), PathBuf::from("report.html"));
/// assert_eq!(derive_output_path(Path::new("notes.txt"), "pdf"), PathBuf::from("notes.txt.pdf"));
/// assert_eq!(derive_output_path(Path::new("README"), "html"), PathBuf::from("README.html"));
/// ```
pub fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    if has_markdown_extension(input) {
        return input.with_extension(extension);
    }

    let mut name: OsString = input.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Returns true if the path ends in `.md`, ignoring ASCII case.
pub fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}
