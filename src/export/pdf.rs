//! HTML-to-PDF engines and the start-up capability probe.
//!
//! PDF pagination is delegated to an external engine program. The probe runs
//! once per invocation and yields a [`RenderMode`]: either a native PDF engine
//! or the HTML fallback when nothing usable is installed.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::Builder;
use tracing::{debug, info};

use crate::export::error::{ExportError, ExportResult};
use crate::infra::{FsError, output_permissions, parent_dir};

/// Install hint printed when no engine can be found.
pub const ENGINE_INSTALL_HINT: &str =
    "wkhtmltopdf (https://wkhtmltopdf.org) or weasyprint (pip3 install --user weasyprint)";

/// Known HTML-to-PDF engine programs, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Wkhtmltopdf,
    Weasyprint,
    Chromium,
}

impl EngineKind {
    pub const ALL: [EngineKind; 3] = [
        EngineKind::Wkhtmltopdf,
        EngineKind::Weasyprint,
        EngineKind::Chromium,
    ];

    /// Name used in configuration and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Wkhtmltopdf => "wkhtmltopdf",
            EngineKind::Weasyprint => "weasyprint",
            EngineKind::Chromium => "chromium",
        }
    }

    /// Parses a configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// Executable names searched on `PATH`.
    fn programs(self) -> &'static [&'static str] {
        match self {
            EngineKind::Wkhtmltopdf => &["wkhtmltopdf"],
            EngineKind::Weasyprint => &["weasyprint"],
            EngineKind::Chromium => &["chromium", "chromium-browser", "google-chrome"],
        }
    }

    fn args(self, input: &Path, output: &Path) -> Vec<OsString> {
        match self {
            EngineKind::Wkhtmltopdf => vec![
                "--quiet".into(),
                "--page-size".into(),
                "A4".into(),
                "--enable-local-file-access".into(),
                input.into(),
                output.into(),
            ],
            EngineKind::Weasyprint => vec![input.into(), output.into()],
            EngineKind::Chromium => {
                let mut print_to = OsString::from("--print-to-pdf=");
                print_to.push(output);
                vec![
                    "--headless".into(),
                    "--disable-gpu".into(),
                    "--no-pdf-header-footer".into(),
                    print_to,
                    input.into(),
                ]
            }
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders a complete HTML document to a PDF file.
pub trait PdfEngine {
    fn name(&self) -> &str;
    fn render(&self, html: &str, output: &Path) -> ExportResult<()>;
}

/// An engine driven as a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEngine {
    kind: EngineKind,
    program: PathBuf,
}

impl CommandEngine {
    pub fn new(kind: EngineKind, program: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            program: program.into(),
        }
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn render_error(&self, output: &Path, detail: impl Into<String>) -> ExportError {
        ExportError::PdfRender {
            engine: self.kind.name().to_string(),
            output: output.to_path_buf(),
            detail: detail.into(),
        }
    }
}

impl PdfEngine for CommandEngine {
    fn name(&self) -> &str {
        self.kind.name()
    }

    /// Writes the HTML to a temporary file, runs the engine into a temporary
    /// PDF beside `output`, then renames it into place.
    fn render(&self, html: &str, output: &Path) -> ExportResult<()> {
        let input = Builder::new()
            .prefix("mdexport-")
            .suffix(".html")
            .tempfile()
            .map_err(|source| FsError::Io {
                path: output.to_path_buf(),
                source,
            })?;
        std::fs::write(input.path(), html).map_err(|source| FsError::Io {
            path: input.path().to_path_buf(),
            source,
        })?;

        let parent = parent_dir(output);
        if !parent.exists() {
            return Err(FsError::ParentNotFound {
                path: parent.to_path_buf(),
            }
            .into());
        }
        let staged = Builder::new()
            .prefix(".mdexport-")
            .suffix(".pdf")
            .tempfile_in(parent)
            .map_err(|source| FsError::Io {
                path: output.to_path_buf(),
                source,
            })?
            .into_temp_path();

        debug!(
            engine = %self.kind,
            program = %self.program.display(),
            input = %input.path().display(),
            "running pdf engine"
        );
        let result = Command::new(&self.program)
            .args(self.kind.args(input.path(), &staged))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.render_error(output, format!("failed to start: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let detail = match stderr.trim() {
                "" => format!("exited with {}", result.status),
                msg => format!("exited with {}: {}", result.status, msg),
            };
            return Err(self.render_error(output, detail));
        }

        let written = std::fs::metadata(&staged).map(|m| m.len()).unwrap_or(0);
        if written == 0 {
            return Err(self.render_error(output, "produced an empty file"));
        }

        if let Some(permissions) = output_permissions(output) {
            std::fs::set_permissions(&staged, permissions).map_err(|source| FsError::Io {
                path: output.to_path_buf(),
                source,
            })?;
        }

        staged.persist(output).map_err(|e| FsError::AtomicWrite {
            path: output.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}

/// Which engine the caller asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnginePreference {
    /// First available engine in [`EngineKind::ALL`] order.
    #[default]
    Auto,
    /// Only the named engine.
    Only(EngineKind),
}

/// Locates engine programs on the search path.
#[derive(Debug, Clone, Default)]
pub struct EngineProbe {
    search_path: Option<OsString>,
    overrides: HashMap<EngineKind, PathBuf>,
}

impl EngineProbe {
    /// Probe using the process `PATH`.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
            overrides: HashMap::new(),
        }
    }

    /// Probe using an explicit search path.
    pub fn with_search_path(path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(path.into()),
            overrides: HashMap::new(),
        }
    }

    /// Uses `program` for `kind` instead of searching for it.
    pub fn with_override(mut self, kind: EngineKind, program: impl Into<PathBuf>) -> Self {
        self.overrides.insert(kind, program.into());
        self
    }

    /// Finds the engine to use for `preference`, if any is available.
    pub fn probe(&self, preference: EnginePreference) -> Option<CommandEngine> {
        let kinds: &[EngineKind] = match &preference {
            EnginePreference::Auto => &EngineKind::ALL,
            EnginePreference::Only(kind) => std::slice::from_ref(kind),
        };

        let found = kinds.iter().find_map(|&kind| self.locate(kind));
        match &found {
            Some(engine) => info!(
                engine = %engine.kind,
                program = %engine.program.display(),
                "pdf engine available"
            ),
            None => info!(?preference, "no pdf engine available"),
        }
        found
    }

    fn locate(&self, kind: EngineKind) -> Option<CommandEngine> {
        if let Some(program) = self.overrides.get(&kind) {
            if is_executable(program) {
                return Some(CommandEngine::new(kind, program));
            }
            debug!(engine = %kind, program = %program.display(), "configured engine is not executable");
            return None;
        }

        let search_path = self.search_path.as_deref()?;
        kind.programs().iter().find_map(|name| {
            let program = find_program(name, search_path)?;
            Some(CommandEngine::new(kind, program))
        })
    }
}

/// Searches each directory of `search_path` for an executable `name`.
pub fn find_program(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| program_candidates(&dir, name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn program_candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{name}.exe")), dir.join(name)]
}

#[cfg(not(windows))]
fn program_candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Output mode chosen once at start-up.
pub enum RenderMode {
    NativePdf(Box<dyn PdfEngine>),
    HtmlFallback,
}

impl RenderMode {
    pub fn from_engine(engine: Option<Box<dyn PdfEngine>>) -> Self {
        match engine {
            Some(engine) => RenderMode::NativePdf(engine),
            None => RenderMode::HtmlFallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RenderMode::HtmlFallback)
    }
}

impl fmt::Debug for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::NativePdf(engine) => f.debug_tuple("NativePdf").field(&engine.name()).finish(),
            RenderMode::HtmlFallback => f.write_str("HtmlFallback"),
        }
    }
}
