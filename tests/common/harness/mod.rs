//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, Markdown document builders,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod doc;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::ExportCommand;
#[allow(unused_imports)]
pub use doc::TestDoc;
#[allow(unused_imports)]
pub use env::TestEnv;
