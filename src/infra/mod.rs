//! File I/O and output path handling

mod fs;
mod paths;

pub use fs::{
    FsError, decode_markdown, output_permissions, parent_dir, read_markdown, write_atomic,
};
pub use paths::{DEFAULT_MARKDOWN_PATH, derive_output_path, has_markdown_extension};
