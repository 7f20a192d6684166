//! Texture preparation tools
//!
//! Two passes over a directory tree: compressing `.png`/`.jpg` textures to
//! `.dds` with an external tool, and pointing `.gltf` scene references at
//! the compressed files.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        COMPRESS_BIN, REWRITE_BIN, check_for_stdout_stream, compress_command, exit_code,
        get_input_directory, get_log_file, get_tool_path, get_verbosity, is_dry_run,
        report_error, rewrite_command,
    };
    pub use crate::config::{CompressorConfig, RewriteConfig};
    pub use crate::errors::{
        configuration_error, directory_not_found_error, external_tool_error,
        file_operation_error, not_a_directory_error, tool_launch_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::file_ops::{ProcessRunner, ToolRunner};
    pub use crate::logging::{LogLevel, format_message, init_console_logger, init_logger};
    pub use crate::workflow::{CompressOptions, RewriteOptions, compress_textures, rewrite_references};
}
