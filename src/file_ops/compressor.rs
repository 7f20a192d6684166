//! Compression tool invocation
//!
//! This module builds the command line for the external compression tool,
//! checks whether a texture already has a compressed sibling, and runs the
//! tool through the [`ToolRunner`] seam.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::config::CompressorConfig;
use crate::errors::{Result, external_tool_error, tool_launch_error};

/// One call of the compression tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// The tool to run
    pub program: PathBuf,
    /// Format passed with `-f`
    pub format: String,
    /// Mip level value passed with `-m`
    pub mip_levels: String,
    /// The texture to compress
    pub input: PathBuf,
    /// Directory passed with `-o`, the texture's own directory
    pub output_dir: PathBuf,
}

impl ToolInvocation {
    /// Builds the invocation for `input` with the chosen `format`
    pub fn new(config: &CompressorConfig, input: &Path, format: &str) -> Self {
        let output_dir = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        ToolInvocation {
            program: config.tool_path.clone(),
            format: format.to_string(),
            mip_levels: config.mip_levels.clone(),
            input: input.to_path_buf(),
            output_dir,
        }
    }

    /// Arguments in the order the tool expects them
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-f"),
            OsString::from(&self.format),
            OsString::from("-m"),
            OsString::from(&self.mip_levels),
            self.input.clone().into_os_string(),
            OsString::from("-o"),
            self.output_dir.clone().into_os_string(),
        ]
    }
}

/// Runs compression tool invocations
pub trait ToolRunner {
    /// Runs `invocation` to completion
    ///
    /// # Errors
    /// Returns an error if the tool cannot be started or reports failure
    fn run(&self, invocation: &ToolInvocation) -> Result<()>;
}

/// Runs the tool as a blocking child process
///
/// The child inherits stdout and stderr, so the tool's own output shows up
/// between the progress lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<()> {
        debug!(
            "Running {} {:?}",
            invocation.program.display(),
            invocation.args()
        );

        let status = Command::new(&invocation.program)
            .args(invocation.args())
            .status()
            .map_err(|e| tool_launch_error(e, invocation.program.clone()))?;

        if !status.success() {
            return Err(external_tool_error(
                invocation.program.clone(),
                invocation.input.clone(),
                status.code(),
            ));
        }

        Ok(())
    }
}

/// The file the tool writes for `input`: same directory and stem, new extension
pub fn compressed_sibling(input: &Path, compressed_extension: &str) -> PathBuf {
    input.with_extension(compressed_extension)
}

/// Whether `input` already has its compressed sibling on disk
pub fn is_already_compressed(input: &Path, compressed_extension: &str) -> bool {
    compressed_sibling(input, compressed_extension).exists()
}
