//! Configuration module
//!
//! This module contains the compiled-in configuration for both passes.

mod model;

pub use model::{CompressorConfig, FormatSet, RewriteConfig, TextureKind, default_tool_path};
