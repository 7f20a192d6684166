//! File operations module
//!
//! This module contains the two side-effecting operations: running the
//! compression tool and rewriting scene files.

pub mod compressor;
pub mod rewriter;

pub use compressor::{
    ProcessRunner, ToolInvocation, ToolRunner, compressed_sibling, is_already_compressed,
};
pub use rewriter::{RewriteOutcome, decode_lossy, replace_references, rewrite_file};
