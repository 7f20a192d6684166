//! Workflow module
//!
//! This module contains the engine that runs each pass and the context it
//! collects along the way.

pub mod context;
pub mod engine;

pub use context::{
    CompressContext, CompressStats, OperationType, PlannedOperation, RewriteContext, RewriteStats,
    WorkflowContext,
};
pub use engine::{
    COMPRESS_DONE, CompressOptions, REWRITE_DONE, RewriteOptions, compress_textures,
    rewrite_references,
};
