//! Workflow context
//!
//! This module defines the statistics and dry-run plan collected while a
//! pass runs.

use std::path::PathBuf;

/// Represents a planned operation for dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// The file the operation applies to
    pub source: PathBuf,
    /// The file the operation produces or overwrites
    pub destination: PathBuf,
    /// The type of operation
    pub operation_type: OperationType,
}

/// Type of planned operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationType {
    /// Compression with the given format
    Compress(String),
    /// Reference rewrite with the given number of replacements
    Rewrite(usize),
}

/// Statistics about a compression pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressStats {
    /// Number of input images found
    pub files_found: usize,
    /// Number of images handed to the tool (or planned to be, in a dry run)
    pub files_compressed: usize,
    /// Number of images skipped because a compressed sibling exists
    pub files_skipped: usize,
}

/// Statistics about a rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Number of scene files found
    pub files_found: usize,
    /// Number of scene files rewritten
    pub files_updated: usize,
    /// Number of scene files that failed
    pub errors: usize,
    /// Total literals replaced
    pub replacements: usize,
    /// Total malformed bytes dropped while decoding
    pub dropped_bytes: usize,
}

/// Context for a pass
///
/// Generic over the statistics type so both passes share the dry-run plan.
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext<S> {
    /// Whether operations are only planned, not performed
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: S,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

impl<S: Default> WorkflowContext<S> {
    /// Creates a new workflow context
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            stats: S::default(),
            planned_operations: Vec::new(),
        }
    }

    /// Adds a planned operation to the context
    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }
}

/// Context of a compression pass
pub type CompressContext = WorkflowContext<CompressStats>;

/// Context of a rewrite pass
pub type RewriteContext = WorkflowContext<RewriteStats>;
