//! Workflow engine
//!
//! This module contains the two passes: compressing textures and rewriting
//! scene references. Each walks its input directory once, in order.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use log::{debug, error, info, warn};

use crate::config::{CompressorConfig, RewriteConfig};
use crate::discovery::{FORMAT_RULES, classify_with_rules, scan_directory};
use crate::file_ops::{
    ToolInvocation, ToolRunner, compressed_sibling, is_already_compressed, rewrite_file,
};
use crate::logging::format_message;

use super::context::{
    CompressContext, OperationType, PlannedOperation, RewriteContext, WorkflowContext,
};

/// Message printed when the compression pass finishes
pub const COMPRESS_DONE: &str = "Conversion completed.";

/// Message printed when the rewrite pass finishes
pub const REWRITE_DONE: &str = "Reference update completed.";

/// Options for the compression pass
#[derive(Debug, Clone)]
pub struct CompressOptions {
    /// Directory to walk
    pub input_dir: PathBuf,
    /// Formats, extensions and tool location
    pub config: CompressorConfig,
    /// Whether to only plan the tool invocations
    pub dry_run: bool,
}

/// Options for the rewrite pass
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Directory to walk
    pub input_dir: PathBuf,
    /// Extensions to find and replace
    pub config: RewriteConfig,
    /// Whether to only report the files that would change
    pub dry_run: bool,
}

/// Compresses every input image under the input directory
///
/// For each image the format is selected from its filename. Images with a
/// compressed sibling are skipped; the rest are handed to `runner` one at a
/// time.
///
/// # Arguments
/// * `options` - Options for the pass
/// * `runner` - Runs the compression tool
///
/// # Returns
/// * `Result<CompressContext>` - The statistics of the pass
///
/// # Errors
/// * Returns an error if the input directory is invalid
/// * Returns the first tool failure; the remaining images are not processed
pub fn compress_textures(options: &CompressOptions, runner: &dyn ToolRunner) -> Result<CompressContext> {
    options.config.validate()?;

    let mut context = CompressContext::new(options.dry_run);
    let files = scan_directory(&options.input_dir, &options.config.input_extensions)?;
    context.stats.files_found = files.len();

    if files.is_empty() {
        info!("No textures found in {}", options.input_dir.display());
    }

    for file in files {
        let kind = classify_with_rules(&file.lowercase_name, &FORMAT_RULES);
        let format = options.config.formats.format_for(kind);

        if is_already_compressed(&file.path, &options.config.compressed_extension) {
            info!("{} already compressed", file.relative_path.display());
            context.stats.files_skipped += 1;
            continue;
        }

        if options.dry_run {
            info!(
                "Would process: {} with format {format}",
                file.relative_path.display()
            );
            context.add_planned_operation(PlannedOperation {
                source: file.path.clone(),
                destination: compressed_sibling(&file.path, &options.config.compressed_extension),
                operation_type: OperationType::Compress(format.to_string()),
            });
        } else {
            info!(
                "Processing: {} with format {format}",
                file.relative_path.display()
            );
            runner.run(&ToolInvocation::new(&options.config, &file.path, format))?;
        }
        context.stats.files_compressed += 1;
    }

    debug!("Compression statistics: {:?}", context.stats);
    print_plan(&context);
    info!(
        "{}",
        format_message(COMPRESS_DONE, &COMPRESS_DONE.green().to_string())
    );

    Ok(context)
}

/// Rewrites texture references in every scene file under the input directory
///
/// A file that fails to read or write is reported and the pass moves on to
/// the next file.
///
/// # Arguments
/// * `options` - Options for the pass
///
/// # Returns
/// * `Result<RewriteContext>` - The statistics of the pass
///
/// # Errors
/// * Returns an error if the input directory or the configuration is invalid
pub fn rewrite_references(options: &RewriteOptions) -> Result<RewriteContext> {
    options.config.validate()?;

    let mut context = RewriteContext::new(options.dry_run);
    let extensions = [options.config.scene_extension.clone()];
    let files = scan_directory(&options.input_dir, &extensions)?;
    context.stats.files_found = files.len();

    for file in files {
        let outcome = match rewrite_file(&file.path, &options.config, !options.dry_run) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    "Error processing {}: {:#}",
                    file.path.display(),
                    anyhow::Error::from(e)
                );
                context.stats.errors += 1;
                continue;
            }
        };

        if outcome.dropped_bytes > 0 {
            warn!(
                "Dropped {} invalid UTF-8 bytes from {}",
                outcome.dropped_bytes,
                file.path.display()
            );
        }
        context.stats.replacements += outcome.replacements;
        context.stats.dropped_bytes += outcome.dropped_bytes;

        if options.dry_run {
            if outcome.changed {
                info!(
                    "Would update references in {} ({} replacements)",
                    file.path.display(),
                    outcome.replacements
                );
                context.add_planned_operation(PlannedOperation {
                    source: file.path.clone(),
                    destination: file.path.clone(),
                    operation_type: OperationType::Rewrite(outcome.replacements),
                });
            }
        } else {
            info!("Updated references in {}", file.path.display());
            context.stats.files_updated += 1;
        }
    }

    debug!("Rewrite statistics: {:?}", context.stats);
    if context.stats.errors > 0 {
        warn!(
            "{} of {} scene files could not be updated",
            context.stats.errors, context.stats.files_found
        );
    }
    print_plan(&context);
    info!(
        "{}",
        format_message(REWRITE_DONE, &REWRITE_DONE.green().to_string())
    );

    Ok(context)
}

/// Displays the planned operations of a dry run
fn print_plan<S>(context: &WorkflowContext<S>) {
    if !context.dry_run || context.planned_operations.is_empty() {
        return;
    }

    println!("\nDetailed plan of operations:");
    println!("===========================");

    for op in &context.planned_operations {
        match &op.operation_type {
            OperationType::Compress(format) => {
                println!("Compress ({format}):");
                println!("  From: {}", op.source.display());
                println!("  To:   {}", op.destination.display());
            }
            OperationType::Rewrite(replacements) => {
                println!("Rewrite ({replacements} replacements):");
                println!("  File: {}", op.source.display());
            }
        }
    }

    println!("\nSummary:");
    println!("--------");
    println!(
        "  Total operations:     {}",
        context.planned_operations.len()
    );
    println!("\nRun without --dry flag to execute these operations.");
}
