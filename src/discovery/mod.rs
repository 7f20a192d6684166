//! File discovery module
//!
//! This module contains components for walking directories and classifying
//! the files found.

mod matcher;
mod scanner;

pub use matcher::{FORMAT_RULES, FormatRule, classify_with_rules};
pub use scanner::{FileInfo, ensure_input_directory, scan_directory};
