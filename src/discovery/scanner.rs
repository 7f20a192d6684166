//! Directory scanning functionality
//!
//! This module contains functions for walking a directory tree and finding
//! files by filename suffix.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::errors::{directory_not_found_error, not_a_directory_error};

/// Information about a file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The path to the file, rooted at the scanned directory
    pub path: PathBuf,
    /// The path relative to the scanned directory
    pub relative_path: PathBuf,
    /// The filename of the file
    pub filename: String,
    /// The filename in lowercase, used for every pattern test
    pub lowercase_name: String,
}

impl FileInfo {
    /// Creates a new FileInfo for `path` found under `root`
    ///
    /// Non-Unicode filenames are converted lossily; they still take part in
    /// suffix and substring tests.
    pub fn new(path: PathBuf, root: &Path) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let lowercase_name = filename.to_lowercase();
        let relative_path = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());

        FileInfo {
            path,
            relative_path,
            filename,
            lowercase_name,
        }
    }

    /// Whether the lowercased filename ends with any of `extensions`
    pub fn has_extension(&self, extensions: &[String]) -> bool {
        extensions
            .iter()
            .any(|ext| self.lowercase_name.ends_with(ext.as_str()))
    }
}

/// Checks that `directory` exists and is a directory
///
/// # Errors
/// Returns a configuration error when the path is missing or is not a directory
pub fn ensure_input_directory(directory: &Path) -> crate::errors::Result<()> {
    if !directory.exists() {
        return Err(directory_not_found_error(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(not_a_directory_error(directory.to_path_buf()));
    }
    Ok(())
}

/// Recursively scans a directory for files with one of the given suffixes
///
/// Symlinked directories are not descended into, but symlinks pointing at
/// files are returned like regular files. Entries come back in file-name
/// order; entries that cannot be read are logged and skipped.
///
/// # Arguments
/// * `directory` - The directory to scan
/// * `extensions` - Lowercase filename suffixes, dot included
///
/// # Returns
/// * `Result<Vec<FileInfo>>` - The matching files or an error
///
/// # Errors
/// Returns an error if `directory` is missing or not a directory
pub fn scan_directory(directory: &Path, extensions: &[String]) -> Result<Vec<FileInfo>> {
    debug!("Scanning directory: {}", directory.display());
    ensure_input_directory(directory)?;

    let files: Vec<FileInfo> = WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .map(|entry| FileInfo::new(entry.into_path(), directory))
        .filter(|file| file.has_extension(extensions))
        .collect();

    debug!("Found {} matching files in directory", files.len());

    Ok(files)
}
