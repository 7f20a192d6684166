//! Texture reference rewriting
//!
//! Scene files are decoded as UTF-8 with malformed byte sequences dropped,
//! every configured image extension literal is replaced, and the result is
//! written back over the original file.
//!
//! The decode is lossy: bytes that are not valid UTF-8 disappear from the
//! rewritten file. The number of dropped bytes is reported in
//! [`RewriteOutcome::dropped_bytes`].

use std::fs;
use std::path::Path;

use encoding_rs::{DecoderResult, UTF_8};

use crate::config::RewriteConfig;
use crate::errors::{Result, file_operation_error};

/// Result of rewriting one scene file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewriteOutcome {
    /// Number of literals replaced
    pub replacements: usize,
    /// Number of malformed bytes dropped while decoding
    pub dropped_bytes: usize,
    /// Whether the output differs from the bytes on disk
    pub changed: bool,
}

/// Decodes UTF-8, dropping malformed byte sequences
///
/// A leading byte-order mark is kept as text. Returns the text and the number
/// of bytes dropped.
pub fn decode_lossy(bytes: &[u8]) -> (String, usize) {
    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len());
    let mut text = String::with_capacity(capacity);
    let mut dropped = 0;
    let mut remaining = bytes;

    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(remaining, &mut text, true);
        remaining = &remaining[read..];
        match result {
            DecoderResult::InputEmpty => break,
            // The UTF-8 decoder always reports 0 for the second field
            DecoderResult::Malformed(bad, _) => dropped += usize::from(bad),
            DecoderResult::OutputFull => {
                let additional = decoder
                    .max_utf8_buffer_length_without_replacement(remaining.len())
                    .unwrap_or(remaining.len());
                text.reserve(additional.max(4));
            }
        }
    }

    (text, dropped)
}

/// Replaces each source literal with `target`, in order
///
/// Returns the new text and the total number of replacements.
pub fn replace_references(text: &str, sources: &[String], target: &str) -> (String, usize) {
    let mut updated = text.to_string();
    let mut replacements = 0;

    for source in sources {
        let count = updated.matches(source.as_str()).count();
        if count > 0 {
            updated = updated.replace(source.as_str(), target);
            replacements += count;
        }
    }

    (updated, replacements)
}

/// Rewrites the texture references in a single scene file
///
/// The file is read whole and overwritten in place. With `write` set to
/// false the outcome is computed but nothing touches the disk.
///
/// # Errors
/// Returns an error if the file cannot be read or written
pub fn rewrite_file(path: &Path, config: &RewriteConfig, write: bool) -> Result<RewriteOutcome> {
    let original = fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

    let (text, dropped_bytes) = decode_lossy(&original);
    let (updated, replacements) =
        replace_references(&text, &config.source_extensions, &config.target_extension);
    let changed = updated.as_bytes() != original.as_slice();

    if write {
        fs::write(path, updated.as_bytes())
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;
    }

    Ok(RewriteOutcome {
        replacements,
        dropped_bytes,
        changed,
    })
}
