//! Format selection
//!
//! This module contains the ordered rule list that decides which format a
//! texture is compressed with. Rules are tested against the lowercased
//! filename and the first match wins.

use log::trace;

use crate::config::TextureKind;

/// A filename rule mapping substrings to a texture kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    /// Short name used in trace output
    pub name: &'static str,
    /// Substrings that must all appear in the lowercased filename
    pub required: &'static [&'static str],
    /// Kind assigned when the rule matches
    pub kind: TextureKind,
}

impl FormatRule {
    /// Whether every required substring occurs in `lowercase_name`
    pub fn matches(&self, lowercase_name: &str) -> bool {
        self.required
            .iter()
            .all(|needle| lowercase_name.contains(needle))
    }
}

/// Selection rules in priority order
///
/// Metal/rough maps share the normal map format. This mirrors the formats
/// the pipeline has always produced; it is not a separate metal/rough format.
pub const FORMAT_RULES: [FormatRule; 4] = [
    FormatRule {
        name: "normal",
        required: &["normal"],
        kind: TextureKind::Normal,
    },
    FormatRule {
        name: "metal-rough",
        required: &["metal", "rough"],
        kind: TextureKind::Normal,
    },
    FormatRule {
        name: "hdr",
        required: &["hdr"],
        kind: TextureKind::Hdr,
    },
    FormatRule {
        name: "ao",
        required: &["ao"],
        kind: TextureKind::AmbientOcclusion,
    },
];

/// Classifies an already lowercased filename against `rules`
pub fn classify_with_rules(lowercase_name: &str, rules: &[FormatRule]) -> TextureKind {
    match rules.iter().find(|rule| rule.matches(lowercase_name)) {
        Some(rule) => {
            trace!("{lowercase_name} matched rule '{}'", rule.name);
            rule.kind
        }
        None => TextureKind::Default,
    }
}
