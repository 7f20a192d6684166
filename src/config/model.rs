//! Configuration data structures
//!
//! This module contains the configuration carried into each component.
//! Every value has a compiled-in default from `constants`.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::constants::{
    AO_FORMAT, COMPRESSED_EXTENSION, DEFAULT_FORMAT, HDR_FORMAT, INPUT_EXTENSIONS, MIP_LEVELS,
    NORMAL_FORMAT, REFERENCE_EXTENSIONS, REFERENCE_TARGET, SCENE_EXTENSION, TEXCONV_FALLBACK,
    TEXCONV_RELATIVE_PATH,
};

/// Category a texture falls into after format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// Colour and everything without a more specific rule
    Default,
    /// Normal maps
    Normal,
    /// High dynamic range images
    Hdr,
    /// Ambient occlusion maps
    AmbientOcclusion,
}

/// Format strings handed to the compression tool, one per texture kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSet {
    pub default: String,
    pub normal: String,
    pub hdr: String,
    pub ambient_occlusion: String,
}

impl FormatSet {
    /// Returns the format string configured for `kind`
    pub fn format_for(&self, kind: TextureKind) -> &str {
        match kind {
            TextureKind::Default => &self.default,
            TextureKind::Normal => &self.normal,
            TextureKind::Hdr => &self.hdr,
            TextureKind::AmbientOcclusion => &self.ambient_occlusion,
        }
    }
}

impl Default for FormatSet {
    fn default() -> Self {
        FormatSet {
            default: DEFAULT_FORMAT.to_string(),
            normal: NORMAL_FORMAT.to_string(),
            hdr: HDR_FORMAT.to_string(),
            ambient_occlusion: AO_FORMAT.to_string(),
        }
    }
}

/// Configuration for the compression pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressorConfig {
    /// Path to the compression tool
    pub tool_path: PathBuf,
    /// Formats chosen by the selection rules
    pub formats: FormatSet,
    /// Value passed to the tool's mip level flag
    pub mip_levels: String,
    /// Lowercase filename suffixes that mark a file as an input image
    pub input_extensions: Vec<String>,
    /// Extension of the files the tool writes, without the dot
    pub compressed_extension: String,
}

impl CompressorConfig {
    /// Creates the default configuration with a specific tool path
    pub fn with_tool_path(tool_path: impl Into<PathBuf>) -> Self {
        CompressorConfig {
            tool_path: tool_path.into(),
            ..CompressorConfig::default()
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error naming the first empty value
    pub fn validate(&self) -> Result<()> {
        if self.tool_path.as_os_str().is_empty() {
            return Err(anyhow!("No compression tool path specified."));
        }

        let formats = [
            ("default", &self.formats.default),
            ("normal", &self.formats.normal),
            ("hdr", &self.formats.hdr),
            ("ambient occlusion", &self.formats.ambient_occlusion),
        ];
        for (name, format) in formats {
            if format.trim().is_empty() {
                return Err(anyhow!("The {name} format is empty."));
            }
        }

        if self.mip_levels.trim().is_empty() {
            return Err(anyhow!("The mip level value is empty."));
        }

        if self.input_extensions.is_empty() {
            return Err(anyhow!(
                "No input extensions specified. At least one extension is required."
            ));
        }

        if self.compressed_extension.trim().is_empty() {
            return Err(anyhow!("The compressed extension is empty."));
        }

        Ok(())
    }
}

impl Default for CompressorConfig {
    fn default() -> Self {
        CompressorConfig {
            tool_path: default_tool_path(),
            formats: FormatSet::default(),
            mip_levels: MIP_LEVELS.to_string(),
            input_extensions: INPUT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            compressed_extension: COMPRESSED_EXTENSION.to_string(),
        }
    }
}

/// Configuration for the reference rewriting pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Lowercase filename suffix of scene-description files
    pub scene_extension: String,
    /// Literals replaced in scene files, applied in order
    pub source_extensions: Vec<String>,
    /// Literal written in place of each source extension
    pub target_extension: String,
}

impl RewriteConfig {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error if any literal is empty
    pub fn validate(&self) -> Result<()> {
        if self.scene_extension.is_empty() {
            return Err(anyhow!("No scene extension specified."));
        }

        if self.source_extensions.is_empty() {
            return Err(anyhow!(
                "No source extensions specified. At least one extension is required."
            ));
        }

        if let Some(index) = self.source_extensions.iter().position(String::is_empty) {
            return Err(anyhow!("Source extension at index {index} is empty."));
        }

        if self.target_extension.is_empty() {
            return Err(anyhow!("No target extension specified."));
        }

        Ok(())
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        RewriteConfig {
            scene_extension: SCENE_EXTENSION.to_string(),
            source_extensions: REFERENCE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            target_extension: REFERENCE_TARGET.to_string(),
        }
    }
}

/// Resolves the tool shipped next to the executable
///
/// Falls back to looking the tool up on `PATH` when the executable's own
/// location is unavailable.
pub fn default_tool_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join(TEXCONV_RELATIVE_PATH))
        .unwrap_or_else(|| PathBuf::from(TEXCONV_FALLBACK))
}
