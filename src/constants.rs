/// Constants used throughout the application
///
/// This module centralises the compiled-in defaults so that the
/// configuration structures have a single source for them.

/// Format used for textures that match no other rule
pub const DEFAULT_FORMAT: &str = "BC7_UNORM";

/// Format used for normal maps (and, currently, metal/rough maps)
pub const NORMAL_FORMAT: &str = "BC7_UNORM";

/// Format used for HDR textures
pub const HDR_FORMAT: &str = "BC6H_UF16";

/// Format used for ambient occlusion maps
pub const AO_FORMAT: &str = "BC4_UNORM";

/// Mip level count passed to the compression tool. Zero asks for a full chain.
pub const MIP_LEVELS: &str = "0";

/// Image extensions picked up by the compressor, lowercase with the dot
pub const INPUT_EXTENSIONS: [&str; 2] = [".png", ".jpg"];

/// Extension written by the compression tool, without the dot
pub const COMPRESSED_EXTENSION: &str = "dds";

/// Scene-description extension picked up by the reference rewriter
pub const SCENE_EXTENSION: &str = ".gltf";

/// Texture reference literals replaced by the rewriter, in replacement order
pub const REFERENCE_EXTENSIONS: [&str; 2] = [".jpg", ".png"];

/// Literal written in place of each texture reference extension
pub const REFERENCE_TARGET: &str = ".dds";

/// Location of the compression tool relative to the executable's directory
pub const TEXCONV_RELATIVE_PATH: &str = "../TexConv/texconv.exe";

/// Fallback tool name when the executable's location cannot be resolved
pub const TEXCONV_FALLBACK: &str = "texconv";

/// Help text for the input directory argument
pub const INPUT_HELP: &str = "Directory to walk recursively";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without invoking the tool or writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log lines to this file";

/// Help text for the pause command-line option
pub const PAUSE_HELP: &str = "Wait for Enter before exiting when run in a terminal";

/// Help text for the texconv command-line option
pub const TEXCONV_HELP: &str = "Path to the texconv executable";

/// Log file used when none is given (empty disables the file sink)
pub const LOG_FILE_DEFAULT: &str = "";
