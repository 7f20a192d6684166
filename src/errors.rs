use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the texture preparation tools
#[derive(Debug)]
pub enum Error {
    /// Invalid or missing input supplied by the operator
    Configuration { message: String },
    /// The input directory does not exist
    DirectoryNotFound { path: PathBuf },
    /// The input path exists but is not a directory
    NotADirectory { path: PathBuf },
    /// The external tool could not be started
    ToolLaunch { source: io::Error, program: PathBuf },
    /// The external tool ran and reported failure
    ExternalTool {
        program: PathBuf,
        input: PathBuf,
        code: Option<i32>,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
}

impl Error {
    /// Process exit status the binaries report for this error
    ///
    /// Operator mistakes exit with 1. A failing compression tool hands its
    /// own status through, falling back to 1 when it was killed by a signal.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ExternalTool {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => write!(f, "{message}"),
            Error::DirectoryNotFound { path } | Error::NotADirectory { path } => {
                write!(f, "Error: The directory '{}' does not exist.", path.display())
            }
            Error::ToolLaunch { program, .. } => {
                write!(f, "Failed to start {}", program.display())
            }
            Error::ExternalTool {
                program,
                input,
                code,
            } => match code {
                Some(code) => write!(
                    f,
                    "{} failed on {} with exit status {code}",
                    program.display(),
                    input.display()
                ),
                None => write!(
                    f,
                    "{} was terminated while processing {}",
                    program.display(),
                    input.display()
                ),
            },
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::ToolLaunch { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the texture preparation tools
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use texture_prep::prelude::{Result, directory_not_found_error};
///
/// fn example_function(path: PathBuf) -> Result<PathBuf> {
///     if path.is_dir() {
///         Ok(path)
///     } else {
///         Err(directory_not_found_error(path))
///     }
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a configuration error
pub fn configuration_error(message: &str) -> Error {
    Error::Configuration {
        message: message.to_string(),
    }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a not-a-directory error
pub fn not_a_directory_error(path: PathBuf) -> Error {
    Error::NotADirectory { path }
}

/// Helper function to create a tool launch error
pub fn tool_launch_error(err: io::Error, program: PathBuf) -> Error {
    Error::ToolLaunch {
        source: err,
        program,
    }
}

/// Helper function to create an external tool error
pub fn external_tool_error(program: PathBuf, input: PathBuf, code: Option<i32>) -> Error {
    Error::ExternalTool {
        program,
        input,
        code,
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_message() {
        let error = directory_not_found_error(PathBuf::from("/missing/textures"));

        assert_eq!(
            error.to_string(),
            "Error: The directory '/missing/textures' does not exist."
        );
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_not_a_directory_uses_same_message() {
        let error = not_a_directory_error(PathBuf::from("scene.gltf"));

        assert!(error.to_string().contains("'scene.gltf' does not exist"));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_external_tool_passes_status_through() {
        let error = external_tool_error(
            PathBuf::from("texconv.exe"),
            PathBuf::from("wall.png"),
            Some(3),
        );

        assert_eq!(error.exit_code(), 3);
        let error_string = error.to_string();
        assert!(error_string.contains("texconv.exe"));
        assert!(error_string.contains("wall.png"));
        assert!(error_string.contains('3'));
    }

    #[test]
    fn test_external_tool_without_status() {
        let error = external_tool_error(PathBuf::from("texconv"), PathBuf::from("a.jpg"), None);

        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("terminated"));
    }

    #[test]
    fn test_tool_launch_error_has_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let error = tool_launch_error(io_error, PathBuf::from("texconv"));

        assert!(error.source().is_some());
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "Failed to start texconv");
    }

    #[test]
    fn test_file_operation_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = file_operation_error(io_error, PathBuf::from("/test/scene.gltf"), "write");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("write"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/scene.gltf"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_configuration_error_is_the_usage_line() {
        let error = configuration_error("Usage: texcompress <input_directory>");

        assert_eq!(error.to_string(), "Usage: texcompress <input_directory>");
        assert_eq!(error.exit_code(), 1);
        assert!(error.source().is_none());
    }
}
