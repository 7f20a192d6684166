use std::path::PathBuf;

use atty::Stream;
use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_version};
use log::{Level, error, log_enabled};

use crate::config::default_tool_path;
use crate::constants::{
    DRY_RUN_HELP, INPUT_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, PAUSE_HELP, TEXCONV_HELP,
    VERBOSE_HELP,
};
use crate::errors::{Error, Result, configuration_error};
use crate::logging::LogLevel;

/// Name of the compression binary
pub const COMPRESS_BIN: &str = "texcompress";

/// Name of the reference rewriting binary
pub const REWRITE_BIN: &str = "usedds";

/// Waits for user input if stdout is a terminal and `--pause` was given
///
/// This keeps the console window open when the tool is started from a file
/// manager.
pub fn check_for_stdout_stream(matches: &ArgMatches) {
    if matches.get_flag("pause") && atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Arguments shared by both binaries
///
/// Defines the following arguments:
/// - `input`: The directory to walk
/// - `dry`: Run without invoking the tool or writing files
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also log to a file
/// - `pause`: Wait for Enter before exiting
fn base_command(name: &'static str, about: &'static str) -> Command {
    let arg_input = Arg::new("input")
        .value_name("INPUT_DIRECTORY")
        .help(INPUT_HELP)
        .value_parser(clap::value_parser!(PathBuf));

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("PATH")
        .help(LOG_FILE_HELP);

    let arg_pause = Arg::new("pause")
        .short('p')
        .long("pause")
        .help(PAUSE_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .name(name)
        .author(crate_authors!())
        .about(about)
        .version(crate_version!())
        .arg(arg_input)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(log_file)
        .arg(arg_pause)
}

/// Command-line definition of the compression binary
pub fn compress_command() -> Command {
    let arg_texconv = Arg::new("texconv")
        .short('t')
        .long("texconv")
        .value_name("PATH")
        .help(TEXCONV_HELP)
        .value_parser(clap::value_parser!(PathBuf));

    base_command(
        COMPRESS_BIN,
        "Compresses .png and .jpg textures to .dds with texconv",
    )
    .arg(arg_texconv)
}

/// Command-line definition of the reference rewriting binary
pub fn rewrite_command() -> Command {
    base_command(
        REWRITE_BIN,
        "Points .gltf texture references at the compressed .dds files",
    )
}

/// Gets the input directory from the command-line arguments
///
/// # Errors
/// Returns a configuration error carrying the usage line when the argument
/// is missing
pub fn get_input_directory(matches: &ArgMatches, bin_name: &str) -> Result<PathBuf> {
    matches
        .get_one::<PathBuf>("input")
        .cloned()
        .ok_or_else(|| configuration_error(&format!("Usage: {bin_name} <input_directory>")))
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path; empty when file logging is off
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}

/// Whether `--dry` was given
pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

/// Gets the compression tool path, falling back to the bundled location
pub fn get_tool_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("texconv")
        .cloned()
        .unwrap_or_else(default_tool_path)
}

/// Process exit status for a failed run
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error.downcast_ref::<Error>().map_or(1, Error::exit_code)
}

/// Reports a failed run to the operator
///
/// Goes through the logger when one is installed and straight to stdout
/// otherwise.
pub fn report_error(error: &anyhow::Error) {
    if log_enabled!(Level::Error) {
        error!("{error:#}");
    } else {
        println!("{error:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{directory_not_found_error, external_tool_error};

    #[test]
    fn test_compress_command_parses_all_flags() {
        let matches = compress_command()
            .try_get_matches_from([
                "texcompress",
                "textures",
                "-n",
                "-vv",
                "-l",
                "run.log",
                "-t",
                "/opt/texconv.exe",
            ])
            .unwrap();

        assert_eq!(
            get_input_directory(&matches, COMPRESS_BIN).unwrap(),
            PathBuf::from("textures")
        );
        assert!(is_dry_run(&matches));
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);
        assert_eq!(get_log_file(&matches), "run.log");
        assert_eq!(get_tool_path(&matches), PathBuf::from("/opt/texconv.exe"));
    }

    #[test]
    fn test_defaults() {
        let matches = rewrite_command()
            .try_get_matches_from(["usedds", "scenes"])
            .unwrap();

        assert!(!is_dry_run(&matches));
        assert_eq!(get_verbosity(&matches), LogLevel::Info);
        assert_eq!(get_log_file(&matches), "");
        assert!(!matches.get_flag("pause"));
    }

    #[test]
    fn test_missing_input_is_a_configuration_error() {
        let matches = compress_command()
            .try_get_matches_from(["texcompress"])
            .unwrap();

        let error = get_input_directory(&matches, COMPRESS_BIN).unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
        assert_eq!(error.to_string(), "Usage: texcompress <input_directory>");
    }

    #[test]
    fn test_rewrite_command_has_no_texconv_flag() {
        let result = rewrite_command().try_get_matches_from(["usedds", "scenes", "-t", "x"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_exit_code() {
        let error = anyhow::Error::from(external_tool_error(
            PathBuf::from("texconv"),
            PathBuf::from("a.png"),
            Some(7),
        ));
        assert_eq!(exit_code(&error), 7);

        let error = anyhow::Error::from(directory_not_found_error(PathBuf::from("missing")));
        assert_eq!(exit_code(&error), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("other failure")), 1);
    }
}
