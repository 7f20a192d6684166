use std::process::exit;

use anyhow::Result;
use clap::ArgMatches;
use human_panic::setup_panic;

use texture_prep::prelude::*;

fn run(matches: &ArgMatches) -> Result<()> {
    let options = RewriteOptions {
        input_dir: get_input_directory(matches, REWRITE_BIN)?,
        config: RewriteConfig::default(),
        dry_run: is_dry_run(matches),
    };

    rewrite_references(&options)?;
    Ok(())
}

fn main() {
    setup_panic!();

    let matches = rewrite_command().get_matches();
    let verbosity = get_verbosity(&matches);
    if let Err(e) = init_logger(verbosity, &get_log_file(&matches)) {
        eprintln!("Failed to initialise logging: {e}");
        if let Err(e) = init_console_logger(verbosity) {
            eprintln!("Failed to initialise console logging: {e}");
        }
    }

    let code = match run(&matches) {
        Ok(()) => 0,
        Err(e) => {
            report_error(&e);
            exit_code(&e)
        }
    };

    check_for_stdout_stream(&matches);
    exit(code);
}
