// pkgtrans - package list translator
// Main CLI entry point

use clap::Parser;
use std::process;
use pkgtrans::cli::Cli;
use pkgtrans::utils::config::Config;
use pkgtrans::utils::error::UserError;
use pkgtrans::utils::logging::{self, LogSettings};

fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => exit_with(&UserError::from_pkgtrans_error(&err)),
    };

    logging::init(LogSettings {
        verbose: cli.verbose || config.verbose,
        color: !cli.no_color,
        json: cli.json,
    });

    if let Err(err) = cli.into_command().run(&config) {
        exit_with(&UserError::from_pkgtrans_error(&err));
    }
}

fn exit_with(user_error: &UserError) -> ! {
    user_error.print();
    process::exit(user_error.exit_code);
}
