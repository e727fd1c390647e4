//! Rootbrowse CLI Binary
//!
//! Command-line interface for browsing and editing one directory tree.

use clap::Parser;
use rootbrowse::config::ConfigLoader;
use rootbrowse::logging::init_logging;
use rootbrowse::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    cli.apply_logging_overrides(&mut config);

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::from_config(cli.root.clone(), &config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing root: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
