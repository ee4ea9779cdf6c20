// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::process::ExitCode;

use clap::Parser;
use music_selection::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Also forwards records of the `log` facade.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    match cli::run(&cli) {
        Ok(outcome) => {
            let message = outcome.to_string();
            if !message.is_empty() {
                println!("{message}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
