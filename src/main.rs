//! pipekick - trigger a remote pipeline endpoint from CI
//!
//! Sends a single authenticated POST request to the endpoint named by
//! `PIPELINE_URL`, reports the outcome on the console, and exits 0 or 1.
//!
//! ## Usage
//!
//! ```bash
//! PIPELINE_URL=https://pipelines.example.com/run \
//! BEARER_TOKEN=$PIPELINE_TOKEN \
//! pipekick
//! ```
//!
//! See the crate documentation for the full list of environment variables.

use std::process::ExitCode;

use anyhow::Result;

use pipekick::cli;
use pipekick::infrastructure::logging;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging("warn");

    match run().await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Unexpected error: {e}");
            if std::env::var("PIPEKICK_VERBOSE").is_ok() {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u8> {
    cli::run().await
}
