//! CLI surface for pipekick
//!
//! The binary takes no flags beyond `--help`/`--version`; all behavioral
//! knobs are environment variables so a CI job can configure it entirely
//! through its secrets and variables:
//!
//! - `PIPELINE_URL` (required) - trigger endpoint
//! - `BEARER_TOKEN` (required) - authentication credential
//! - `CUSTOM_MESSAGE` - message forwarded in the request body
//! - `TRIGGER_MODE` - `sync` (default) or `async`
//! - `PIPELINE_TIMEOUT_SECS` - request timeout override

use anyhow::Result;
use clap::Parser;

use crate::trigger::{self, TriggerConfig};

/// CLI arguments for pipekick
#[derive(Parser, Debug)]
#[command(name = "pipekick")]
#[command(author, version, about, long_about = None)]
struct Args {}

/// Parse arguments, resolve the environment, and run one invocation.
///
/// Returns the process exit code: 0 for success (including a tolerated
/// timeout in async mode), 1 for anything else.
pub async fn run() -> Result<u8> {
    let _args = Args::parse();

    let config = match TriggerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return Ok(1);
        }
    };

    let code = trigger::invoke(&config).await?;
    Ok(code)
}
