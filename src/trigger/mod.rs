//! The trigger domain: configuration, the single request, outcome
//! classification, and reporting
//!
//! One linear control path: gather config, validate, build the request,
//! send it once, classify the result, report, exit.

pub mod config;
pub mod errors;
pub mod outcome;
pub mod report;
pub mod request;

pub use config::{TriggerConfig, TriggerMetadata, TriggerMode};
pub use errors::TriggerError;
pub use outcome::{Outcome, status_hint};
pub use request::{TriggerPayload, send_trigger};

/// Runs one complete invocation against the given configuration and
/// returns the process exit code.
///
/// Prints the resolved invocation, sends the request once, and prints the
/// classified outcome. Failed outcomes go to stderr.
pub async fn invoke(config: &TriggerConfig) -> Result<u8, TriggerError> {
    println!("{}", report::render_preamble(config));

    let outcome = send_trigger(config).await?;
    let code = outcome.exit_code(config.mode);

    let rendered = report::render_outcome(&outcome, config);
    if code == 0 {
        println!("{rendered}");
    } else {
        eprintln!("{rendered}");
    }

    tracing::debug!(exit_code = code, "invocation finished");
    Ok(code)
}
