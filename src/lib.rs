//! # Pipekick - trigger a remote pipeline from CI
//!
//! Pipekick sends exactly one authenticated HTTP POST to a pipeline-trigger
//! endpoint, logs the outcome, and exits with a code CI can branch on. It
//! is meant to be invoked from a scheduled or event-triggered job; it does
//! not implement the pipeline itself.
//!
//! ## Quick Start
//!
//! ```bash
//! export PIPELINE_URL=https://pipelines.example.com/run
//! export BEARER_TOKEN=...
//! pipekick
//! ```
//!
//! ## Behavior
//!
//! - Required configuration is validated before any network attempt.
//! - The request carries `Authorization: Bearer <token>` and a JSON body
//!   with the message, trigger source, and timestamp.
//! - One attempt, no retries. Exit code 0 on a 2xx response (or a
//!   tolerated timeout in async mode), 1 otherwise.
//! - `TRIGGER_MODE=async` selects a short timeout and treats an elapsed
//!   timeout as non-fatal, for endpoints that only schedule the pipeline.
//!
//! ## Observability
//!
//! Status lines go to stdout/stderr; set `RUST_LOG=pipekick=debug` for
//! request-level detail via `tracing`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod cli;
pub mod infrastructure;
pub mod trigger;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use trigger::{
    Outcome, TriggerConfig, TriggerError, TriggerMetadata, TriggerMode, TriggerPayload,
    send_trigger, status_hint,
};
