//! Human-readable console reporting
//!
//! Rendering is separated from printing so the exact lines can be asserted
//! in tests. The bearer token never appears in any rendered output, only
//! whether one is present.

use chrono::Utc;

use crate::trigger::config::{TriggerConfig, TriggerMode};
use crate::trigger::outcome::{Outcome, status_hint};

const RULE: &str = "--------------------------------------------------";

/// Renders the resolved invocation before anything is sent.
pub fn render_preamble(config: &TriggerConfig) -> String {
    let mut out = String::new();
    out.push_str("Triggering remote pipeline\n");
    out.push_str(&format!(
        "  time:     {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("  endpoint: {}\n", config.endpoint_url));
    out.push_str(&format!(
        "  trigger:  {}\n",
        config.metadata.trigger_source
    ));
    out.push_str(&format!("  message:  {}\n", config.custom_message));
    out.push_str(&format!(
        "  token:    {}\n",
        if config.bearer_token.is_empty() {
            "absent"
        } else {
            "present"
        }
    ));
    out.push_str(&format!(
        "  mode:     {}\n",
        match config.mode {
            TriggerMode::Synchronous => "sync",
            TriggerMode::Asynchronous => "async",
        }
    ));
    out.push_str(RULE);
    out
}

/// Renders the outcome of the request, including the telemetry lines on
/// success.
pub fn render_outcome(outcome: &Outcome, config: &TriggerConfig) -> String {
    match outcome {
        Outcome::Success {
            status,
            body,
            elapsed,
        } => {
            let mut out = String::new();
            if outcome.is_accepted() {
                out.push_str("Pipeline accepted for asynchronous execution\n");
            } else {
                out.push_str("Pipeline request successful\n");
            }
            out.push_str(&format!("  status:   {status}\n"));
            let rendered = serde_json::to_string_pretty(body)
                .unwrap_or_else(|_| body.to_string());
            out.push_str("  response:\n");
            for line in rendered.lines() {
                out.push_str(&format!("    {line}\n"));
            }
            out.push_str(RULE);
            out.push('\n');
            out.push_str(&format!("  duration:   {:.2}s\n", elapsed.as_secs_f64()));
            out.push_str(&format!("  repository: {}\n", config.metadata.repository));
            out.push_str(&format!("  run id:     {}", config.metadata.run_id));
            if config.metadata.trigger_source == "schedule" {
                out.push_str(&format!(
                    "\nScheduled pipeline triggered at {}",
                    Utc::now().format("%H:%M UTC")
                ));
            }
            out
        }
        Outcome::HttpError { status, body } => {
            let mut out = format!("Pipeline request failed\n  status:   {status}\n");
            if !body.is_empty() {
                out.push_str(&format!("  response: {body}\n"));
            }
            if let Some(hint) = status_hint(*status) {
                out.push_str(&format!("  hint:     {hint}"));
            } else {
                out.pop();
            }
            out
        }
        Outcome::TimedOut { limit } => {
            let mut out = format!(
                "Request timed out after {} seconds with no response",
                limit.as_secs()
            );
            if config.mode.tolerates_timeout() {
                out.push_str(
                    "\nThe pipeline may still be running; \
                     async mode does not treat this as a failure",
                );
            } else {
                out.push_str("\nThe pipeline endpoint did not answer in time");
            }
            out
        }
        Outcome::Transport { cause } => {
            format!("Request failed before a response arrived\n  cause: {cause}")
        }
    }
}
