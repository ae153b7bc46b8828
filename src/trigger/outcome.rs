//! Classification of the single request's result
//!
//! The outcome is created the moment the HTTP call returns or fails,
//! consumed by the reporting step, and never retained.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use crate::trigger::config::TriggerMode;

/// Result of the one outbound request.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The endpoint answered with a success status.
    Success {
        /// HTTP status code.
        status: u16,
        /// Response body, parsed as JSON when possible and carried as a
        /// JSON string otherwise.
        body: Value,
        /// Wall time the request took.
        elapsed: Duration,
    },
    /// The endpoint answered with a non-success status.
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Raw response text.
        body: String,
    },
    /// No response arrived within the configured bound.
    TimedOut {
        /// The timeout that elapsed.
        limit: Duration,
    },
    /// The request never produced a response (DNS, refused connection,
    /// reset, ...).
    Transport {
        /// Human-readable cause.
        cause: String,
    },
}

impl Outcome {
    /// Classifies a received response by status.
    ///
    /// The body is parsed as JSON on a best-effort basis; unparseable
    /// bodies are kept as raw text.
    pub fn from_response(status: StatusCode, text: String, elapsed: Duration) -> Self {
        if status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            Self::Success {
                status: status.as_u16(),
                body,
                elapsed,
            }
        } else {
            Self::HttpError {
                status: status.as_u16(),
                body: text,
            }
        }
    }

    /// Classifies a request that failed without a response.
    pub fn from_send_error(err: &reqwest::Error, limit: Duration) -> Self {
        if err.is_timeout() {
            Self::TimedOut { limit }
        } else {
            Self::Transport {
                cause: err.to_string(),
            }
        }
    }

    /// Whether this outcome counts as a successful invocation under the
    /// given mode. A timeout is tolerated in asynchronous mode since the
    /// remote pipeline may keep running after the client stops waiting.
    pub fn is_success(&self, mode: TriggerMode) -> bool {
        match self {
            Self::Success { .. } => true,
            Self::TimedOut { .. } => mode.tolerates_timeout(),
            Self::HttpError { .. } | Self::Transport { .. } => false,
        }
    }

    /// Process exit code for this outcome under the given mode.
    pub fn exit_code(&self, mode: TriggerMode) -> u8 {
        u8::from(!self.is_success(mode))
    }

    /// Whether the status signals asynchronous acceptance rather than a
    /// completed run.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Self::Success {
                status,
                ..
            } if *status == StatusCode::ACCEPTED.as_u16()
        )
    }
}

/// A short diagnosis for well-known error statuses.
pub fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("authentication failed - check your bearer token"),
        403 => Some("access forbidden - check your permissions"),
        404 => Some("endpoint not found - check the URL"),
        500.. => Some("server error - the pipeline service might be down"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const ELAPSED: Duration = Duration::from_millis(250);

    #[test]
    fn test_success_parses_json_body() {
        let outcome = Outcome::from_response(
            StatusCode::OK,
            r#"{"run":"r-42","state":"started"}"#.to_string(),
            ELAPSED,
        );
        match outcome {
            Outcome::Success { status, body, .. } => {
                assert_eq!(status, 200);
                assert_eq!(body, json!({"run": "r-42", "state": "started"}));
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_success_keeps_raw_text_when_not_json() {
        let outcome = Outcome::from_response(StatusCode::OK, "started".to_string(), ELAPSED);
        match outcome {
            Outcome::Success { body, .. } => assert_eq!(body, Value::String("started".into())),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_non_success_status_is_http_error() {
        let outcome =
            Outcome::from_response(StatusCode::UNAUTHORIZED, "denied".to_string(), ELAPSED);
        match outcome {
            Outcome::HttpError { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "denied");
            }
            other => panic!("expected HttpError, got {other:?}"),
        }
    }

    #[test]
    fn test_accepted_status_flagged() {
        let outcome = Outcome::from_response(StatusCode::ACCEPTED, String::new(), ELAPSED);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.exit_code(TriggerMode::Asynchronous), 0);
    }

    #[test]
    fn test_timeout_fatal_in_sync_mode() {
        let outcome = Outcome::TimedOut {
            limit: Duration::from_secs(120),
        };
        assert_eq!(outcome.exit_code(TriggerMode::Synchronous), 1);
        assert_eq!(outcome.exit_code(TriggerMode::Asynchronous), 0);
    }

    #[test]
    fn test_http_error_fatal_in_both_modes() {
        let outcome = Outcome::HttpError {
            status: 500,
            body: String::new(),
        };
        assert_eq!(outcome.exit_code(TriggerMode::Synchronous), 1);
        assert_eq!(outcome.exit_code(TriggerMode::Asynchronous), 1);
    }

    #[test]
    fn test_transport_failure_fatal() {
        let outcome = Outcome::Transport {
            cause: "connection refused".to_string(),
        };
        assert_eq!(outcome.exit_code(TriggerMode::Asynchronous), 1);
    }

    #[test]
    fn test_status_hints() {
        assert_eq!(
            status_hint(401),
            Some("authentication failed - check your bearer token")
        );
        assert_eq!(
            status_hint(404),
            Some("endpoint not found - check the URL")
        );
        assert!(status_hint(503).unwrap().contains("server error"));
        assert_eq!(status_hint(418), None);
    }
}
