//! The single outbound trigger request
//!
//! Builds a `reqwest` client bounded by the configured timeout, sends one
//! POST with bearer authentication and a JSON payload, and classifies the
//! result. No retries.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::trigger::config::TriggerConfig;
use crate::trigger::errors::TriggerError;
use crate::trigger::outcome::Outcome;

const USER_AGENT: &str = concat!("pipekick/", env!("CARGO_PKG_VERSION"));

/// JSON body attached to the trigger request.
#[derive(Debug, Serialize)]
pub struct TriggerPayload {
    /// Free-form message from `CUSTOM_MESSAGE`.
    pub message: String,
    /// What initiated the invocation.
    pub trigger_source: String,
    /// When the request was issued, RFC 3339 UTC.
    pub timestamp: DateTime<Utc>,
}

impl TriggerPayload {
    /// Builds the payload for this invocation, stamped with the current time.
    pub fn for_config(config: &TriggerConfig) -> Self {
        Self {
            message: config.custom_message.clone(),
            trigger_source: config.metadata.trigger_source.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Issues the trigger request exactly once and classifies the result.
///
/// Timeouts and transport-level failures are part of the returned
/// [`Outcome`]; an `Err` here means the request could not even be
/// constructed.
pub async fn send_trigger(config: &TriggerConfig) -> Result<Outcome, TriggerError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| TriggerError::Unexpected(e.to_string()))?;

    let payload = TriggerPayload::for_config(config);

    tracing::debug!(
        endpoint = %config.endpoint_url,
        timeout_secs = config.timeout.as_secs(),
        "sending trigger request"
    );

    let started = Instant::now();
    let response = client
        .post(&config.endpoint_url)
        .bearer_auth(&config.bearer_token)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(&payload)
        .send()
        .await;

    let outcome = match response {
        Ok(response) => {
            let status = response.status();
            // Reading the body can itself hit the timeout.
            match response.text().await {
                Ok(text) => Outcome::from_response(status, text, started.elapsed()),
                Err(e) => Outcome::from_send_error(&e, config.timeout),
            }
        }
        Err(e) => Outcome::from_send_error(&e, config.timeout),
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::config::{TriggerMetadata, TriggerMode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(endpoint: &str) -> TriggerConfig {
        TriggerConfig {
            endpoint_url: endpoint.to_string(),
            bearer_token: "tok-test".to_string(),
            custom_message: "Scheduled pipeline run".to_string(),
            mode: TriggerMode::Synchronous,
            timeout: Duration::from_secs(5),
            metadata: TriggerMetadata {
                trigger_source: "schedule".to_string(),
                repository: "acme/deploys".to_string(),
                run_id: "12345".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_success_with_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/run"))
            .and(header("Authorization", "Bearer tok-test"))
            .and(header("Accept", "application/json"))
            .and(body_partial_json(json!({
                "message": "Scheduled pipeline run",
                "trigger_source": "schedule",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"run_id": "r-1"})))
            .mount(&server)
            .await;

        let config = config_for(&format!("{}/run", server.uri()));
        let outcome = send_trigger(&config).await.unwrap();

        match outcome {
            Outcome::Success { status, body, .. } => {
                assert_eq!(status, 200);
                assert_eq!(body, json!({"run_id": "r-1"}));
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .mount(&server)
            .await;

        let config = config_for(&format!("{}/run", server.uri()));
        let outcome = send_trigger(&config).await.unwrap();

        match outcome {
            Outcome::HttpError { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad token");
            }
            other => panic!("expected HttpError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_accepted_counts_as_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({"queued": true})))
            .mount(&server)
            .await;

        let mut config = config_for(&format!("{}/run", server.uri()));
        config.mode = TriggerMode::Asynchronous;
        let outcome = send_trigger(&config).await.unwrap();

        assert!(outcome.is_accepted());
        assert_eq!(outcome.exit_code(TriggerMode::Asynchronous), 0);
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let mut config = config_for(&format!("{}/run", server.uri()));
        config.timeout = Duration::from_millis(200);
        let outcome = send_trigger(&config).await.unwrap();

        match outcome {
            Outcome::TimedOut { limit } => assert_eq!(limit, Duration::from_millis(200)),
            other => panic!("expected TimedOut, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        // Grab a port that was live and no longer is. A pooled server from
        // `MockServer::start()` keeps listening after drop, so build a
        // non-pooled one that actually releases the port.
        let server = MockServer::builder().start().await;
        let endpoint = format!("{}/run", server.uri());
        drop(server);

        let config = config_for(&endpoint);
        let outcome = send_trigger(&config).await.unwrap();

        assert!(
            matches!(outcome, Outcome::Transport { .. }),
            "expected Transport, got {outcome:?}"
        );
    }
}
