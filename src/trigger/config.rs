//! Invocation configuration resolved from the process environment
//!
//! All behavioral knobs are environment variables so the binary can be
//! dropped into a CI job without flags. Resolution is factored over a
//! lookup function so tests never touch the real process environment.

use std::time::Duration;

use crate::trigger::errors::TriggerError;

/// Environment variable holding the trigger endpoint.
pub const ENV_PIPELINE_URL: &str = "PIPELINE_URL";
/// Environment variable holding the bearer credential.
pub const ENV_BEARER_TOKEN: &str = "BEARER_TOKEN";
/// Environment variable holding the optional trigger message.
pub const ENV_CUSTOM_MESSAGE: &str = "CUSTOM_MESSAGE";
/// Environment variable selecting sync or async behavior.
pub const ENV_TRIGGER_MODE: &str = "TRIGGER_MODE";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PIPELINE_TIMEOUT_SECS";

const DEFAULT_MESSAGE: &str = "Scheduled pipeline run";
const SYNC_TIMEOUT_SECS: u64 = 120;
const ASYNC_TIMEOUT_SECS: u64 = 10;

/// How the remote pipeline is expected to behave, and therefore how a
/// timeout and a 202 response are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// The endpoint runs the pipeline synchronously; wait the full timeout
    /// and treat an elapsed timeout as a failure.
    #[default]
    Synchronous,
    /// The endpoint only schedules the pipeline; give up waiting quickly
    /// and treat a timeout as an expected, non-fatal outcome.
    Asynchronous,
}

impl TriggerMode {
    /// Request timeout used when `PIPELINE_TIMEOUT_SECS` is not set.
    pub fn default_timeout(self) -> Duration {
        match self {
            Self::Synchronous => Duration::from_secs(SYNC_TIMEOUT_SECS),
            Self::Asynchronous => Duration::from_secs(ASYNC_TIMEOUT_SECS),
        }
    }

    /// Whether an elapsed timeout still counts as a successful invocation.
    pub fn tolerates_timeout(self) -> bool {
        matches!(self, Self::Asynchronous)
    }
}

/// Ambient CI metadata, used for logging only.
#[derive(Debug, Clone)]
pub struct TriggerMetadata {
    /// What initiated the invocation (`GITHUB_EVENT_NAME`).
    pub trigger_source: String,
    /// Repository the CI job belongs to (`GITHUB_REPOSITORY`).
    pub repository: String,
    /// CI run identifier (`GITHUB_RUN_ID`).
    pub run_id: String,
}

/// Everything one invocation needs, resolved up front.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Target endpoint for the POST request.
    pub endpoint_url: String,
    /// Bearer credential. Never logged.
    pub bearer_token: String,
    /// Free-form message forwarded in the request body.
    pub custom_message: String,
    /// Sync/async interpretation of the invocation.
    pub mode: TriggerMode,
    /// Upper bound on the whole request.
    pub timeout: Duration,
    /// Ambient CI metadata for logging.
    pub metadata: TriggerMetadata,
}

impl TriggerConfig {
    /// Resolves configuration from the process environment.
    ///
    /// Fails before any network attempt when `PIPELINE_URL` or
    /// `BEARER_TOKEN` is missing, empty, or malformed.
    pub fn from_env() -> Result<Self, TriggerError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolves configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TriggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint_url = required(&lookup, ENV_PIPELINE_URL)?;
        let bearer_token = required(&lookup, ENV_BEARER_TOKEN)?;

        // Reject malformed endpoints here rather than as a transport error.
        url::Url::parse(&endpoint_url).map_err(|source| TriggerError::InvalidEndpoint {
            url: endpoint_url.clone(),
            source,
        })?;

        let custom_message =
            non_empty(&lookup, ENV_CUSTOM_MESSAGE).unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        let mode = match non_empty(&lookup, ENV_TRIGGER_MODE) {
            None => TriggerMode::default(),
            Some(value) => match value.to_lowercase().as_str() {
                "sync" | "synchronous" => TriggerMode::Synchronous,
                "async" | "asynchronous" => TriggerMode::Asynchronous,
                _ => {
                    return Err(TriggerError::InvalidMode {
                        var: ENV_TRIGGER_MODE,
                        value,
                    });
                }
            },
        };

        let timeout = match non_empty(&lookup, ENV_TIMEOUT_SECS) {
            None => mode.default_timeout(),
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(TriggerError::InvalidNumber {
                        var: ENV_TIMEOUT_SECS,
                        value,
                    });
                }
            },
        };

        let metadata = TriggerMetadata {
            trigger_source: ambient(&lookup, "GITHUB_EVENT_NAME"),
            repository: ambient(&lookup, "GITHUB_REPOSITORY"),
            run_id: ambient(&lookup, "GITHUB_RUN_ID"),
        };

        Ok(Self {
            endpoint_url,
            bearer_token,
            custom_message,
            mode,
            timeout,
            metadata,
        })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, TriggerError>
where
    F: Fn(&str) -> Option<String>,
{
    // CI secrets frequently expand to "", which is as good as unset.
    non_empty(lookup, var).ok_or(TriggerError::MissingConfig { var })
}

fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|value| !value.trim().is_empty())
}

fn ambient<F>(lookup: &F, var: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, var).unwrap_or_else(|| "unknown".to_string())
}
