//! Prelude module for common imports

pub use crate::trigger::config::{TriggerConfig, TriggerMetadata, TriggerMode};
pub use crate::trigger::errors::TriggerError;
pub use crate::trigger::outcome::{Outcome, status_hint};
pub use crate::trigger::request::{TriggerPayload, send_trigger};
