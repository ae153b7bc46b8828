//! Infrastructure concerns shared by the binary
//!
//! Currently just tracing initialization.

pub mod logging;

pub use logging::init_logging;
