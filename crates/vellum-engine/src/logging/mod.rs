//! Logging setup.
//!
//! Library code logs through the `log` facade only; binaries and tests call
//! [`init_logging`] to install an `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
