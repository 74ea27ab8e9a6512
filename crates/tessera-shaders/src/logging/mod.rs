//! Logging utilities.
//!
//! Generation reports through the `log` facade only; this module offers an
//! `env_logger` setup for hosts and tests that do not install their own.

mod init;

pub use init::{init_logging, LoggingConfig};
