//! Logging.
//!
//! `log` facade backed by `env_logger` for the terminal, plus an in-memory
//! [`LogBuffer`] the overlay console reads from.

mod buffer;
mod init;

pub use buffer::{LogBuffer, LogEntry};
pub use init::{init_logging, LoggingConfig};
