//! Logger setup for hosts embedding the scene.
//!
//! The engine itself only talks to the `log` facade; hosts call
//! [`init_logging`] once to route it through `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
