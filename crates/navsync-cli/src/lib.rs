//! Library side of the `navsync` CLI: logging, configuration and session replay.

pub mod config;
pub mod logging;
pub mod replay;
pub mod script;
