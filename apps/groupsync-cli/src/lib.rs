//! groupsync CLI library
//!
//! Exposes the argument, configuration and run modules so integration tests
//! can drive a run without spawning the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod run;
