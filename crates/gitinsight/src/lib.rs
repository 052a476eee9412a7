//! gitinsight library
//!
//! This module exports the command-line configuration and handlers for use
//! in integration tests and by the binary.

pub mod config;
pub mod handlers;
