//! Logging setup for the repokit binaries.
//!
//! Structured logging via the `tracing` crate, written to stderr.
//!
//! # Feature Flags
//!
//! - `release-logs`: Strip debug/trace at compile time
//! - `max-perf`: Disable all tracing for maximum performance

mod init;

pub use init::{init_telemetry, TelemetryConfig};
