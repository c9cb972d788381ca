//! Observability setup for the toolset server.
//!
//! Stdout carries the protocol stream, so logs go to stderr or to a file.

#![warn(missing_docs, clippy::pedantic)]

pub mod tracing_support;

pub use tracing_support::{TelemetryError, build_filter, init};
