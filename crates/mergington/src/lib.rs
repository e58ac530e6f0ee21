//! The shared library for the Mergington High School activities service.
//!
//! This library provides the pieces shared by the service binary and its tests,
//! including the roster data structures, error types, and logging setup.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
