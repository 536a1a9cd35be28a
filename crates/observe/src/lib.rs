//! Logging initialisation shared by the deployment tooling binaries and
//! their tests.
pub mod config;
pub mod tracing;

pub use config::{Config, Output};
