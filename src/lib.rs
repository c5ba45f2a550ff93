//! Demonstration HTTP service for container deployment practices.
//!
//! The service exposes four routes: an HTML homepage, a health check suitable
//! for orchestrator probes, a JSON info endpoint, and a Prometheus-style
//! metrics endpoint. Configuration comes from environment variables and all
//! shared state is captured once at startup, then read concurrently by the
//! handlers without further coordination.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod server;
pub mod state;

pub use crate::config::{AppConfig, AppConfigBuilder, ConfigError};
pub use crate::error::{Result, ServiceError};
pub use crate::server::{router, run, serve};
pub use crate::state::AppState;
