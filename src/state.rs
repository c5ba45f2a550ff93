use std::time::Instant;

use crate::config::AppConfig;

/// Process-wide state shared read-only across request handlers.
///
/// The start instant is captured exactly once, before the listener accepts its
/// first request, and is never mutated afterwards. Handlers receive the state
/// behind an `Arc`, so concurrent reads need no synchronization.
#[derive(Clone, Debug)]
pub struct AppState {
    config: AppConfig,
    hostname: String,
    started_at: Instant,
}

impl AppState {
    /// Captures the start instant and resolves the OS hostname.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            hostname: resolve_hostname(),
            started_at: Instant::now(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Hostname resolved at startup; it does not change for the process
    /// lifetime, so there is no reason to re-query it per request.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Whole seconds elapsed since the service started.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

fn resolve_hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_reports_zero_uptime() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.uptime_secs(), 0);
    }

    #[test]
    fn hostname_is_resolved() {
        let state = AppState::new(AppConfig::default());
        assert!(!state.hostname().is_empty());
    }
}
