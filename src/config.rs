use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use dotenvy::Error as DotenvError;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_VERSION: &str = "1.0.0";
const PORT_ENV: &str = "PORT";
const ENVIRONMENT_ENV: &str = "ENVIRONMENT";
const VERSION_ENV: &str = "APP_VERSION";
const DEBUG_ENV: &str = "APP_DEBUG";

/// Configuration consumed by the service before spinning up Axum/hyper.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: String,
    pub version: String,
    pub debug: bool,
}

impl AppConfig {
    /// Loads configuration from `ENVIRONMENT`, `APP_VERSION`, `PORT`, and
    /// `APP_DEBUG`.
    ///
    /// Values from a local `.env` file (parsed via [`dotenvy::dotenv_override`]) override whatever
    /// is already set in the process environment, which makes local development workflows
    /// predictable.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_overrides()?;

        let port = resolve_port()?;
        let bind_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);

        Ok(Self {
            bind_addr,
            environment: env::var(ENVIRONMENT_ENV)
                .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_owned()),
            version: env::var(VERSION_ENV).unwrap_or_else(|_| DEFAULT_VERSION.to_owned()),
            debug: env::var(DEBUG_ENV)
                .map(|value| is_debug_value(&value))
                .unwrap_or(false),
        })
    }

    /// Returns a builder for programmatic overrides.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

impl Default for AppConfig {
    /// Binds to `0.0.0.0:5000` and reports the development environment.
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            environment: DEFAULT_ENVIRONMENT.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            debug: false,
        }
    }
}

/// Builder type for [`AppConfig`].
#[derive(Default, Clone, Debug)]
pub struct AppConfigBuilder {
    bind_addr: Option<SocketAddr>,
    environment: Option<String>,
    version: Option<String>,
    debug: Option<bool>,
}

impl AppConfigBuilder {
    /// Sets the address for the embedded Axum listener.
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Sets the environment name reported by the endpoints.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the application version reported by the endpoints.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Enables or disables debug-level logging.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Builds the final configuration.
    pub fn build(self) -> AppConfig {
        let defaults = AppConfig::default();

        AppConfig {
            bind_addr: self.bind_addr.unwrap_or(defaults.bind_addr),
            environment: self.environment.unwrap_or(defaults.environment),
            version: self.version.unwrap_or(defaults.version),
            debug: self.debug.unwrap_or(defaults.debug),
        }
    }
}

/// Errors that can occur while building [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("failed to load .env overrides: {0}")]
    Dotenv(#[from] DotenvError),
}

fn load_env_overrides() -> Result<(), ConfigError> {
    match dotenvy::dotenv_override() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::Dotenv(err)),
    }
}

fn resolve_port() -> Result<u16, ConfigError> {
    match env::var(PORT_ENV) {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn is_debug_value(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("development")
}
