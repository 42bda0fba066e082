//! Environment-driven configuration for the diagnostics service.
//!
//! Values come from `HSE_*` variables, with a `.env` file honored for local
//! runs. Every field has a default so the binary starts with no
//! configuration at all.

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const ENV_STAGE: &str = "HSE_ENV";
const ENV_HOST: &str = "HSE_HOST";
const ENV_PORT: &str = "HSE_PORT";
const ENV_LOG_LEVEL: &str = "HSE_LOG_LEVEL";

/// Deployment stage the service runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Level used when `HSE_LOG_LEVEL` is unset: production stays at `info`,
    /// every other stage logs `debug`.
    fn default_log_level(self) -> &'static str {
        match self {
            Self::Production => "info",
            Self::Development | Self::Test => "debug",
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&env_or(ENV_STAGE, "development"));

        let port_raw = env_or(ENV_PORT, "3000");
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port_raw })?;

        Ok(Self {
            environment,
            server: ServerConfig {
                host: env_or(ENV_HOST, "127.0.0.1"),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: env_or(ENV_LOG_LEVEL, environment.default_log_level()),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Bind address for the diagnostics endpoints.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        // "localhost" is accepted as a spelling of loopback
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost { source })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filtering handed to [`crate::telemetry`].
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort { value: String },
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "{ENV_PORT} must be a u16, got '{value}'")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "{ENV_HOST} must be an IP address or 'localhost'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var(ENV_STAGE);
        env::remove_var(ENV_HOST);
        env::remove_var(ENV_PORT);
        env::remove_var(ENV_LOG_LEVEL);
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn load_honors_environment_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(ENV_STAGE, "production");
        env::set_var(ENV_HOST, "0.0.0.0");
        env::set_var(ENV_PORT, "8080");
        env::set_var(ENV_LOG_LEVEL, "trace");

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.telemetry.log_level, "trace");

        reset_env();
    }

    #[test]
    fn production_quiets_the_default_log_level() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(ENV_STAGE, "production");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "info");

        reset_env();
    }

    #[test]
    fn invalid_port_reports_the_offending_value() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(ENV_PORT, "not-a-port");

        let result = AppConfig::load();
        match result {
            Err(ConfigError::InvalidPort { value }) => assert_eq!(value, "not-a-port"),
            other => panic!("expected an invalid port error, got {other:?}"),
        }

        reset_env();
    }

    #[test]
    fn localhost_resolves_to_loopback() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 3000,
        };

        let addr = server.socket_addr().expect("resolves");
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }
}
