//! Server configuration.
//!
//! Everything here is an external concern of the core: the arithmetic
//! endpoints behave identically whatever the bind address. Defaults match
//! the deployed service (port 3000, `logs/` next to the binary); environment
//! variables override them. A malformed value falls back to its default
//! rather than aborting a stateless service.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use crate::logging::SERVICE;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl ServerConfig {
    /// Read `CALC_HOST`, `CALC_PORT` and `CALC_LOG_DIR`, keeping the default
    /// for anything absent or unparseable. A malformed port is logged, not
    /// fatal.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("CALC_HOST").unwrap_or(defaults.host),
            port: port_from(std::env::var("CALC_PORT").ok()),
            log_dir: std::env::var("CALC_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        }
    }

    /// Bind address, falling back to loopback when the host is malformed.
    /// The fallback is logged.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| {
                warn!(
                    service = SERVICE,
                    "malformed host {:?}, binding loopback instead",
                    self.host
                );
                SocketAddr::from(([127, 0, 0, 1], self.port))
            })
    }
}

fn port_from(raw: Option<String>) -> u16 {
    raw.map_or(DEFAULT_PORT, |raw| {
        raw.parse().unwrap_or_else(|_| {
            warn!(
                service = SERVICE,
                "malformed CALC_PORT {raw:?}, using {DEFAULT_PORT}"
            );
            DEFAULT_PORT
        })
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_match_the_deployed_service() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn socket_addr_falls_back_to_loopback_for_a_bad_host_and_logs_it() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };

        let (addr, output) = crate::logging::capture::rendered(|| config.socket_addr());

        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert!(output.contains("WARN"));
        assert!(output.contains("malformed host"));
    }

    #[test]
    fn malformed_port_falls_back_to_default_and_logs_it() {
        let (port, output) = crate::logging::capture::rendered(|| port_from(Some("70000".to_string())));

        assert_eq!(port, DEFAULT_PORT);
        assert!(output.contains("WARN"));
        assert!(output.contains("malformed CALC_PORT"));
    }

    #[test]
    fn well_formed_port_is_used_without_noise() {
        let (port, output) = crate::logging::capture::rendered(|| port_from(Some("8080".to_string())));

        assert_eq!(port, 8080);
        assert!(output.is_empty());
    }

    #[test]
    fn absent_port_uses_the_default() {
        assert_eq!(port_from(None), DEFAULT_PORT);
    }
}
