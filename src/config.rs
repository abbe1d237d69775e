use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // i18n
    pub messages_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
                Err(_) => 3000,
            },

            // Directory holding one <locale>.json per supported locale
            messages_dir: std::env::var("MESSAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("messages")),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("MESSAGES_DIR");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.messages_dir, PathBuf::from("messages"));
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("MESSAGES_DIR", "/srv/messages");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.messages_dir, PathBuf::from("/srv/messages"));
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_ipv6_hosts() {
        clear_env();
        std::env::set_var("HOST", "::");
        let addr = Config::from_env().unwrap().bind_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.to_string(), "[::]:3000");

        std::env::set_var("HOST", "::1");
        std::env::set_var("PORT", "8443");
        let addr = Config::from_env().unwrap().bind_addr().unwrap();
        assert_eq!(addr.to_string(), "[::1]:8443");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_host() {
        clear_env();
        std::env::set_var("HOST", "not a host");
        let config = Config::from_env().unwrap();
        assert!(config.bind_addr().is_err());
        clear_env();
    }
}
