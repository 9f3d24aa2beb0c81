//! Server configuration
//!
//! Parsed once at startup from CLI flags with environment-variable
//! fallbacks (`PORTFOLIO_*`).

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration for the portfolio server.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "portfolio-server",
    version,
    about = "Portfolio site backend: contact-form intake API and static site hosting"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "PORTFOLIO_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Directory for the durable message store
    #[arg(long, env = "PORTFOLIO_DATA_DIR", default_value = "data/messages")]
    pub data_dir: PathBuf,

    /// Directory holding the built client bundle; static hosting is
    /// disabled when unset
    #[arg(long, env = "PORTFOLIO_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Keep messages in memory instead of on disk (development only)
    #[arg(long, env = "PORTFOLIO_EPHEMERAL", default_value_t = false)]
    pub ephemeral: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    // parse_from still honors the env fallbacks, so ambient PORTFOLIO_*
    // variables would leak into these assertions.
    fn clear_env() {
        for var in [
            "PORTFOLIO_BIND",
            "PORTFOLIO_DATA_DIR",
            "PORTFOLIO_STATIC_DIR",
            "PORTFOLIO_EPHEMERAL",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn defaults() {
        clear_env();
        let config = ServerConfig::parse_from(["portfolio-server"]);
        assert_eq!(config.bind, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("data/messages"));
        assert!(config.static_dir.is_none());
        assert!(!config.ephemeral);
    }

    #[test]
    fn flags_override_defaults() {
        clear_env();
        let config = ServerConfig::parse_from([
            "portfolio-server",
            "--bind",
            "127.0.0.1:8080",
            "--data-dir",
            "/tmp/messages",
            "--static-dir",
            "dist",
            "--ephemeral",
        ]);
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("/tmp/messages"));
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
        assert!(config.ephemeral);
    }
}
