use clap::Args;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot create database directory {path}: {source}")]
    DbDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    /// SQLite file holding the event log.
    #[arg(long, env = "HOOKFEED_DB_PATH", default_value = ".hookfeed/events.db")]
    pub db_path: String,

    #[arg(long, env = "HOOKFEED_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(long, env = "HOOKFEED_PORT", default_value_t = 5000)]
    pub port: u16,
}

impl ServeConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn ensure_db_dir(&self) -> Result<(), ConfigError> {
        let Some(parent) = Path::new(&self.db_path).parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::DbDir {
            path: parent.display().to_string(),
            source,
        })
    }
}
