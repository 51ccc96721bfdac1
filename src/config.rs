use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Process configuration. Flags take precedence over environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "propsearch", about = "Read-only property record search service")]
pub struct Config {
    /// SQLite dataset holding the `properties` table. Opened read-only.
    #[arg(long, env = "PROPSEARCH_DB_PATH", default_value = "Database1.db")]
    pub db_path: PathBuf,

    #[arg(long, env = "PROPSEARCH_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PROPSEARCH_PORT", default_value_t = 5001)]
    pub port: u16,

    /// Worker threads; each holds its own read-only connection.
    #[arg(long, env = "PROPSEARCH_WORKERS", default_value_t = 8)]
    pub workers: usize,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
