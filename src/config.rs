use std::net::{Ipv4Addr, SocketAddr};

const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://tournamentturtle.db?mode=rwc";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    Host(String),
    #[error("PORT is not the correct format: {0}")]
    Port(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads `HOST`, `PORT` and `DATABASE_URL`, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: Ipv4Addr = match lookup("HOST") {
            Some(raw) => raw.parse::<Ipv4Addr>().map_err(|_| ConfigError::Host(raw))?,
            None => DEFAULT_HOST,
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Port(raw))?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self { host, port, database_url })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
