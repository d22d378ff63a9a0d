use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub environment: String, // for dev its 'development' and for prod anything else
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string());
        let server_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let public_url = lookup("PUBLIC_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            server_addr,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            content_dir: lookup("CONTENT_DIR").unwrap_or_else(|| "content".to_string()).into(),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "dist".to_string()).into(),
            public_url,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
