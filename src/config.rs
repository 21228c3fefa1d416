use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};
use crate::summarizer::DEFAULT_TARGET_LENGTH;

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Word cap applied to summaries when a request does not set one.
    pub summary_target_length: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let summary_target_length = match env::var("SUMMARY_TARGET_LENGTH") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| AppError::Config(format!("Invalid summary target length: {}", e)))?,
            Err(_) => DEFAULT_TARGET_LENGTH,
        };

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            summary_target_length,
        })
    }
}
