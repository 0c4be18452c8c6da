use crate::domain::catalog::PAGE_SIZE;
use crate::domain::logging::LogLevel;

pub const DEFAULT_ENDPOINT: &str = "http://api.valantis.store:40000";
pub const DEFAULT_AUTH_SECRET: &str = "Valantis";

/// Runtime settings for the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub auth_secret: String,
    pub page_size: u32,
    pub log_level: LogLevel,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_secret: DEFAULT_AUTH_SECRET.to_string(),
            page_size: PAGE_SIZE,
            log_level: if cfg!(debug_assertions) {
                LogLevel::Debug
            } else {
                LogLevel::Info
            },
        }
    }
}

impl CatalogConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_auth_secret(mut self, secret: impl Into<String>) -> Self {
        self.auth_secret = secret.into();
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
