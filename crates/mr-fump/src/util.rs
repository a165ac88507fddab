use std::time::Duration;

use derive_builder::Builder;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Settings for the HTTP client used to talk to the menu service.
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(default)]
pub struct HttpConfig {
    /// Upper bound for a whole request, connect included.
    pub timeout: Duration,
    /// Skip TLS certificate verification. The FUMP host has served
    /// certificates that do not validate.
    pub accept_invalid_certs: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
        }
    }
}

pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .timeout(config.timeout)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
}

pub fn default_http_client() -> Result<reqwest::Client, reqwest::Error> {
    build_http_client(&HttpConfig::default())
}
