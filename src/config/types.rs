//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_RELAY_JSON_ENDPOINT, DEFAULT_RELAY_RAW_ENDPOINT, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_USER_AGENT, DIRECT_TIMEOUT, RELAY_JSON_TIMEOUT, RELAY_RAW_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Endpoints are configurable so the pipeline can be pointed at a local mock
/// server; the defaults target the public search endpoint and relays.
///
/// # Examples
///
/// ```no_run
/// use image_lookup::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     direct_timeout: Duration::from_secs(2),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical image search endpoint (without query string)
    pub search_endpoint: String,

    /// Passthrough relay endpoint (returns the target body as-is)
    pub relay_raw_endpoint: String,

    /// JSON-envelope relay endpoint (returns `{"contents": "..."}`)
    pub relay_json_endpoint: String,

    /// Deadline for the direct request to the search endpoint
    pub direct_timeout: Duration,

    /// Deadline for the passthrough relay request
    pub relay_raw_timeout: Duration,

    /// Deadline for the JSON-envelope relay request
    pub relay_json_timeout: Duration,

    /// User-Agent sent on the direct request
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            relay_raw_endpoint: DEFAULT_RELAY_RAW_ENDPOINT.to_string(),
            relay_json_endpoint: DEFAULT_RELAY_JSON_ENDPOINT.to_string(),
            direct_timeout: DIRECT_TIMEOUT,
            relay_raw_timeout: RELAY_RAW_TIMEOUT,
            relay_json_timeout: RELAY_JSON_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Upper bound on network time spent by one resolution.
    ///
    /// The race phase lasts at most as long as its slower racer; the fallback
    /// phase adds its own deadline.
    pub fn max_resolution_time(&self) -> Duration {
        self.direct_timeout.max(self.relay_raw_timeout) + self.relay_json_timeout
    }
}

/// Command-line options.
///
/// Every option can also be set through an `IMAGE_LOOKUP_*` environment
/// variable (a `.env` file is loaded first by the binary).
///
/// # Examples
///
/// ```bash
/// # Resolve one query and print {"imageUrl": ...}
/// image_lookup golden retriever
///
/// # Serve GET /api/search-images?q=... on port 8080
/// image_lookup --serve 8080
///
/// # Shorter direct deadline, debug logging
/// image_lookup --direct-timeout-ms 2000 --log-level debug red panda
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "image_lookup",
    about = "Resolves a search query to a single representative image URL."
)]
pub struct Opt {
    /// Search query (words are joined with spaces)
    #[arg(value_name = "QUERY", required_unless_present = "serve")]
    pub query: Vec<String>,

    /// Run an HTTP server on this port instead of resolving one query
    #[arg(long, value_name = "PORT", env = "IMAGE_LOOKUP_SERVE")]
    pub serve: Option<u16>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "IMAGE_LOOKUP_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "IMAGE_LOOKUP_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value for the direct search request
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "IMAGE_LOOKUP_USER_AGENT")]
    pub user_agent: String,

    /// Image search endpoint
    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT, env = "IMAGE_LOOKUP_SEARCH_ENDPOINT")]
    pub search_endpoint: String,

    /// Passthrough relay endpoint
    #[arg(long, default_value = DEFAULT_RELAY_RAW_ENDPOINT, env = "IMAGE_LOOKUP_RELAY_RAW_ENDPOINT")]
    pub relay_raw_endpoint: String,

    /// JSON-envelope relay endpoint
    #[arg(long, default_value = DEFAULT_RELAY_JSON_ENDPOINT, env = "IMAGE_LOOKUP_RELAY_JSON_ENDPOINT")]
    pub relay_json_endpoint: String,

    /// Direct request timeout in milliseconds
    #[arg(long, default_value_t = DIRECT_TIMEOUT.as_millis() as u64, env = "IMAGE_LOOKUP_DIRECT_TIMEOUT_MS")]
    pub direct_timeout_ms: u64,

    /// Passthrough relay timeout in milliseconds
    #[arg(long, default_value_t = RELAY_RAW_TIMEOUT.as_millis() as u64, env = "IMAGE_LOOKUP_RELAY_RAW_TIMEOUT_MS")]
    pub relay_raw_timeout_ms: u64,

    /// JSON-envelope relay timeout in milliseconds
    #[arg(long, default_value_t = RELAY_JSON_TIMEOUT.as_millis() as u64, env = "IMAGE_LOOKUP_RELAY_JSON_TIMEOUT_MS")]
    pub relay_json_timeout_ms: u64,
}

impl Opt {
    /// The query words joined into a single search string.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }

    /// Builds the library configuration from the parsed options.
    pub fn to_config(&self) -> Config {
        Config {
            search_endpoint: self.search_endpoint.clone(),
            relay_raw_endpoint: self.relay_raw_endpoint.clone(),
            relay_json_endpoint: self.relay_json_endpoint.clone(),
            direct_timeout: Duration::from_millis(self.direct_timeout_ms),
            relay_raw_timeout: Duration::from_millis(self.relay_raw_timeout_ms),
            relay_json_timeout: Duration::from_millis(self.relay_json_timeout_ms),
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.search_endpoint, "https://www.bing.com/images/search");
        assert_eq!(config.relay_raw_endpoint, "https://api.allorigins.win/raw");
        assert_eq!(config.relay_json_endpoint, "https://api.allorigins.win/get");
        assert_eq!(config.direct_timeout, Duration::from_millis(3500));
        assert_eq!(config.relay_raw_timeout, Duration::from_millis(5000));
        assert_eq!(config.relay_json_timeout, Duration::from_millis(5000));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_max_resolution_time_uses_slower_racer() {
        let config = Config::default();
        // max(3.5s, 5s) + 5s
        assert_eq!(config.max_resolution_time(), Duration::from_secs(10));

        let config = Config {
            direct_timeout: Duration::from_secs(8),
            relay_raw_timeout: Duration::from_secs(1),
            relay_json_timeout: Duration::from_secs(2),
            ..Default::default()
        };
        assert_eq!(config.max_resolution_time(), Duration::from_secs(10));
    }

    #[test]
    fn test_opt_parses_multi_word_query() {
        let opt = Opt::try_parse_from(["image_lookup", "red", "panda"])
            .expect("query words should parse");
        assert_eq!(opt.query_string(), "red panda");
        assert!(opt.serve.is_none());
    }

    #[test]
    fn test_opt_requires_query_unless_serving() {
        assert!(Opt::try_parse_from(["image_lookup"]).is_err());

        let opt = Opt::try_parse_from(["image_lookup", "--serve", "8080"])
            .expect("--serve without a query should parse");
        assert_eq!(opt.serve, Some(8080));
        assert!(opt.query.is_empty());
    }

    #[test]
    fn test_opt_to_config_maps_timeouts() {
        let opt = Opt::try_parse_from([
            "image_lookup",
            "--direct-timeout-ms",
            "1200",
            "--relay-raw-timeout-ms",
            "2500",
            "--relay-json-timeout-ms",
            "900",
            "--search-endpoint",
            "http://127.0.0.1:9000/images/search",
            "cats",
        ])
        .expect("options should parse");
        let config = opt.to_config();
        assert_eq!(config.direct_timeout, Duration::from_millis(1200));
        assert_eq!(config.relay_raw_timeout, Duration::from_millis(2500));
        assert_eq!(config.relay_json_timeout, Duration::from_millis(900));
        assert_eq!(config.search_endpoint, "http://127.0.0.1:9000/images/search");
    }

    #[test]
    fn test_opt_defaults_match_config_defaults() {
        let opt = Opt::try_parse_from(["image_lookup", "cats"]).expect("should parse");
        let from_cli = opt.to_config();
        let defaults = Config::default();
        assert_eq!(from_cli.direct_timeout, defaults.direct_timeout);
        assert_eq!(from_cli.relay_raw_timeout, defaults.relay_raw_timeout);
        assert_eq!(from_cli.relay_json_timeout, defaults.relay_json_timeout);
        assert_eq!(from_cli.search_endpoint, defaults.search_endpoint);
        assert_eq!(from_cli.user_agent, defaults.user_agent);
    }
}
