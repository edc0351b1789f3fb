use archive_banner::{BannerRenderer, EnglishFormatter, English, DEFAULT_DOCS_URL};
use chrono::{FixedOffset, Offset, Utc};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub docs_url: String,
    pub clock_24_hours: bool,
    pub offset: FixedOffset,
    /// Reject malformed status details instead of resolving them anyway.
    pub strict: bool,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            docs_url: DEFAULT_DOCS_URL.into(),
            clock_24_hours: false,
            offset: Utc.fix(),
            strict: false,
            log_filter: "info".into(),
            log_format: LogFormat::Compact,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source, falling back to defaults
    /// for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("ARCHIVE_SERVER_LISTEN") {
            config.listen = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "ARCHIVE_SERVER_LISTEN",
                value: value.clone(),
                reason: "expected an ip:port socket address such as 0.0.0.0:8080; host names are not resolved",
            })?;
        }
        if let Some(value) = lookup("ARCHIVE_SERVER_DOCS_URL") {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: "ARCHIVE_SERVER_DOCS_URL",
                    value,
                    reason: "must not be empty",
                });
            }
            config.docs_url = value;
        }
        if let Some(value) = lookup("ARCHIVE_SERVER_CLOCK_24H") {
            config.clock_24_hours = parse_bool("ARCHIVE_SERVER_CLOCK_24H", &value)?;
        }
        if let Some(value) = lookup("ARCHIVE_SERVER_UTC_OFFSET_MINUTES") {
            config.offset = parse_offset(&value)?;
        }
        if let Some(value) = lookup("ARCHIVE_SERVER_STRICT") {
            config.strict = parse_bool("ARCHIVE_SERVER_STRICT", &value)?;
        }
        if let Some(value) = lookup("ARCHIVE_SERVER_LOG") {
            config.log_filter = value;
        }
        if let Some(value) = lookup("ARCHIVE_SERVER_LOG_FORMAT") {
            config.log_format = match value.to_ascii_lowercase().as_str() {
                "compact" => LogFormat::Compact,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "ARCHIVE_SERVER_LOG_FORMAT",
                        value,
                        reason: "expected compact or json",
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn renderer(&self) -> BannerRenderer {
        let formatter = EnglishFormatter::default()
            .with_24_hour_clock(self.clock_24_hours)
            .with_offset(self.offset);
        BannerRenderer::new(formatter, English).with_docs_url(self.docs_url.clone())
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: "expected true or false",
        }),
    }
}

fn parse_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue {
        var: "ARCHIVE_SERVER_UTC_OFFSET_MINUTES",
        value: value.to_string(),
        reason,
    };
    let minutes = value
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid("expected whole minutes"))?;
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| invalid("offset must be within a day"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen.to_string(), "0.0.0.0:8080");
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);
        assert!(!config.clock_24_hours);
        assert_eq!(config.offset.local_minus_utc(), 0);
        assert!(!config.strict);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("ARCHIVE_SERVER_LISTEN", "127.0.0.1:9000"),
            ("ARCHIVE_SERVER_DOCS_URL", "https://example.com/docs"),
            ("ARCHIVE_SERVER_CLOCK_24H", "yes"),
            ("ARCHIVE_SERVER_UTC_OFFSET_MINUTES", "-330"),
            ("ARCHIVE_SERVER_STRICT", "TRUE"),
            ("ARCHIVE_SERVER_LOG", "archive_server=debug"),
            ("ARCHIVE_SERVER_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.listen.port(), 9000);
        assert_eq!(config.docs_url, "https://example.com/docs");
        assert!(config.clock_24_hours);
        assert_eq!(config.offset.local_minus_utc(), -330 * 60);
        assert!(config.strict);
        assert_eq!(config.log_filter, "archive_server=debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_values() {
        for (var, value) in [
            ("ARCHIVE_SERVER_LISTEN", "nowhere"),
            ("ARCHIVE_SERVER_DOCS_URL", "  "),
            ("ARCHIVE_SERVER_CLOCK_24H", "maybe"),
            ("ARCHIVE_SERVER_UTC_OFFSET_MINUTES", "east"),
            ("ARCHIVE_SERVER_UTC_OFFSET_MINUTES", "1440"),
            ("ARCHIVE_SERVER_STRICT", "2"),
            ("ARCHIVE_SERVER_LOG_FORMAT", "xml"),
        ] {
            let err = config(&[(var, value)]).unwrap_err();
            let ConfigError::InvalidValue { var: got, .. } = &err;
            assert_eq!(*got, var, "{err}");
        }
    }

    #[test]
    fn listen_requires_a_literal_ip() {
        let err = config(&[("ARCHIVE_SERVER_LISTEN", "localhost:8080")]).unwrap_err();
        let ConfigError::InvalidValue { var, reason, .. } = &err;
        assert_eq!(*var, "ARCHIVE_SERVER_LISTEN");
        assert!(reason.contains("ip:port"), "{err}");

        let ok = config(&[("ARCHIVE_SERVER_LISTEN", "[::1]:9000")]).unwrap();
        assert_eq!(ok.listen.port(), 9000);
    }

    #[test]
    fn renderer_follows_config() {
        let config = config(&[
            ("ARCHIVE_SERVER_DOCS_URL", "https://example.com/docs"),
            ("ARCHIVE_SERVER_CLOCK_24H", "1"),
        ])
        .unwrap();
        assert_eq!(config.renderer().docs_url(), "https://example.com/docs");
    }
}
