//! Application configuration loaded from environment variables.

use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;
use crate::upstream::POETRYDB_AUTHOR_URL;

/// Output format of the log subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "POET_LOG_FORMAT must be `compact` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8000").
    pub bind_addr: String,

    /// PoetryDB author-listing endpoint.
    pub upstream_url: String,

    /// Upper bound on one upstream request, connect through body.
    pub upstream_timeout: Duration,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `POET_BIND_ADDR`: Server bind address (default: "0.0.0.0:8000")
    /// - `POETRYDB_AUTHOR_URL`: Author endpoint (default: "https://poetrydb.org/author")
    /// - `POET_UPSTREAM_TIMEOUT_SECS`: Upstream timeout in whole seconds, > 0 (default: 10)
    /// - `POET_LOG_FORMAT`: `compact` or `json` (default: compact)
    pub fn from_env() -> Result<Self, Error> {
        let bind_addr =
            std::env::var("POET_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let upstream_url = std::env::var("POETRYDB_AUTHOR_URL")
            .unwrap_or_else(|_| POETRYDB_AUTHOR_URL.to_string());

        let upstream_timeout = match std::env::var("POET_UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(Error::Config(format!(
                        "POET_UPSTREAM_TIMEOUT_SECS must be a positive integer, got `{raw}`"
                    )));
                }
            },
            Err(_) => Duration::from_secs(10),
        };

        let log_format = match std::env::var("POET_LOG_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self { bind_addr, upstream_url, upstream_timeout, log_format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "POET_BIND_ADDR",
        "POETRYDB_AUTHOR_URL",
        "POET_UPSTREAM_TIMEOUT_SECS",
        "POET_LOG_FORMAT",
    ];

    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8000");
            assert_eq!(config.upstream_url, "https://poetrydb.org/author");
            assert_eq!(config.upstream_timeout, Duration::from_secs(10));
            assert_eq!(config.log_format, LogFormat::Compact);
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("POET_BIND_ADDR", "127.0.0.1:9090"),
                ("POETRYDB_AUTHOR_URL", "http://localhost:3000/author"),
                ("POET_UPSTREAM_TIMEOUT_SECS", " 3 "),
                ("POET_LOG_FORMAT", "JSON"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.upstream_url, "http://localhost:3000/author");
                assert_eq!(config.upstream_timeout, Duration::from_secs(3));
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn config_rejects_bad_timeout() {
        for raw in ["0", "-1", "ten", ""] {
            with_env_vars(&[("POET_UPSTREAM_TIMEOUT_SECS", raw)], || {
                assert!(matches!(Config::from_env(), Err(Error::Config(_))), "accepted {raw:?}");
            });
        }
    }

    #[test]
    fn config_rejects_unknown_log_format() {
        with_env_vars(&[("POET_LOG_FORMAT", "pretty")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("pretty"));
        });
    }
}
