//! Server settings read from the environment.
//!
//! A `.env` file in the working directory is loaded first (see `main.rs`), so
//! every variable below can also be set there.
//!
//! | variable            | default     |
//! |---------------------|-------------|
//! | `PARAMS_HOST`       | `127.0.0.1` |
//! | `PARAMS_PORT`       | `8080`      |
//! | `PARAMS_JSON_LIMIT` | 10 MiB      |
//! | `PARAMS_LOG`        | `info`      |
//!
//! `RUST_LOG`, when set, takes precedence over `PARAMS_LOG`.

use log::warn;
use std::env;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted JSON request body, in bytes.
    pub json_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparsable numbers fall back to
    /// their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("PARAMS_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default(&lookup, "PARAMS_PORT", DEFAULT_PORT),
            json_limit: parse_or_default(&lookup, "PARAMS_JSON_LIMIT", DEFAULT_JSON_LIMIT),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Loads `.env` from the working directory into the environment.
///
/// Runs before the logger exists, so a problem is handed back as a message
/// for the caller to log. A missing file is not a problem.
pub fn load_dotenv() -> Option<String> {
    dotenv_warning(dotenvy::dotenv())
}

fn dotenv_warning<T>(result: Result<T, dotenvy::Error>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(format!("Could not load .env: {}", e)),
        _ => None,
    }
}

/// Default log filter handed to `env_logger` when `RUST_LOG` is unset.
pub fn log_filter() -> String {
    env::var("PARAMS_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value '{}' for {}, using the default", raw, key);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.json_limit, 10 * 1024 * 1024);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PARAMS_HOST", "0.0.0.0"),
            ("PARAMS_PORT", " 9000 "),
            ("PARAMS_JSON_LIMIT", "4096"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.json_limit, 4096);
    }

    #[test]
    fn missing_dotenv_is_silent() {
        let result = dotenvy::from_filename("this-file-does-not-exist.env");
        assert_eq!(dotenv_warning(result), None);
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOT VALID LINE").unwrap();

        let warning = dotenv_warning(dotenvy::from_path(file.path()));
        assert!(warning.unwrap().starts_with("Could not load .env"));
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = config_from(&[("PARAMS_PORT", "eighty"), ("PARAMS_JSON_LIMIT", "-1")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.json_limit, 10 * 1024 * 1024);
    }
}
