//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply process environment
/// overrides, and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    load_config_with(path, |var| std::env::var(var).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
pub fn load_config_with<F>(path: Option<&Path>, env: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ProxyConfig::default(),
    };

    apply_env_overrides(&mut config, env)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables onto `config`.
///
/// | Env Var           | Field                          |
/// |-------------------|--------------------------------|
/// | `HOST`            | `listener.host`                |
/// | `PORT`            | `listener.port`                |
/// | `API_KEY`         | `upstream.api_key`             |
/// | `FLICKR_BASE_URL` | `upstream.base_url`            |
/// | `LOG_LEVEL`       | `observability.log_level`      |
/// | `LOG_FORMAT`      | `observability.log_format`     |
/// | `METRICS_ADDRESS` | `observability.metrics_address` (also enables metrics) |
pub fn apply_env_overrides<F>(config: &mut ProxyConfig, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = env("HOST") {
        config.listener.host = host;
    }
    if let Some(port) = env("PORT") {
        config.listener.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::Env {
                var: "PORT",
                reason: e.to_string(),
            }
        })?;
    }
    if let Some(api_key) = env("API_KEY") {
        config.upstream.api_key = api_key;
    }
    if let Some(base_url) = env("FLICKR_BASE_URL") {
        config.upstream.base_url = base_url;
    }
    if let Some(level) = env("LOG_LEVEL") {
        config.observability.log_level = level;
    }
    if let Some(format) = env("LOG_FORMAT") {
        config.observability.log_format = format
            .parse()
            .map_err(|reason| ConfigError::Env { var: "LOG_FORMAT", reason })?;
    }
    if let Some(addr) = env("METRICS_ADDRESS") {
        config.observability.metrics_address = addr;
        config.observability.metrics_enabled = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_missing_api_key_refuses_to_load() {
        let err = load_config_with(None, env_of(&[])).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors, vec![ValidationError::MissingApiKey]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_env_overrides() {
        let config = load_config_with(
            None,
            env_of(&[("API_KEY", "secret"), ("PORT", "9000"), ("LOG_FORMAT", "JSON")]),
        )
        .unwrap();
        assert_eq!(config.upstream.api_key, "secret");
        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port() {
        let err = load_config_with(None, env_of(&[("API_KEY", "k"), ("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "PORT", .. }));
    }

    #[test]
    fn test_env_wins_over_file() {
        let path = std::env::temp_dir().join(format!("flickr-proxy-{}.toml", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[listener]\nport = 7000\n\n[upstream]\napi_key = \"from-file\"").unwrap();

        let config = load_config_with(Some(&path), env_of(&[("API_KEY", "from-env")])).unwrap();
        assert_eq!(config.listener.port, 7000);
        assert_eq!(config.upstream.api_key, "from-env");

        let _ = fs::remove_file(path);
    }
}
