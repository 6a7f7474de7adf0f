//! Configuration loader for the Sunny Sips service.
//!
//! Reads `sunny.toml` (or the path given on the command line) and
//! deserializes it into [`SunnyConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::Path;

use sunny_types::config::SunnyConfig;
use sunny_types::error::ConfigError;

/// Read and parse a config file, reporting what went wrong.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_config(path: &Path) -> Result<Option<SunnyConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ConfigError::Read(err.to_string())),
    };

    toml::from_str::<SunnyConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`SunnyConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> SunnyConfig {
    match read_config(path).await {
        Ok(Some(config)) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Ok(None) => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            SunnyConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err} ({}), using defaults", path.display());
            SunnyConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("sunny.toml")).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.chat.history_limit, 5);
    }

    #[tokio::test]
    async fn test_load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sunny.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[catalog]
path = "/srv/sunny/products.json"
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.path, "/srv/sunny/products.json");
        assert_eq!(config.web.dir, "static");
    }

    #[tokio::test]
    async fn test_load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sunny.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.port, 3000);
    }

    #[tokio::test]
    async fn test_read_config_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sunny.toml");
        tokio::fs::write(&path, "[server]\nport = \"not a number\"")
            .await
            .unwrap();

        let err = read_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn test_read_config_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(read_config(&tmp.path().join("nope.toml")).await.unwrap().is_none());
    }
}
