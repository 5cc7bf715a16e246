//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::errors::{CliError, CliResult};

/// Load server configuration from an optional JSON file.
///
/// A missing file falls back to defaults; an unreadable or invalid one is a
/// config error.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    Ok(config)
}

/// Run the HTTP server until it exits.
///
/// Builds the tokio runtime here so that main and argument parsing stay
/// synchronous.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let config = load_config(&PathBuf::from("./no-such-file.json")).unwrap();
        assert_eq!(config.port, 5000);
    }
}
