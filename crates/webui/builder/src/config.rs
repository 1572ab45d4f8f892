//! Server configuration document shared with the gate server.
//!
//! Only the `web` section matters for the web UI build, the remaining
//! sections (proxies, api) are accepted and ignored.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read server configuration {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse server configuration as JSON")]
    Json(#[from] serde_json::Error),
    #[error("cannot parse server configuration as TOML")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported server configuration format {path:?}, expected `.json` or `.toml`")]
    UnsupportedFormat { path: PathBuf },
    #[error("server configuration is missing `web.path`")]
    MissingWebPath,
    #[error("cannot locate the workspace root")]
    Metadata(#[from] cargo_metadata::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebConfig {
    /// URL prefix the web UI is served under.
    pub path: Option<String>,
    /// Directory holding the built assets.
    pub dist_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub server: Option<BaseConfig>,
    pub web: Option<WebConfig>,
}

impl ServerConfig {
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Ok(match format {
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Toml => toml::from_str(contents)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading {format:?} server configuration from {path:?}");
        Self::parse(&contents, format)
    }

    #[must_use]
    pub fn web_path(&self) -> Option<&str> {
        self.web.as_ref().and_then(|web| web.path.as_deref())
    }

    #[must_use]
    pub fn dist_path(&self) -> Option<&str> {
        self.web.as_ref().and_then(|web| web.dist_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;
    use std::io::Write as _;

    const SERVER_JSON: &str = r#"{
        "server": { "host": "0.0.0.0", "port": 3000 },
        "web": { "path": "/app", "dist_path": "dist" },
        "reverse_proxy": { "path": "/api", "forward_to": "http://127.0.0.1:8080" }
    }"#;

    const SERVER_TOML: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[web]
path = "/app"
dist_path = "dist"

[tcp_proxy]
path = "/tcp"
forward_to = "127.0.0.1:9000"
"#;

    #[test]
    fn json_and_toml_parse_to_the_same_document() {
        let json = ServerConfig::parse(SERVER_JSON, ConfigFormat::Json).unwrap();
        let toml = ServerConfig::parse(SERVER_TOML, ConfigFormat::Toml).unwrap();
        assert_eq!(json, toml);
        assert_eq!(Some("/app"), json.web_path());
        assert_eq!(Some("dist"), json.dist_path());
        assert_eq!(3000, json.server.unwrap().port);
    }

    #[test]
    fn missing_web_section_parses() {
        let config =
            ServerConfig::parse(r#"{"server": {"host": "::", "port": 80}}"#, ConfigFormat::Json)
                .unwrap();
        assert_eq!(None, config.web_path());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ServerConfig::parse("{ web: ", ConfigFormat::Json).unwrap_err();
        assert_matches!(err, ConfigError::Json(_));
    }

    #[rstest]
    #[case("server.json", ConfigFormat::Json)]
    #[case("server.JSON", ConfigFormat::Json)]
    #[case("conf/server.toml", ConfigFormat::Toml)]
    fn format_follows_extension(#[case] path: &str, #[case] expected: ConfigFormat) {
        assert_eq!(expected, ConfigFormat::from_path(Path::new(path)).unwrap());
    }

    #[rstest]
    #[case("server.yaml")]
    #[case("server")]
    fn unknown_extension_is_rejected(#[case] path: &str) {
        assert_matches!(
            ConfigFormat::from_path(Path::new(path)),
            Err(ConfigError::UnsupportedFormat { .. })
        );
    }

    #[test]
    fn load_reads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SERVER_TOML.as_bytes()).unwrap();
        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(Some("/app"), config.web_path());
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.json");
        assert_matches!(
            ServerConfig::load(&path),
            Err(ConfigError::Read { path: reported, .. }) if reported == path
        );
    }
}
