use crate::config::{ConfigError, ServerConfig};
use derive_more::{Deref, Display};
use tracing::debug;

/// Public base path of the built web UI. Never empty, always ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref)]
#[deref(forward)]
pub struct BasePath(String);

impl BasePath {
    pub const ROOT: &'static str = "/";

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }
}

impl From<BasePath> for String {
    fn from(base: BasePath) -> Self {
        base.0
    }
}

/// Appends the trailing `/` when missing. An empty path becomes the root.
#[must_use]
pub fn normalize_base_path(path: &str) -> BasePath {
    if path.ends_with('/') {
        BasePath(path.to_string())
    } else {
        BasePath(format!("{path}/"))
    }
}

/// Reads `web.path` and normalizes it.
pub fn resolve_base_path(config: &ServerConfig) -> Result<BasePath, ConfigError> {
    let path = config.web_path().ok_or(ConfigError::MissingWebPath)?;
    let base = normalize_base_path(path);
    debug!("Resolved base path `{base}` from web.path `{path}`");
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case("/app", "/app/")]
    #[case("/app/", "/app/")]
    #[case("/", "/")]
    #[case("", "/")]
    #[case("/nested/web", "/nested/web/")]
    #[case("https://cdn.example.com/ui", "https://cdn.example.com/ui/")]
    fn normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(expected, normalize_base_path(input).as_str());
    }

    #[rstest]
    #[case("/app")]
    #[case("/app/")]
    #[case("")]
    #[case("/a//")]
    fn normalize_is_idempotent(#[case] input: &str) {
        let once = normalize_base_path(input);
        let twice = normalize_base_path(&once);
        assert_eq!(once, twice);
        assert!(twice.ends_with('/'));
    }

    #[rstest]
    #[case(r#"{"web": {"path": "/app"}}"#, "/app/")]
    #[case(r#"{"web": {"path": "/app/"}}"#, "/app/")]
    #[case(r#"{"web": {"path": "/"}}"#, "/")]
    fn resolve_from_config(#[case] json: &str, #[case] expected: &str) {
        let config = ServerConfig::parse(json, ConfigFormat::Json).unwrap();
        let base = resolve_base_path(&config).unwrap();
        assert_eq!(expected, base.to_string());
    }

    #[rstest]
    #[case(r#"{}"#)]
    #[case(r#"{"web": {}}"#)]
    #[case(r#"{"web": {"dist_path": "dist"}}"#)]
    fn missing_web_path_fails_fast(#[case] json: &str) {
        let config = ServerConfig::parse(json, ConfigFormat::Json).unwrap();
        assert_matches!(resolve_base_path(&config), Err(ConfigError::MissingWebPath));
    }

    #[test]
    fn root_detection() {
        assert!(normalize_base_path("").is_root());
        assert!(!normalize_base_path("/app").is_root());
    }
}
