//! Build-time support for the web UI.
//!
//! Resolves the public base path from the shared server configuration and
//! hands it to Trunk (`--public-url`) and to the web UI crate
//! (`WEBUI_BASE_PATH`, used as the router basename).

pub mod base_path;
pub mod config;
pub mod trunk;

pub use base_path::{BasePath, normalize_base_path, resolve_base_path};
pub use config::{ConfigError, ConfigFormat, ServerConfig};
pub use trunk::{BuildConfig, BuildError};

use std::{
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Overrides the location of the server configuration.
pub const SERVER_CONFIG_ENV: &str = "WEBUI_SERVER_CONFIG";
/// Compile-time variable holding the resolved base path.
pub const BASE_PATH_ENV: &str = "WEBUI_BASE_PATH";
pub const SERVER_CONFIG_FILE: &str = "server.json";

/// Finds the server configuration: [`SERVER_CONFIG_ENV`] if set, otherwise
/// [`SERVER_CONFIG_FILE`] at the root of the workspace containing `manifest_dir`.
pub fn locate_server_config(manifest_dir: &Path) -> Result<PathBuf, ConfigError> {
    locate(std::env::var_os(SERVER_CONFIG_ENV), manifest_dir)
}

fn locate(env_override: Option<OsString>, manifest_dir: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|path| !path.is_empty()) {
        return Ok(manifest_dir.join(path));
    }
    let metadata = cargo_metadata::MetadataCommand::new()
        .manifest_path(manifest_dir.join("Cargo.toml"))
        .no_deps()
        .exec()?;
    Ok(metadata
        .workspace_root
        .into_std_path_buf()
        .join(SERVER_CONFIG_FILE))
}

/// Writes the directives a build script needs to inline `base`.
pub fn write_cargo_directives(
    out: &mut impl Write,
    config_path: &Path,
    base: &BasePath,
) -> io::Result<()> {
    writeln!(out, "cargo:rerun-if-env-changed={SERVER_CONFIG_ENV}")?;
    writeln!(out, "cargo:rerun-if-changed={}", config_path.display())?;
    writeln!(out, "cargo:rustc-env={BASE_PATH_ENV}={base}")
}
