//! Build configuration handed to Trunk.

use crate::{
    SERVER_CONFIG_ENV,
    base_path::{BasePath, resolve_base_path},
    config::{ConfigError, ServerConfig},
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};
use tracing::{info, instrument};

pub const DEFAULT_DIST_DIR: &str = "dist";
const TRUNK: &str = "trunk";

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not run `trunk`, is it installed?")]
    Spawn(#[source] std::io::Error),
    #[error("`trunk build` failed with {status}")]
    TrunkFailed { status: ExitStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Passed to Trunk as `--public-url`.
    pub base: BasePath,
    pub dist_dir: PathBuf,
    pub release: bool,
}

impl BuildConfig {
    pub fn from_server_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        Ok(BuildConfig {
            base: resolve_base_path(config)?,
            dist_dir: PathBuf::from(config.dist_path().unwrap_or(DEFAULT_DIST_DIR)),
            release: true,
        })
    }

    #[must_use]
    pub fn with_dist_dir(mut self, dist_dir: PathBuf) -> Self {
        self.dist_dir = dist_dir;
        self
    }

    #[must_use]
    pub fn with_release(mut self, release: bool) -> Self {
        self.release = release;
        self
    }

    /// Resolves a relative `dist_dir` against `root`.
    #[must_use]
    pub fn anchored_at(mut self, root: &Path) -> Self {
        if self.dist_dir.is_relative() {
            self.dist_dir = root.join(&self.dist_dir);
        }
        self
    }

    #[must_use]
    pub fn trunk_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["build".into()];
        if self.release {
            args.push("--release".into());
        }
        args.push("--public-url".into());
        args.push(self.base.as_str().into());
        args.push("--dist".into());
        args.push(self.dist_dir.clone().into_os_string());
        args
    }

    /// Runs `trunk build` inside `crate_dir`. The web UI build script reads
    /// the same `server_config` through [`SERVER_CONFIG_ENV`].
    #[instrument(skip_all, fields(base = %self.base, dist = ?self.dist_dir))]
    pub fn run_trunk(&self, crate_dir: &Path, server_config: &Path) -> Result<(), BuildError> {
        info!("Building web UI");
        let status = Command::new(TRUNK)
            .args(self.trunk_args())
            .current_dir(crate_dir)
            .env(SERVER_CONFIG_ENV, server_config)
            .status()
            .map_err(BuildError::Spawn)?;
        if !status.success() {
            return Err(BuildError::TrunkFailed { status });
        }
        info!("Web UI written to {:?}", self.dist_dir);
        Ok(())
    }
}
