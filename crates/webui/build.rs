use anyhow::{Context, Result};
use hanabi_webui_builder::{
    ServerConfig, locate_server_config, resolve_base_path, write_cargo_directives,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let config_path = locate_server_config(&manifest_dir)?;
    let config = ServerConfig::load(&config_path)
        .with_context(|| format!("cannot load server configuration {config_path:?}"))?;
    let base = resolve_base_path(&config)
        .with_context(|| format!("cannot resolve the web UI base path from {config_path:?}"))?;
    write_cargo_directives(&mut std::io::stdout().lock(), &config_path, &base)?;
    Ok(())
}
