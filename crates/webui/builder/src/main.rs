use anyhow::{Context, Result};
use clap::Parser;
use hanabi_webui_builder::{BuildConfig, ServerConfig, locate_server_config};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the web UI with Trunk using the base path from the server configuration.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server configuration, `server.json` at the workspace root by default.
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Output directory, overrides `web.dist_path`.
    #[arg(long)]
    dist: Option<PathBuf>,
    /// Build without `--release`.
    #[arg(long)]
    debug: bool,
    /// Print the resolved base path and exit.
    #[arg(long)]
    print_base: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let webui_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("builder must live inside the web UI crate")?;
    let config_path = match cli.config {
        Some(path) => std::path::absolute(path)?,
        None => locate_server_config(webui_dir)?,
    };
    let server_config = ServerConfig::load(&config_path)
        .with_context(|| format!("cannot load server configuration {config_path:?}"))?;
    let mut build = BuildConfig::from_server_config(&server_config)
        .with_context(|| format!("invalid server configuration {config_path:?}"))?
        .with_release(!cli.debug);

    if cli.print_base {
        println!("{}", build.base);
        return Ok(());
    }

    if let Some(dist) = cli.dist {
        build = build.with_dist_dir(std::path::absolute(dist)?);
    }
    let config_dir = config_path
        .parent()
        .context("server configuration path has no parent")?;
    let build = build.anchored_at(config_dir);
    info!("Using base path `{}` from {config_path:?}", build.base);
    build.run_trunk(webui_dir, &config_path)?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
