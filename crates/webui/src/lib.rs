pub mod app;
pub mod components;
pub mod routes;

/// Public base path the UI was built for, resolved from `web.path` of the
/// server configuration by the build script.
pub const BASE_PATH: &str = env!("WEBUI_BASE_PATH");
