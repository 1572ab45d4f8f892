use hanabi_webui::{
    BASE_PATH,
    app::{App, AppProps, create_router},
};

fn main() {
    init_logging();
    log::debug!("Mounting web UI under `{BASE_PATH}`");
    yew::Renderer::<App>::with_props(AppProps {
        router: create_router(BASE_PATH),
    })
    .render();
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
