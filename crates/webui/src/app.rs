use crate::routes::{ROUTE_TABLE, Route, RouteEntry};
use yew::prelude::*;
use yew_router::prelude::*;

/// How the current route is reflected in the address bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// `history.pushState`, requires the server to fall back to `index.html`.
    #[default]
    Browser,
    /// `#/path` fragments.
    Hash,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouterConfig {
    pub routes: &'static [RouteEntry],
    pub history: HistoryMode,
    pub basename: Option<AttrValue>,
}

/// Router of the web UI: the declared routes with browser history, mounted
/// under `base_path`.
pub fn create_router(base_path: &str) -> RouterConfig {
    RouterConfig {
        routes: ROUTE_TABLE,
        history: HistoryMode::Browser,
        basename: router_basename(base_path),
    }
}

// yew-router expects the basename without the trailing slash, the root has none.
fn router_basename(base_path: &str) -> Option<AttrValue> {
    let basename = base_path.trim_end_matches('/');
    if basename.is_empty() {
        None
    } else {
        Some(AttrValue::from(basename.to_string()))
    }
}

#[derive(PartialEq, Properties)]
pub struct AppRouterProps {
    pub config: RouterConfig,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AppRouter)]
pub fn app_router(AppRouterProps { config, children }: &AppRouterProps) -> Html {
    let basename = config.basename.clone();
    match config.history {
        HistoryMode::Browser => html! {
            <BrowserRouter {basename}>{children.clone()}</BrowserRouter>
        },
        HistoryMode::Hash => html! {
            <HashRouter {basename}>{children.clone()}</HashRouter>
        },
    }
}

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub router: RouterConfig,
}

#[function_component(App)]
pub fn app(AppProps { router }: &AppProps) -> Html {
    html! {
        <div class="container">
            <AppRouter config={router.clone()}>
                <nav>
                    <Link<Route> to={Route::Home}>
                        {"Home"}
                    </Link<Route>>
                    {" "}
                    <Link<Route> to={Route::Hanabi}>
                        {"Hanabi"}
                    </Link<Route>>
                </nav>
                <Switch<Route> render={Route::render} />
            </AppRouter>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn router_uses_browser_history_and_the_route_table() {
        let router = create_router("/");
        assert_eq!(HistoryMode::Browser, router.history);
        assert_eq!(ROUTE_TABLE, router.routes);
    }

    #[rstest]
    #[case("/", None)]
    #[case("", None)]
    #[case("/app/", Some("/app"))]
    #[case("/app", Some("/app"))]
    #[case("/nested/web/", Some("/nested/web"))]
    fn basename_from_base_path(#[case] base_path: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            expected,
            create_router(base_path).basename.as_deref()
        );
    }
}
