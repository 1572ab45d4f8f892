//! Declared routes of the web UI.
//!
//! [`ROUTE_TABLE`] is the only place paths are declared. `yew-router` sees it
//! through the [`Routable`] implementation of [`Route`], which matches with
//! [`RouteTable`].

use crate::components::{hanabi_view::HanabiView, home_view::HomeView, not_found::NotFound};
use route_recognizer::Router;
use std::collections::HashMap;
use yew::prelude::*;
use yew_router::Routable;

/// Path of the not-found view. Kept out of [`ROUTE_TABLE`].
pub const NOT_FOUND_PATH: &str = "/404";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Hanabi,
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <HomeView /> },
            Route::Hanabi => html! { <HanabiView /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: Route,
}

/// Declaration order is preserved when handed to the router.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        route: Route::Home,
    },
    RouteEntry {
        path: "/hanabi",
        route: Route::Hanabi,
    },
];

pub trait RouteMatcher {
    /// Returns `None` when no declared route matches `path`.
    fn match_path(&self, path: &str) -> Option<Route>;
}

pub struct RouteTable {
    entries: &'static [RouteEntry],
    recognizer: Router<Route>,
}

impl RouteTable {
    pub fn new(entries: &'static [RouteEntry]) -> Self {
        let mut recognizer = Router::new();
        for entry in entries {
            recognizer.add(entry.path, entry.route);
        }
        Self {
            entries,
            recognizer,
        }
    }

    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    pub fn path_of(&self, route: Route) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.route == route)
            .map(|entry| entry.path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROUTE_TABLE)
    }
}

impl RouteMatcher for RouteTable {
    fn match_path(&self, path: &str) -> Option<Route> {
        self.recognizer
            .recognize(path)
            .ok()
            .map(|matched| **matched.handler())
    }
}

thread_local! {
    static ROUTES: RouteTable = RouteTable::default();
}

impl Routable for Route {
    fn from_path(path: &str, _params: &HashMap<&str, &str>) -> Option<Self> {
        if path == NOT_FOUND_PATH {
            return Some(Route::NotFound);
        }
        ROUTE_TABLE
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.route)
    }

    fn to_path(&self) -> String {
        ROUTES
            .with(|table| table.path_of(*self))
            .unwrap_or(NOT_FOUND_PATH)
            .to_string()
    }

    fn routes() -> Vec<&'static str> {
        ROUTE_TABLE
            .iter()
            .map(|entry| entry.path)
            .chain([NOT_FOUND_PATH])
            .collect()
    }

    fn not_found_route() -> Option<Self> {
        Some(Route::NotFound)
    }

    fn recognize(pathname: &str) -> Option<Self> {
        ROUTES
            .with(|table| table.match_path(pathname))
            .or_else(Self::not_found_route)
    }
}
