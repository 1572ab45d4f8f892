use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location().map(|location| location.path().to_string());
    html! {
        <section class="not-found">
            <h1>{"Not found"}</h1>
            if let Some(path) = path {
                <p>{format!("Nothing is served at '{path}'")}</p>
            }
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
        </section>
    }
}
