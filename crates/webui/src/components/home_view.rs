use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    html! {
        <section class="home">
            <h1>{"Gate"}</h1>
            <p>{"The gate server is running."}</p>
            <Link<Route> to={Route::Hanabi}>{"Launch hanabi"}</Link<Route>>
        </section>
    }
}
