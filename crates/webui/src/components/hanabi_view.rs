use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const SHELLS: [&str; 5] = ["#ff5c8a", "#ffd166", "#06d6a0", "#4cc9f0", "#b388ff"];

#[function_component(HanabiView)]
pub fn hanabi_view() -> Html {
    let shells = SHELLS
        .iter()
        .enumerate()
        .map(|(idx, color)| {
            let style = format!("background: {color}; animation-delay: {}ms;", idx * 300);
            html! { <span class="shell" style={style}></span> }
        })
        .collect::<Html>();
    html! {
        <section class="hanabi">
            <h1>{"Hanabi"}</h1>
            <div class="sky">{shells}</div>
            <Link<Route> to={Route::Home}>{"Back"}</Link<Route>>
        </section>
    }
}
