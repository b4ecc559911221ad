use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                        padding: 0 1.5rem;
                    }
                    .not-found h1 { font-size: 4rem; margin: 0; }
                    .not-found a { color: #ffb347; }
                "#}
            </style>
            <h1>{"🌾"}</h1>
            <h2>{"This field hasn't been planted yet."}</h2>
            <Link<Route> to={Route::Home}>{"Back to the start of the story"}</Link<Route>>
        </div>
    }
}
