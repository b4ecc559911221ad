use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod hooks;
mod motion {
    pub mod broadcast;
    pub mod color;
    pub mod easing;
    pub mod loader;
    pub mod pin;
    pub mod progress;
    pub mod reveal;
    pub mod tracker;
    pub mod typewriter;
}
mod components {
    pub mod loading_screen;
    pub mod navigation;
    pub mod notification;
    pub mod pinned_panel;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod strength_rings;
}
mod sections {
    pub mod achievements;
    pub mod chapter_one;
    pub mod chapters;
    pub mod contact;
    pub mod hero;
    pub mod projects;
    pub mod recovery;
    pub mod skills;
}
mod pages {
    pub mod not_found;
    pub mod portfolio;
}

use pages::{not_found::NotFound, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering portfolio");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
