use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod stories;
mod motion {
    pub mod audio;
    pub mod hero_sequencer;
    pub mod menu;
    pub mod nav_chrome;
    pub mod nav_visibility;
    pub mod reveal;
    pub mod scrub;
    pub mod tween;
}
mod components {
    pub mod button;
    pub mod hero;
    pub mod navbar;
    pub mod top_stories;
}
mod pages {
    pub mod home;
    pub mod sections;
}

use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
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

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
