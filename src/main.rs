use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod frame_loop;
mod nav {
    pub mod active_section;
    pub mod clipboard;
    pub mod cursor;
    pub mod header;
    pub mod menu;
}
mod animation {
    pub mod animator;
    pub mod hover;
    pub mod reveal;
    pub mod tween;
}
mod scene {
    pub mod space;
    pub mod three;
    pub mod timeline;
}
mod components {
    pub mod copy_email;
    pub mod cursor;
    pub mod header;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq, Debug)]
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
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
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

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
