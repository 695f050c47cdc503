use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod browser;
mod config;
mod error;
mod theme;
mod motion {
    pub mod gate;
    pub mod tilt;
    pub mod title;
    pub mod trail;
}
mod components {
    pub mod animated_title;
    pub mod background;
    pub mod beacon;
    pub mod loading_screen;
    pub mod orb_cursor;
    pub mod platform_card;
    pub mod platform_icons;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};


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
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{theme::global_stylesheet()}</style>
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
