//! Landing page for the Society of Engineering Students at JKUAT.

use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

pub mod config;
pub mod content;
pub mod dom;
pub mod forms;
pub mod viewport;
pub mod components {
    pub mod cursor;
    pub mod footer;
    pub mod nav;
    pub mod page_section;
    pub mod reveal;
    pub mod splash;
    pub mod viewport_provider;
}
pub mod pages {
    pub mod home;
    pub mod landing;
    pub mod not_found;
    pub mod sections {
        pub mod about;
        pub mod contact;
        pub mod events;
        pub mod hero;
        pub mod join;
        pub mod members;
        pub mod objectives;
        pub mod projects;
        pub mod stats;
    }
}

use pages::{home::Home, not_found::NotFound};

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
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
