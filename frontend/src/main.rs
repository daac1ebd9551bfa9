use yew::prelude::*;

mod config;
mod contact {
    pub mod form;
    pub mod schema;
}
mod gallery {
    pub mod modal;
    pub mod state;
    pub mod viewport;
}
mod components {
    pub mod about;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component(App)]
fn app() -> Html {
    html! { <Home /> }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
