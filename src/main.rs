use yew::prelude::*;
use log::info;

mod api;
mod config;
mod models;
mod query;
mod state;
mod theme;
mod components {
    pub mod booking_form;
    pub mod doctor_list;
    pub mod error_message;
    pub mod nav;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! { <Home /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
