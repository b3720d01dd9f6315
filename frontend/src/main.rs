use yew::prelude::*;
use log::info;

mod config;
mod content;
mod countdown;
mod reveal;
mod components {
    pub mod accordion;
    pub mod animated_section;
    pub mod countdown_timer;
    pub mod cta;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use pages::landing::LandingPage;

#[function_component]
fn App() -> Html {
    html! {
        <LandingPage />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
