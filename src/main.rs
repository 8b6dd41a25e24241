//! API Fetch Hub Entry Point

use api_fetch_hub::config::HubConfig;
use api_fetch_hub::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = HubConfig::from_build_env();
    _ = console_log::init_with_level(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
