//! API Fetch Hub App
//!
//! Builds the store and controller, binds activation handlers, then loads
//! the default tab.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpSource;
use crate::components::{ContentGrid, LoadingOverlay, RefreshButton, TabBar};
use crate::config::HubConfig;
use crate::context::HubContext;
use crate::controller::ViewController;
use crate::models::Tab;
use crate::store::{AppState, AppStore};

#[component]
pub fn App(config: HubConfig) -> impl IntoView {
    // State
    let store: AppStore = RwSignal::new(AppState::new());
    provide_context(store);

    let controller = ViewController::new(store, HttpSource::new(config));

    // Bind activation handlers once
    let switch_tab = {
        let controller = controller.clone();
        Callback::new(move |tab: Tab| {
            let controller = controller.clone();
            spawn_local(async move { controller.switch_tab(tab).await });
        })
    };
    let refresh = {
        let controller = controller.clone();
        Callback::new(move |_: ()| {
            let controller = controller.clone();
            spawn_local(async move { controller.refresh().await });
        })
    };
    provide_context(HubContext::new(switch_tab, refresh));

    // Load the default tab on mount
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move { controller.initialize().await });
    });

    view! {
        <div class="container">
            <header class="header">
                <h1>"🌐 API Fetch Hub"</h1>
                <p>"Posts, users and todos from JSONPlaceholder"</p>
            </header>

            <div class="controls">
                <TabBar />
                <RefreshButton />
            </div>

            <ContentGrid />
            <LoadingOverlay />
        </div>
    }
}
