//! Loading Overlay Component

use leptos::prelude::*;

use crate::store::use_app_store;

/// Full-screen spinner, shown while any fetch is in flight
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let store = use_app_store();
    let display = move || if store.with(|s| s.is_loading()) { "flex" } else { "none" };

    view! {
        <div id="loadingScreen" class="loading-screen" style:display=display>
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
