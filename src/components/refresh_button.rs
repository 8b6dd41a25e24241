//! Refresh Button Component

use leptos::prelude::*;

use crate::context::use_hub_context;

/// Reloads the current tab
#[component]
pub fn RefreshButton() -> impl IntoView {
    let ctx = use_hub_context();

    view! {
        <button id="refreshBtn" class="refresh-btn" on:click=move |_| ctx.refresh()>
            "🔄 Refresh"
        </button>
    }
}
