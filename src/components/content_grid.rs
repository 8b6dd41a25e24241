//! Content Grid Component
//!
//! Hosts the rendered cards (or error panel) as raw HTML. Clicks on the
//! error panel's retry control are caught here by delegation.

use leptos::prelude::*;

use crate::context::use_hub_context;
use crate::dom::closest_attribute;
use crate::store::use_app_store;

#[component]
pub fn ContentGrid() -> impl IntoView {
    let ctx = use_hub_context();
    let store = use_app_store();
    let content = Memo::new(move |_| store.with(|s| s.content.clone()));

    let on_click = move |ev: web_sys::MouseEvent| {
        if closest_attribute(&ev, "data-action").as_deref() == Some("retry") {
            ctx.refresh();
        }
    };

    view! {
        <div id="content" class="content-grid" on:click=on_click inner_html=move || content.get()></div>
    }
}
