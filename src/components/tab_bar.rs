//! Tab Bar Component
//!
//! One selector per tab. A single delegated click handler reads the
//! selector's `data-tab` attribute and switches to that tab.

use leptos::prelude::*;

use crate::context::use_hub_context;
use crate::dom::closest_attribute;
use crate::models::Tab;
use crate::store::use_app_store;

/// CSS class of `tab`'s selector; only the current tab's carries `active`
fn selector_class(tab: Tab, current: Tab) -> &'static str {
    if tab == current {
        "tab-btn active"
    } else {
        "tab-btn"
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_hub_context();
    let store = use_app_store();
    let current = Memo::new(move |_| store.with(|s| s.current_tab));

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(id) = closest_attribute(&ev, "data-tab") else {
            return;
        };
        match id.parse::<Tab>() {
            Ok(tab) => ctx.switch_tab(tab),
            Err(err) => log::warn!("Ignoring tab click: {}", err),
        }
    };

    view! {
        <nav class="tabs" on:click=on_click>
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || selector_class(tab, current.get())
                            data-tab=tab.endpoint()
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
