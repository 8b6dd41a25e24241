//! Application Context
//!
//! Activation handlers bound once at mount and shared via Leptos Context API.

use leptos::prelude::*;

use crate::models::Tab;

/// Callbacks wired to the view controller
#[derive(Clone, Copy)]
pub struct HubContext {
    switch_tab: Callback<Tab>,
    refresh: Callback<()>,
}

impl HubContext {
    pub fn new(switch_tab: Callback<Tab>, refresh: Callback<()>) -> Self {
        Self { switch_tab, refresh }
    }

    /// Clear the grid and load `tab`
    pub fn switch_tab(&self, tab: Tab) {
        self.switch_tab.run(tab);
    }

    /// Reload the current tab (refresh button and "Try Again")
    pub fn refresh(&self) {
        self.refresh.run(());
    }
}

/// Get the hub context
pub fn use_hub_context() -> HubContext {
    use_context::<HubContext>().expect("HubContext should be provided")
}
