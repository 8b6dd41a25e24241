//! Global Application State Store
//!
//! One `AppState` per page session, held in a Leptos `RwSignal` and shared
//! through context. The controller reaches it through [`StateHandle`] so the
//! same load logic also runs headless.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::error::FetchFailure;
use crate::models::{ItemCollection, Tab};
use crate::render;

/// Identifies one load request; only the newest ticket per tab may land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub tab: Tab,
    generation: u64,
}

/// Visible state of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle(Tab),
    Loading(Tab),
}

/// Page-wide state: active tab, cached collections, rendered content
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Tab whose selector is highlighted
    pub current_tab: Tab,
    /// HTML assigned to the content container
    pub content: String,
    data: [ItemCollection; 3],
    /// Fetches currently in flight; indicator shows while non-zero
    in_flight: u32,
    /// Startup count in `in_flight`, taken over by the first fetch
    startup_pending: bool,
    generations: [u64; 3],
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Starts in `Loading(Posts)`: the page shows the indicator before the
    /// initial fetch is issued.
    pub fn new() -> Self {
        Self {
            current_tab: Tab::default(),
            content: String::new(),
            data: Tab::ALL.map(ItemCollection::empty),
            in_flight: 1,
            startup_pending: true,
            generations: [0; 3],
        }
    }

    /// Last collection stored for `tab`
    pub fn items(&self, tab: Tab) -> &ItemCollection {
        &self.data[tab.index()]
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.current_tab == tab
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            Phase::Loading(self.current_tab)
        } else {
            Phase::Idle(self.current_tab)
        }
    }

    pub fn clear_content(&mut self) {
        self.content.clear();
    }

    /// Make `tab` current and issue a ticket that supersedes earlier ones for it
    pub fn begin_load(&mut self, tab: Tab) -> LoadTicket {
        self.current_tab = tab;
        let generation = &mut self.generations[tab.index()];
        *generation += 1;
        LoadTicket { tab, generation: *generation }
    }

    pub fn is_latest(&self, ticket: &LoadTicket) -> bool {
        self.generations[ticket.tab.index()] == ticket.generation
    }

    /// Apply a finished fetch. Returns `false` if the ticket was stale and the
    /// outcome was dropped.
    ///
    /// The collection is always stored for its tab; the content area only
    /// changes when that tab is still current.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<ItemCollection, FetchFailure>,
    ) -> bool {
        if !self.is_latest(&ticket) {
            log::debug!(
                "Discarding stale {} response (generation {})",
                ticket.tab,
                ticket.generation
            );
            return false;
        }

        let visible = self.is_active(ticket.tab);
        match outcome {
            Ok(items) if items.tab() == ticket.tab => {
                self.data[ticket.tab.index()] = items;
                if visible {
                    self.content = self.render(ticket.tab);
                }
            }
            Ok(items) => {
                log::warn!("Got {} items for the {} tab, ignoring", items.tab(), ticket.tab);
            }
            Err(err) => {
                self.data[ticket.tab.index()] = ItemCollection::empty(ticket.tab);
                if visible {
                    self.show_error(&err.to_string());
                }
            }
        }
        true
    }

    /// Cards for `tab` from its stored collection
    pub fn render(&self, tab: Tab) -> String {
        render::render_collection(self.items(tab))
    }

    pub fn show_error(&mut self, message: &str) {
        self.content = render::error_panel(message);
    }

    pub(crate) fn enter_loading(&mut self) {
        if self.startup_pending {
            self.startup_pending = false;
        } else {
            self.in_flight += 1;
        }
    }

    pub(crate) fn leave_loading(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// Shared access to the single `AppState`.
///
/// Both methods return `None` once the state is gone (the page was torn down).
pub trait StateHandle {
    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R>;
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R>;
}

impl StateHandle for RwSignal<AppState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// Plain shared cell, for driving the controller without a reactive runtime
impl StateHandle for Rc<RefCell<AppState>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        Some(f(&mut RefCell::borrow_mut(self)))
    }

    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        Some(f(&RefCell::borrow(self)))
    }
}

/// Type alias for the store
pub type AppStore = RwSignal<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
