//! UI Components
//!
//! Leptos components making up the widget.

mod tab_bar;
mod refresh_button;
mod content_grid;
mod loading_overlay;

pub use tab_bar::TabBar;
pub use refresh_button::RefreshButton;
pub use content_grid::ContentGrid;
pub use loading_overlay::LoadingOverlay;
