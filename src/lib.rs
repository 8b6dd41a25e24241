//! API Fetch Hub
//!
//! Card-grid viewer for the posts, users and todos of a demo REST API.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod controller;
pub mod dom;
pub mod error;
pub mod models;
pub mod render;
pub mod store;

pub use app::App;
