//! Regional food-commodity price dashboard.
//!
//! The [`data`] module holds the load → normalize → filter → aggregate
//! pipeline; [`state`] wraps it for interactive use and [`app`] renders it
//! with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod state;
pub mod ui;
