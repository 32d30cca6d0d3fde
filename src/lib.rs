//! Campsite directory TUI library
//!
//! Exposes modules for testing

pub mod api;
pub mod cache;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod messages;
pub mod model;
pub mod services;
pub mod ui;
pub mod update;
pub mod utils;
