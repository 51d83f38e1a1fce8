// Library exports for testing and external use
pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod ui;
