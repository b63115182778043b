//! Rusty Dash: a desktop dashboard that previews, summarises and plots
//! uploaded CSV files.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
