pub mod api;
pub mod board;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod reveal;
pub mod session;
pub mod state;
pub mod tui;
pub mod ui;
