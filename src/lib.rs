// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_message;
pub mod chat_view;
pub mod config;
pub mod errors;
pub mod events;
pub mod key_handlers;
pub mod logging;
pub mod poller;
pub mod status_indicator;
pub mod transcript;
pub mod ui;
