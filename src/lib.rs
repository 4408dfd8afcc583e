//! Core library for the `loadshot` CLI.
//!
//! A run sends one HTTP request described by a JSON file (the baseline) and,
//! when asked for more than one iteration, launches that many concurrent
//! copies of it while a progress task tracks how much of the configured
//! duration has elapsed. The pieces are usable on their own: [`http`] builds
//! and sends requests, [`load`] coordinates the concurrent phase, and
//! [`config`] turns a file into a [`http::RequestSpec`].
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod load;
pub mod logger;
pub mod shutdown;
