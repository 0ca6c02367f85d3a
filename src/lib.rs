// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod logging;
pub mod presentation;
pub mod shell;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
