//! improve-cli library root.
//!
//! Terminal front end for the IMPROVE score. Modules are public so the
//! integration tests can drive sessions and rendering without a terminal.

pub mod commands;
pub mod config;
pub mod render;
pub mod session;
