//! Bazaar admin - pagination core for a marketplace admin console
//!
//! This library provides the page-window computation behind every list screen
//! of the console, the typed client store those screens read from, and a small
//! HTTP API exposing the window computation.

pub mod api;
pub mod config;
pub mod models;
pub mod pagination;
pub mod services;
pub mod store;
