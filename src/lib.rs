//! materials - inventory record manager
//!
//! A JSON API over a single PostgreSQL table of materials, and a terminal
//! form client that consumes it.

pub mod cli;
pub mod client;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod settings;
pub mod store;
