//! # Materials HTTP Server Module
//!
//! JSON API over the data-access layer, served with Axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/materials`, `/material/:id` - Reads
//! - `/create-material`, `/update-material/:id`, `/delete-material/:id` - Writes

pub mod config;
pub mod errors;
pub mod material_routes;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use material_routes::{material_routes, AppState};
pub use response::{HealthResponse, MessageResponse};
pub use server::HttpServer;
