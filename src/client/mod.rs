//! # Materials Form Client
//!
//! Terminal front end for the materials API with three screens:
//!
//! - **List**: table of all materials, edit/delete per row
//! - **Create**: form for a new material, validated before sending
//! - **Edit**: form preloaded with an existing material
//!
//! Every user action is at most one blocking HTTP call. Failures are shown
//! as dialogs and never retried.

pub mod api;
pub mod app;
pub mod config;
pub mod console;
pub mod errors;
pub mod messages;
pub mod placeholder;
pub mod screens;

pub use api::{HttpMaterialsClient, MaterialsApi};
pub use app::FormApp;
pub use config::ClientConfig;
pub use console::{Console, DialogKind, TerminalConsole};
pub use errors::{ClientError, ClientResult};
pub use screens::Screen;
