//! # Material Model
//!
//! The single domain record of the system and the request shapes that
//! create or modify it.
//!
//! - [`Material`] is a persisted row
//! - [`NewMaterial`] is a raw create body, validated into a [`MaterialDraft`]
//! - [`MaterialPatch`] is a partial update carrying optional fields

mod errors;
mod material;

pub use errors::{ValidationError, ValidationResult};
pub use material::{Material, MaterialDraft, MaterialField, MaterialPatch, NewMaterial};
