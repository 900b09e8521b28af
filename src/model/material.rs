//! Material record and request bodies

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::errors::{ValidationError, ValidationResult};

/// A persisted inventory material.
///
/// Timestamps mirror the nullable `timestamp` columns of the table and
/// serialize as ISO-8601 strings or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Material {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Assignable material fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialField {
    Name,
    Description,
}

impl MaterialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialField::Name => "name",
            MaterialField::Description => "description",
        }
    }
}

impl fmt::Display for MaterialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw create body as received on the wire.
///
/// Both fields are optional here so that a missing field surfaces as a
/// [`ValidationError`] instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMaterial {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewMaterial {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Check required fields and produce an insertable draft
    pub fn validate(self) -> ValidationResult<MaterialDraft> {
        let name = required(self.name, MaterialField::Name)?;
        let description = required(self.description, MaterialField::Description)?;
        Ok(MaterialDraft { name, description })
    }
}

/// A validated create request, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialDraft {
    pub name: String,
    pub description: String,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MaterialPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no assignable field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Reject an empty patch or a present-but-blank field
    pub fn validate(self) -> ValidationResult<Self> {
        if self.is_empty() {
            return Err(ValidationError::NoFields);
        }
        let name = optional(self.name, MaterialField::Name)?;
        let description = optional(self.description, MaterialField::Description)?;
        Ok(Self { name, description })
    }

    /// Apply the patch to a record in place. Timestamps are left to the store.
    pub fn apply_to(&self, material: &mut Material) {
        if let Some(name) = &self.name {
            material.name = name.clone();
        }
        if let Some(description) = &self.description {
            material.description = description.clone();
        }
    }
}

fn required(value: Option<String>, field: MaterialField) -> ValidationResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::Required(field)),
    }
}

fn optional(value: Option<String>, field: MaterialField) -> ValidationResult<Option<String>> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ValidationError::Blank(field)),
        other => Ok(other),
    }
}
