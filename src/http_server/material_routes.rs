//! Material HTTP Routes
//!
//! The five material endpoints. Each handler validates input, makes one
//! store call and maps the outcome to a response.
//!
//! | Method | Path                    | Success |
//! |--------|-------------------------|---------|
//! | GET    | `/materials`            | 200     |
//! | GET    | `/material/:id`         | 200     |
//! | POST   | `/create-material`      | 201     |
//! | PUT    | `/update-material/:id`  | 200     |
//! | DELETE | `/delete-material/:id`  | 200     |

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;
use tracing::info;

use crate::model::{Material, MaterialPatch, NewMaterial, ValidationError};
use crate::store::MaterialStore;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

// ==================
// Shared State
// ==================

/// State shared across material handlers
pub struct AppState<S: MaterialStore> {
    pub store: S,
}

impl<S: MaterialStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

type SharedState<S> = Arc<AppState<S>>;

// ==================
// Material Routes
// ==================

/// Create material routes
pub fn material_routes<S: MaterialStore + 'static>(state: SharedState<S>) -> Router {
    Router::new()
        .route("/materials", get(list_handler::<S>))
        .route("/material/:id", get(get_handler::<S>))
        .route("/create-material", post(create_handler::<S>))
        .route("/update-material/:id", put(update_handler::<S>))
        .route("/delete-material/:id", delete(delete_handler::<S>))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_handler<S: MaterialStore>(
    State(state): State<SharedState<S>>,
) -> ApiResult<Json<Vec<Material>>> {
    let materials = state.store.list().await?;
    Ok(Json(materials))
}

async fn get_handler<S: MaterialStore>(
    State(state): State<SharedState<S>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Material>> {
    let Path(id) = id?;
    let material = state.store.get(id).await?;
    Ok(Json(material))
}

async fn create_handler<S: MaterialStore>(
    State(state): State<SharedState<S>>,
    body: Result<Json<NewMaterial>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Material>)> {
    let Json(body) = body?;
    let draft = body.validate()?;

    let material = state.store.create(draft).await?;
    info!(id = material.id, "material created");

    Ok((StatusCode::CREATED, Json(material)))
}

async fn update_handler<S: MaterialStore>(
    State(state): State<SharedState<S>>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Material>> {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch = patch_from_body(body)?;

    let material = state.store.update(id, patch).await?;
    info!(id, "material updated");

    Ok(Json(material))
}

/// An empty object is rejected here. Any other object goes to the store,
/// which reports a missing id before an unusable patch.
fn patch_from_body(body: Value) -> ApiResult<MaterialPatch> {
    match body.as_object() {
        None => {
            return Err(ApiError::InvalidBody(
                "Expected a JSON object".to_string(),
            ))
        }
        Some(fields) if fields.is_empty() => return Err(ValidationError::NoFields.into()),
        Some(_) => {}
    }
    serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

async fn delete_handler<S: MaterialStore>(
    State(state): State<SharedState<S>>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    info!(id, "material deleted");

    Ok(Json(MessageResponse::deleted(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryMaterialStore;

    #[test]
    fn test_patch_from_body() {
        use serde_json::json;

        assert!(matches!(
            patch_from_body(json!({})),
            Err(ApiError::Validation(ValidationError::NoFields))
        ));
        assert!(matches!(
            patch_from_body(json!(["name"])),
            Err(ApiError::InvalidBody(_))
        ));
        assert!(matches!(
            patch_from_body(json!({"name": 5})),
            Err(ApiError::InvalidBody(_))
        ));

        let unknown_only = patch_from_body(json!({"nome": "x"})).unwrap();
        assert!(unknown_only.is_empty());

        let patch = patch_from_body(json!({"description": "zincado"})).unwrap();
        assert_eq!(patch, MaterialPatch::default().description("zincado"));
    }

    #[test]
    fn test_routes_build() {
        let state = Arc::new(AppState::new(MemoryMaterialStore::new()));
        let _router = material_routes(state);
    }
}
