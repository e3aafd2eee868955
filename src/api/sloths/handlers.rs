use crate::api::models::*;
use crate::storage::Sloth;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

pub async fn list_sloths_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Sloth>>, AppError> {
    let sloths = state.store.list().await?;
    Ok(Json(sloths))
}

pub async fn get_sloth_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Sloth>, AppError> {
    let sloth = state.store.find(id).await?.ok_or(AppError::NotFound(id))?;
    Ok(Json(sloth))
}

pub async fn create_sloth_handler(
    State(state): State<AppState>,
    Json(body): Json<SlothEnvelope>,
) -> Result<Json<Vec<Sloth>>, AppError> {
    let created = state.store.insert(&body.sloth).await?;

    info!(id = created.id, "Sloth created");

    Ok(Json(vec![created]))
}

pub async fn update_sloth_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SlothEnvelope>,
) -> Result<Json<Vec<Sloth>>, AppError> {
    // An update with no fields is rejected at call time, like the query
    // builder it replaces.
    if body.sloth.is_empty() {
        return Err(AppError::BadRequest("Empty update call detected".to_string()));
    }

    let updated = state
        .store
        .update(id, &body.sloth)
        .await?
        .ok_or(AppError::NotFound(id))?;

    info!(id, "Sloth updated");

    Ok(Json(vec![updated]))
}

pub async fn delete_sloth_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Sloth>>, AppError> {
    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or(AppError::NotFound(id))?;

    info!(id, "Sloth deleted");

    Ok(Json(vec![deleted]))
}
