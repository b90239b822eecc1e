use crate::api::error::ApiError;
use crate::api::AppState;
use crate::domain::model::Pokemon;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn get_by(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, ApiError> {
    let pokemon = state
        .pokemon
        .get_by(&name)
        .await
        .map_err(|e| ApiError::from_lookup(&name, e))?;
    Ok(Json(pokemon))
}

pub async fn get_by_translated(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, ApiError> {
    let pokemon = state
        .pokemon
        .get_by_translated(&name)
        .await
        .map_err(|e| ApiError::from_service(&name, e))?;
    Ok(Json(pokemon))
}
