//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use filmoteka_core::types::DbId;
use filmoteka_db::models::director::{CreateDirector, Director, UpdateDirector};
use filmoteka_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// POST /directors/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDirector>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let director = DirectorRepo::create(&state.pool, &input).await?;

    tracing::info!(director_id = director.id, "Director created");

    Ok((StatusCode::CREATED, Json("Режиссер добавлен")))
}

/// GET /directors/{id}
///
/// Returns a one-element array, matching the collection encoding.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Director>>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("режиссера", id))?;
    Ok(Json(vec![director]))
}

/// PUT /directors/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDirector>,
) -> AppResult<Json<&'static str>> {
    DirectorRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("режиссера", id))?;

    tracing::info!(director_id = id, "Director replaced");

    Ok(Json("Режиссер заменен"))
}

/// DELETE /directors/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<&'static str>> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found("режиссера", id));
    }

    tracing::info!(director_id = id, "Director deleted");

    Ok(Json("Режиссер удален из базы"))
}
