//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use filmoteka_core::types::DbId;
use filmoteka_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use filmoteka_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// POST /genres/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let genre = GenreRepo::create(&state.pool, &input).await?;

    tracing::info!(genre_id = genre.id, "Genre created");

    Ok((StatusCode::CREATED, Json("Жанр добавлен")))
}

/// GET /genres/{id}
///
/// Returns a one-element array, matching the collection encoding.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Genre>>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("жанра", id))?;
    Ok(Json(vec![genre]))
}

/// PUT /genres/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<Json<&'static str>> {
    GenreRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("жанра", id))?;

    tracing::info!(genre_id = id, "Genre replaced");

    Ok(Json("Жанр заменен"))
}

/// DELETE /genres/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<&'static str>> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found("жанра", id));
    }

    tracing::info!(genre_id = id, "Genre deleted");

    Ok(Json("Жанр удален из базы"))
}
