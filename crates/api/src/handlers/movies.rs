//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use filmoteka_core::types::DbId;
use filmoteka_db::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie};
use filmoteka_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /movies/
///
/// List movies, optionally filtered by `?director_id=` and/or `?genre_id=`.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool, &filter).await?;
    Ok(Json(movies))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, "Movie created");

    Ok((StatusCode::CREATED, Json("Фильм добавлен")))
}

/// GET /movies/{id}
///
/// Clients expect an array even for a single row, so the one result is
/// wrapped in a one-element sequence.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("фильма", id))?;
    Ok(Json(vec![movie]))
}

/// PUT /movies/{id}
///
/// Full replace: every field is required and overwritten. The row's
/// `id` is immutable regardless of the request body.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<&'static str>> {
    MovieRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("фильма", id))?;

    tracing::info!(movie_id = id, "Movie replaced");

    Ok(Json("Фильм заменен"))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<&'static str>> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found("фильма", id));
    }

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(Json("Фильм удален из базы"))
}
