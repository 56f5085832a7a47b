//! Route definitions for the `/genres` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Routes mounted at `/genres`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    collection_routes().merge(item_routes())
}

/// `{list, create}` on the collection path.
fn collection_routes() -> Router<AppState> {
    Router::new().route("/", get(genres::list).post(genres::create))
}

/// `{get, replace, delete}` on the item path.
fn item_routes() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(genres::get_by_id)
            .put(genres::replace)
            .delete(genres::delete),
    )
}
