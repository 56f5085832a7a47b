//! Route definitions for the `/movies` resource.
//!
//! The collection path and the item path get separate routers so each
//! carries exactly one capability set.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
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
    Router::new().route("/", get(movies::list).post(movies::create))
}

/// `{get, replace, delete}` on the item path.
fn item_routes() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(movies::get_by_id)
            .put(movies::replace)
            .delete(movies::delete),
    )
}
