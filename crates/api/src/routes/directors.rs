//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::directors;
use crate::state::AppState;

/// Routes mounted at `/directors`.
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
    Router::new().route("/", get(directors::list).post(directors::create))
}

/// `{get, replace, delete}` on the item path.
fn item_routes() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(directors::get_by_id)
            .put(directors::replace)
            .delete(directors::delete),
    )
}
