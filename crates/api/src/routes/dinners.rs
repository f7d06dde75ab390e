//! Route definitions for the dinner endpoints.
//!
//! ```text
//! GET    /dinners           list_dinners
//! GET    /random_dinners    random_dinners
//! POST   /dinner            create_dinner
//! GET    /dinner/{id}       get_dinner
//! PUT    /dinner/{id}       update_dinner
//! DELETE /dinner/{id}       delete_dinner
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dinners;
use crate::state::AppState;

/// Dinner routes — mounted at `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dinners", get(dinners::list_dinners))
        .route("/random_dinners", get(dinners::random_dinners))
        .route("/dinner", post(dinners::create_dinner))
        .route(
            "/dinner/{id}",
            get(dinners::get_dinner)
                .put(dinners::update_dinner)
                .delete(dinners::delete_dinner),
        )
}
