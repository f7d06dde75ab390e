pub mod dinners;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dinners            list all dinners
/// /random_dinners     five random dinners (400 when fewer than five exist)
/// /dinner             create (POST)
/// /dinner/{id}        get, replace (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(dinners::router())
}
