//! Handlers for dinner CRUD and random sampling.
//!
//! The `ingredients` column stores JSON text; encoding happens here on
//! the way in ([`DinnerInput::ingredients_json`]) and decoding on the
//! way out (`Dinner::try_from`), so repositories only ever see the raw
//! column value.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use dinnerlog_core::error::CoreError;
use dinnerlog_core::types::DbId;
use dinnerlog_db::models::dinner::{Dinner, DinnerInput, DinnerRow};
use dinnerlog_db::repositories::DinnerRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Number of dinners returned by the random sample endpoint.
const SAMPLE_SIZE: i64 = 5;

/// Decode a batch of rows into wire-shaped dinners.
fn decode_rows(rows: Vec<DinnerRow>) -> Result<Vec<Dinner>, serde_json::Error> {
    rows.into_iter().map(Dinner::try_from).collect()
}

/// GET /api/dinners
///
/// List all dinners.
pub async fn list_dinners(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = DinnerRepo::list_all(&state.pool).await?;
    let dinners = decode_rows(rows)?;

    Ok(Json(dinners))
}

/// GET /api/random_dinners
///
/// A uniform random selection of five distinct dinners. Fails with 400
/// when the table holds fewer than five.
pub async fn random_dinners(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let available = DinnerRepo::count(&state.pool).await?;
    if available < SAMPLE_SIZE {
        return Err(AppError::Core(CoreError::InsufficientData {
            needed: SAMPLE_SIZE,
            available,
        }));
    }

    let rows = DinnerRepo::sample(&state.pool, SAMPLE_SIZE).await?;
    let dinners = decode_rows(rows)?;

    Ok(Json(dinners))
}

/// GET /api/dinner/{id}
///
/// Fetch a single dinner by id.
pub async fn get_dinner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = DinnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dinner",
            id,
        }))?;

    Ok(Json(Dinner::try_from(row)?))
}

/// POST /api/dinner
///
/// Create a dinner; storage assigns the id.
pub async fn create_dinner(
    State(state): State<AppState>,
    Json(input): Json<DinnerInput>,
) -> AppResult<impl IntoResponse> {
    let ingredients_json = input.ingredients_json()?;

    let row = DinnerRepo::create(
        &state.pool,
        &input.name,
        &ingredients_json,
        &input.recipe,
        input.notes_or_default(),
    )
    .await?;

    let dinner = Dinner::try_from(row)?;

    tracing::info!(dinner_id = dinner.id, name = %dinner.name, "Dinner created");

    Ok((StatusCode::CREATED, Json(dinner)))
}

/// PUT /api/dinner/{id}
///
/// Overwrite all mutable fields of a dinner. No partial update.
pub async fn update_dinner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DinnerInput>,
) -> AppResult<impl IntoResponse> {
    let ingredients_json = input.ingredients_json()?;

    let row = DinnerRepo::replace(
        &state.pool,
        id,
        &input.name,
        &ingredients_json,
        &input.recipe,
        input.notes_or_default(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Dinner",
        id,
    }))?;

    tracing::info!(dinner_id = id, "Dinner replaced");

    Ok(Json(Dinner::try_from(row)?))
}

/// DELETE /api/dinner/{id}
///
/// Delete a dinner and return a confirmation message.
pub async fn delete_dinner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DinnerRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Dinner",
            id,
        }));
    }

    tracing::info!(dinner_id = id, "Dinner deleted");

    Ok(Json(MessageResponse {
        message: "Dinner deleted successfully",
    }))
}
