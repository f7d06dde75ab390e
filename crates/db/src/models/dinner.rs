//! Dinner model and DTOs.

use dinnerlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dinners` table, as stored.
///
/// `ingredients` holds the raw JSON-serialized array text. Convert with
/// [`Dinner::try_from`] to get the wire-shaped entity.
#[derive(Debug, Clone, FromRow)]
pub struct DinnerRow {
    pub id: DbId,
    pub name: String,
    pub ingredients: String,
    pub recipe: String,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire-shaped dinner entity: `ingredients` is the decoded list.
#[derive(Debug, Clone, Serialize)]
pub struct Dinner {
    pub id: DbId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub recipe: String,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<DinnerRow> for Dinner {
    type Error = serde_json::Error;

    /// Decode the stored `ingredients` JSON text into a list of strings.
    ///
    /// Fails only if the column no longer holds a valid JSON array,
    /// which means the row was written outside the API.
    fn try_from(row: DinnerRow) -> Result<Self, Self::Error> {
        let ingredients: Vec<String> = serde_json::from_str(&row.ingredients)?;

        Ok(Self {
            id: row.id,
            name: row.name,
            ingredients,
            recipe: row.recipe,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// DTO for creating or replacing a dinner. POST and PUT share this shape;
/// a PUT overwrites every mutable field.
#[derive(Debug, Deserialize)]
pub struct DinnerInput {
    pub name: String,
    pub ingredients: Vec<String>,
    pub recipe: String,
    pub notes: Option<String>,
}

impl DinnerInput {
    /// Encode the ingredient list to the JSON text stored in the
    /// `ingredients` column.
    pub fn ingredients_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.ingredients)
    }

    /// The notes value to persist: empty string when omitted.
    pub fn notes_or_default(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}
