//! Database operations for places
//!
//! Well-known fields live in their own columns; every other submitted key is
//! stored in the `extra` column as a JSON object.

use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::shared::{Place, PlaceFields};

const PLACE_COLUMNS: &str =
    "place_id, name, pic, cuisines, city, state, founded, extra, created_at, updated_at";

/// Serialize the catch-all fields for the `extra` column
pub(crate) fn encode_extra(extra: &Map<String, Value>) -> Result<String, sqlx::Error> {
    serde_json::to_string(extra).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

/// Parse the `extra` column back into a JSON object
pub(crate) fn decode_extra(raw: &str) -> Result<Map<String, Value>, sqlx::Error> {
    serde_json::from_str(raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn place_from_row(row: &SqliteRow) -> Result<Place, sqlx::Error> {
    let extra: String = row.try_get("extra")?;

    Ok(Place {
        place_id: row.try_get("place_id")?,
        fields: PlaceFields {
            name: row.try_get("name")?,
            pic: row.try_get("pic")?,
            cuisines: row.try_get("cuisines")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            founded: row.try_get("founded")?,
            extra: decode_extra(&extra)?,
        },
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Insert a new place
pub async fn insert_place(pool: &SqlitePool, fields: &PlaceFields) -> Result<Place, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(&format!(
        r#"
        INSERT INTO places (name, pic, cuisines, city, state, founded, extra, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {PLACE_COLUMNS}
        "#
    ))
    .bind(&fields.name)
    .bind(&fields.pic)
    .bind(&fields.cuisines)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(fields.founded)
    .bind(encode_extra(&fields.extra)?)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    place_from_row(&row)
}

/// List every place, oldest first
pub async fn list_places(pool: &SqlitePool) -> Result<Vec<Place>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {PLACE_COLUMNS} FROM places ORDER BY place_id"
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(place_from_row).collect()
}

/// Get a place by ID
pub async fn get_place(pool: &SqlitePool, place_id: i64) -> Result<Option<Place>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {PLACE_COLUMNS} FROM places WHERE place_id = ?"
    ))
    .bind(place_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(place_from_row).transpose()
}

/// Replace the stored fields of a place and bump `updated_at`
///
/// Returns `None` if the place no longer exists.
pub async fn update_place(
    pool: &SqlitePool,
    place_id: i64,
    fields: &PlaceFields,
) -> Result<Option<Place>, sqlx::Error> {
    let row = sqlx::query(&format!(
        r#"
        UPDATE places
        SET name = ?, pic = ?, cuisines = ?, city = ?, state = ?, founded = ?, extra = ?, updated_at = ?
        WHERE place_id = ?
        RETURNING {PLACE_COLUMNS}
        "#
    ))
    .bind(&fields.name)
    .bind(&fields.pic)
    .bind(&fields.cuisines)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(fields.founded)
    .bind(encode_extra(&fields.extra)?)
    .bind(Utc::now())
    .bind(place_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(place_from_row).transpose()
}

/// Delete a place; its comments go with it (foreign-key cascade)
///
/// Returns whether a row was deleted.
pub async fn delete_place(pool: &SqlitePool, place_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM places WHERE place_id = ?")
        .bind(place_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
