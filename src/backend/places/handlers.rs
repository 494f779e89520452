//! HTTP handlers for places
//!
//! - `POST /places` - create, substituting defaults for `pic`/`city`/`state`
//! - `GET /places` - list all
//! - `GET /places/{placeId}` - one place with its comments and their authors
//! - `PUT /places/{placeId}` - shallow merge of the submitted keys
//! - `DELETE /places/{placeId}` - delete, returning the deleted place

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::comments::db::list_comments_for_place;
use crate::backend::error::BackendError;
use crate::backend::extract::{parse_id, JsonBody, PathParam};
use crate::backend::places::db;
use crate::shared::json::JsonObject;
use crate::shared::{Place, PlaceDetail, PlaceFields};

pub(crate) fn place_not_found(place_id: i64) -> BackendError {
    BackendError::not_found(format!("Could not find place with id \"{}\"", place_id))
}

/// Load a place or fail with `NotFound`
pub(crate) async fn find_place(pool: &SqlitePool, place_id: i64) -> Result<Place, BackendError> {
    db::get_place(pool, place_id).await?.ok_or_else(|| {
        tracing::warn!("Place {} not found", place_id);
        place_not_found(place_id)
    })
}

/// Create a place
///
/// Any JSON object is accepted. Unknown keys are stored and returned as-is;
/// well-known keys must have the right type.
///
/// # Example Request
///
/// ```http
/// POST /places HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "H-Thai-ML", "cuisines": "Thai, Pan-Asian", "founded": 1989 }
/// ```
pub async fn create_place(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<JsonObject>,
) -> Result<Json<Place>, BackendError> {
    let fields = PlaceFields::for_new_place(body)?;
    let place = db::insert_place(&pool, &fields).await?;

    tracing::info!("Created place {}", place.place_id);
    Ok(Json(place))
}

/// List all places
pub async fn list_places(State(pool): State<SqlitePool>) -> Result<Json<Vec<Place>>, BackendError> {
    Ok(Json(db::list_places(&pool).await?))
}

/// Get a place with its comments
pub async fn get_place(
    State(pool): State<SqlitePool>,
    PathParam(raw_id): PathParam<String>,
) -> Result<Json<PlaceDetail>, BackendError> {
    let place_id = parse_id(&raw_id)?;
    let place = find_place(&pool, place_id).await?;
    let comments = list_comments_for_place(&pool, place_id).await?;

    Ok(Json(PlaceDetail { place, comments }))
}

/// Update a place
///
/// Submitted keys replace stored values; everything else is kept.
pub async fn update_place(
    State(pool): State<SqlitePool>,
    PathParam(raw_id): PathParam<String>,
    JsonBody(body): JsonBody<JsonObject>,
) -> Result<Json<Place>, BackendError> {
    let place_id = parse_id(&raw_id)?;
    let current = find_place(&pool, place_id).await?;

    let fields = current.fields.merged_with(body)?;
    let place = db::update_place(&pool, place_id, &fields)
        .await?
        .ok_or_else(|| place_not_found(place_id))?;

    tracing::info!("Updated place {}", place_id);
    Ok(Json(place))
}

/// Delete a place and its comments
pub async fn delete_place(
    State(pool): State<SqlitePool>,
    PathParam(raw_id): PathParam<String>,
) -> Result<Json<Place>, BackendError> {
    let place_id = parse_id(&raw_id)?;
    let place = find_place(&pool, place_id).await?;

    if !db::delete_place(&pool, place_id).await? {
        return Err(place_not_found(place_id));
    }

    tracing::info!("Deleted place {}", place_id);
    Ok(Json(place))
}
