//! HTTP handlers for comments
//!
//! Comments are a sub-resource of places. The author is always the current
//! user and the place is always the one in the path, whatever the body says.

use axum::{
    extract::{FromRequest, Request, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::comments::db::{self, NewComment};
use crate::backend::error::BackendError;
use crate::backend::extract::{parse_id, JsonBody, PathParam};
use crate::backend::middleware::CurrentUser;
use crate::backend::places::handlers::find_place;
use crate::shared::json::{is_truthy, JsonObject};
use crate::shared::{Comment, CommentFields, CommentWithAuthor};

/// Message for anonymous comment attempts
pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be logged in to leave a rant or rave.";

/// Create a comment on a place
///
/// `rant` is coerced by truthiness, so `0`, `""` and `null` all mean a rave.
///
/// The body is only read once the place exists and a user is logged in.
///
/// # Errors
///
/// Checked in this order:
///
/// * `404 Not Found` - Invalid place id, or no such place
/// * `401 Unauthorized` - No current user
/// * `400 Bad Request` - Body is not a JSON object, or `content`/`stars` of
///   the wrong type
///
/// # Example Request
///
/// ```http
/// POST /places/7/comments HTTP/1.1
/// Content-Type: application/json
///
/// { "content": "Best pad thai in town", "stars": 5, "rant": false }
/// ```
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    PathParam(raw_place_id): PathParam<String>,
    CurrentUser(user): CurrentUser,
    request: Request,
) -> Result<Json<CommentWithAuthor>, BackendError> {
    let place_id = parse_id(&raw_place_id)?;
    let place = find_place(&pool, place_id).await?;

    let author = user.ok_or_else(|| {
        tracing::warn!("Anonymous comment attempt on place {}", place.place_id);
        BackendError::unauthorized(LOGIN_REQUIRED_MESSAGE)
    })?;

    let JsonBody(body) = JsonBody::<JsonObject>::from_request(request, &()).await?;
    let rant = is_truthy(body.get("rant"));

    let new_comment = NewComment {
        place_id: place.place_id,
        author_id: author.user_id,
        rant,
        fields: CommentFields::from_body(body)?,
    };
    let comment = db::insert_comment(&pool, &new_comment).await?;

    tracing::info!(
        "User {} commented {} on place {}",
        author.user_id,
        comment.comment_id,
        place_id
    );

    Ok(Json(CommentWithAuthor {
        comment,
        author: Some(author.to_public()),
    }))
}

/// Delete a comment
///
/// Only the author may delete a comment; anyone else, including anonymous
/// requests, gets `403 Forbidden`. Returns the comment as it was before
/// deletion.
pub async fn delete_comment(
    State(pool): State<SqlitePool>,
    PathParam((raw_place_id, raw_comment_id)): PathParam<(String, String)>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Comment>, BackendError> {
    let place_id = parse_id(&raw_place_id)?;
    let comment_id = parse_id(&raw_comment_id)?;

    let comment = db::get_comment(&pool, place_id, comment_id)
        .await?
        .ok_or_else(|| comment_not_found(place_id, comment_id))?;

    if user.as_ref().map(|u| u.user_id) != Some(comment.author_id) {
        tracing::warn!(
            "User {:?} may not delete comment {} by {}",
            user.as_ref().map(|u| u.user_id),
            comment_id,
            comment.author_id
        );
        return Err(BackendError::forbidden(format!(
            "You do not have permission to delete comment \"{}\"",
            comment_id
        )));
    }

    if !db::delete_comment(&pool, comment_id).await? {
        return Err(comment_not_found(place_id, comment_id));
    }

    tracing::info!("Deleted comment {} on place {}", comment_id, place_id);
    Ok(Json(comment))
}

fn comment_not_found(place_id: i64, comment_id: i64) -> BackendError {
    tracing::warn!("Comment {} not found on place {}", comment_id, place_id);
    BackendError::not_found(format!(
        "Could not find comment with id \"{}\" for place with id \"{}\"",
        comment_id, place_id
    ))
}
