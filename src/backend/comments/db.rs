//! Database operations for comments

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::backend::places::db::{decode_extra, encode_extra};
use crate::shared::{Comment, CommentFields, CommentWithAuthor, PublicUser};

const COMMENT_COLUMNS: &str =
    "comment_id, place_id, author_id, rant, content, stars, extra, created_at, updated_at";

/// A comment about to be inserted
///
/// `place_id` and `author_id` come from the request path and the current
/// user, never from the body.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub place_id: i64,
    pub author_id: i64,
    pub rant: bool,
    pub fields: CommentFields,
}

fn comment_from_row(row: &SqliteRow) -> Result<Comment, sqlx::Error> {
    let extra: String = row.try_get("extra")?;

    Ok(Comment {
        comment_id: row.try_get("comment_id")?,
        place_id: row.try_get("place_id")?,
        author_id: row.try_get("author_id")?,
        rant: row.try_get("rant")?,
        fields: CommentFields {
            content: row.try_get("content")?,
            stars: row.try_get("stars")?,
            extra: decode_extra(&extra)?,
        },
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Author columns of a comment/user LEFT JOIN; all NULL if the user is gone
fn author_from_row(row: &SqliteRow) -> Result<Option<PublicUser>, sqlx::Error> {
    let Some(user_id) = row.try_get::<Option<i64>, _>("author_user_id")? else {
        return Ok(None);
    };

    Ok(Some(PublicUser {
        user_id,
        first_name: row.try_get("author_first_name")?,
        last_name: row.try_get("author_last_name")?,
        email: row.try_get("author_email")?,
        created_at: row.try_get("author_created_at")?,
        updated_at: row.try_get("author_updated_at")?,
    }))
}

/// Insert a new comment
pub async fn insert_comment(pool: &SqlitePool, new_comment: &NewComment) -> Result<Comment, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(&format!(
        r#"
        INSERT INTO comments (place_id, author_id, rant, content, stars, extra, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {COMMENT_COLUMNS}
        "#
    ))
    .bind(new_comment.place_id)
    .bind(new_comment.author_id)
    .bind(new_comment.rant)
    .bind(&new_comment.fields.content)
    .bind(new_comment.fields.stars)
    .bind(encode_extra(&new_comment.fields.extra)?)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    comment_from_row(&row)
}

/// Get a comment by ID, scoped to its place
///
/// A comment that exists under a different place is treated as missing.
pub async fn get_comment(
    pool: &SqlitePool,
    place_id: i64,
    comment_id: i64,
) -> Result<Option<Comment>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE comment_id = ? AND place_id = ?"
    ))
    .bind(comment_id)
    .bind(place_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(comment_from_row).transpose()
}

/// All comments of a place with their authors, oldest first
pub async fn list_comments_for_place(
    pool: &SqlitePool,
    place_id: i64,
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.comment_id, c.place_id, c.author_id, c.rant, c.content, c.stars, c.extra,
               c.created_at, c.updated_at,
               u.user_id AS author_user_id, u.first_name AS author_first_name,
               u.last_name AS author_last_name, u.email AS author_email,
               u.created_at AS author_created_at, u.updated_at AS author_updated_at
        FROM comments c
        LEFT JOIN users u ON u.user_id = c.author_id
        WHERE c.place_id = ?
        ORDER BY c.comment_id
        "#,
    )
    .bind(place_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(CommentWithAuthor {
                comment: comment_from_row(row)?,
                author: author_from_row(row)?,
            })
        })
        .collect()
}

/// Delete a comment
///
/// Returns whether a row was deleted.
pub async fn delete_comment(pool: &SqlitePool, comment_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = ?")
        .bind(comment_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
