//! Current-user profile handler

use axum::response::Json;

use crate::backend::middleware::CurrentUser;
use crate::shared::PublicUser;

/// `GET /authentication/profile`
///
/// Returns the current user, or `null` when the request is anonymous.
pub async fn profile(CurrentUser(user): CurrentUser) -> Json<Option<PublicUser>> {
    Json(user.as_ref().map(PublicUser::from))
}
