/**
 * API Routes
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /authentication` - Log in
 * - `GET /authentication/profile` - Current user or `null`
 * - `POST /authentication/logout` - End the authenticated context
 *
 * ## Places
 * - `POST /places`, `GET /places`
 * - `GET|PUT|DELETE /places/{placeId}`
 *
 * ## Comments
 * - `POST /places/{placeId}/comments`
 * - `DELETE /places/{placeId}/comments/{commentId}`
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{login, logout, profile};
use crate::backend::comments::{create_comment, delete_comment};
use crate::backend::places::{create_place, delete_place, get_place, list_places, update_place};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// None of the routes are gated by middleware; handlers that need a user
/// take `CurrentUser` and decide themselves.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/authentication", post(login))
        .route("/authentication/profile", get(profile))
        .route("/authentication/logout", post(logout))
        // Places
        .route("/places", post(create_place).get(list_places))
        .route(
            "/places/{place_id}",
            get(get_place).put(update_place).delete(delete_place),
        )
        // Comments
        .route("/places/{place_id}/comments", post(create_comment))
        .route(
            "/places/{place_id}/comments/{comment_id}",
            delete(delete_comment),
        )
}
