use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    routing::get,
    Router,
};

use warble_core::Tweet;

use crate::{
    error::{malformed_query, Result},
    payload::UserQuery,
    state::AppState,
};

pub fn timeline_router() -> Router<AppState> {
    Router::new().route("/timeline", get(user_wall))
}

/// The user's wall. Unknown users get an empty list.
async fn user_wall(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<Vec<Tweet>>> {
    let Query(query) = query.map_err(malformed_query)?;

    let wall = app_state.app.read().await.wall(&query.id);
    Ok(Json(wall))
}
