use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::post,
    Router,
};

use crate::{
    error::{malformed_query, Result},
    payload::{FollowQuery, UnfollowQuery},
    state::AppState,
};

pub fn follow_router() -> Router<AppState> {
    Router::new().route("/follow", post(follow_user).delete(unfollow_user))
}

async fn follow_user(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<FollowQuery>, QueryRejection>,
) -> Result<StatusCode> {
    let Query(query) = query.map_err(malformed_query)?;

    app_state
        .app
        .write()
        .await
        .follow(&query.follower_id, &query.followed_id)?;
    Ok(StatusCode::OK)
}

async fn unfollow_user(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<UnfollowQuery>, QueryRejection>,
) -> Result<StatusCode> {
    let Query(query) = query.map_err(malformed_query)?;

    app_state
        .app
        .write()
        .await
        .unfollow(&query.follower_id, &query.unfollowed_id)?;
    Ok(StatusCode::OK)
}
