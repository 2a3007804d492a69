use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};

use warble_core::Tweet;

use crate::{
    error::{malformed, Result},
    state::AppState,
};

pub fn tweet_router() -> Router<AppState> {
    Router::new().route("/tweets", post(post_tweet))
}

async fn post_tweet(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<Tweet>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(tweet) = payload.map_err(malformed)?;

    app_state.app.write().await.post_tweet(tweet);
    Ok(StatusCode::CREATED)
}
