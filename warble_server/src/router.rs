pub mod follow;
pub mod timeline;
pub mod tweet;
pub mod user;

use axum::Router;

use crate::state::AppState;

pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(user::user_router())
        .merge(tweet::tweet_router())
        .merge(follow::follow_router())
        .merge(timeline::timeline_router())
}
