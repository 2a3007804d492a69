use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use warble_core::User;

use crate::{
    error::{malformed, malformed_query, Result},
    payload::UserQuery,
    state::AppState,
};

pub fn user_router() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(find_user).post(create_user).put(update_user).delete(delete_user),
    )
}

async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<User>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(user) = payload.map_err(malformed)?;

    app_state.app.write().await.create_user(user)?;
    Ok(StatusCode::CREATED)
}

async fn find_user(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<User>> {
    let Query(query) = query.map_err(malformed_query)?;

    let app = app_state.app.read().await;
    let user = app.get_user(&query.id)?.clone();

    Ok(Json(user))
}

/// Replaces the whole record. Fields left out of the body, `following` and `tweets`
/// included, are not kept from the old record.
async fn update_user(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<UserQuery>, QueryRejection>,
    payload: std::result::Result<Json<User>, JsonRejection>,
) -> Result<StatusCode> {
    let Query(query) = query.map_err(malformed_query)?;
    let Json(user) = payload.map_err(malformed)?;

    app_state.app.write().await.replace_user(&query.id, user)?;
    Ok(StatusCode::OK)
}

async fn delete_user(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<UserQuery>, QueryRejection>,
) -> Result<StatusCode> {
    let Query(query) = query.map_err(malformed_query)?;

    app_state.app.write().await.delete_user(&query.id)?;
    Ok(StatusCode::OK)
}
