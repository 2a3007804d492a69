use serde::Deserialize;

// Missing query parameters read as the empty id, which no lookup matches.

/// Query for endpoints addressing one user, like `/users?id=`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserQuery {
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FollowQuery {
    pub follower_id: String,
    pub followed_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UnfollowQuery {
    pub follower_id: String,
    pub unfollowed_id: String,
}
