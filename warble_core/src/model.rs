use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// A registered account. Identifiers are chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Ids of followed users, in follow order. The same id may appear more than once.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub following: Vec<String>,
    /// Tweets authored by this user, in posting order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tweets: Vec<Tweet>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            following: Vec::new(),
            tweets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: String,
    /// Author id. Not checked against registered users.
    pub user_id: String,
    pub content: String,
    /// Kept with the caller's UTC offset. Ordering compares the instant.
    pub timestamp: DateTime<FixedOffset>,
}

impl Tweet {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}

impl std::fmt::Display for Tweet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tweet {} by {}", self.id, self.user_id)
    }
}

/// Clients may send `null` for list fields; treat it like an absent field.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
