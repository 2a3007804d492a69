// The wall is the reverse-chronological feed of tweets by the users someone follows.

use std::collections::HashSet;

use itertools::Itertools;

use crate::model::Tweet;
use crate::tweet::TweetStore;
use crate::user::UserStore;

/// Build the wall of `user_id`, most recent tweet first.
/// Tweets with equal timestamps keep their posting order.
/// An unknown user follows nobody, so their wall is empty.
pub fn build_wall(users: &UserStore, tweets: &TweetStore, user_id: &str) -> Vec<Tweet> {
    let following: HashSet<&str> = match users.get(user_id) {
        Ok(user) => user.following.iter().map(String::as_str).collect(),
        Err(_) => {
            tracing::debug!("Wall requested for unknown user {}", user_id);
            return Vec::new();
        }
    };

    // `sorted_by` is stable
    tweets
        .all()
        .iter()
        .filter(|tweet| following.contains(tweet.user_id.as_str()))
        .cloned()
        .sorted_by(|a, b| b.timestamp.cmp(&a.timestamp))
        .collect()
}
