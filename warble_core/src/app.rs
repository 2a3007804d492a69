use crate::error::Result;
use crate::model::{Tweet, User};
use crate::tweet::TweetStore;
use crate::user::UserStore;
use crate::{follow, wall};

/// The whole service state. Callers sharing it between tasks must serialize access,
/// each method is meant to run as one atomic step.
#[derive(Debug, Clone, Default)]
pub struct App {
    users: UserStore,
    tweets: TweetStore,
}

impl App {
    pub fn new() -> Self {
        Self {
            users: UserStore::new(),
            tweets: TweetStore::new(),
        }
    }

    // MARK: Users

    pub fn create_user(&mut self, user: User) -> Result<()> {
        let id = user.id.clone();
        self.users.create(user)?;
        tracing::info!("Created user {}", id);
        Ok(())
    }

    pub fn get_user(&self, id: &str) -> Result<&User> {
        self.users.get(id)
    }

    /// Replace the stored record wholesale, see [`UserStore::replace`].
    pub fn replace_user(&mut self, id: &str, user: User) -> Result<()> {
        self.users.replace(id, user)?;
        tracing::info!("Replaced user {}", id);
        Ok(())
    }

    pub fn delete_user(&mut self, id: &str) -> Result<()> {
        let user = self.users.delete(id)?;
        tracing::info!(
            "Deleted user {} ({} following, {} tweets kept in timeline)",
            id,
            user.following.len(),
            user.tweets.len()
        );
        Ok(())
    }

    // MARK: Tweets

    /// Append a tweet to the timeline and to its author's own list.
    /// An unknown author is not an error, the tweet only goes to the timeline.
    pub fn post_tweet(&mut self, tweet: Tweet) {
        match self.users.get_mut(&tweet.user_id) {
            Ok(author) => author.tweets.push(tweet.clone()),
            Err(_) => tracing::warn!("Posted {} for unknown author", tweet),
        }
        tracing::info!("Posted {}", tweet);
        self.tweets.append(tweet);
    }

    pub fn tweets(&self) -> &[Tweet] {
        self.tweets.all()
    }

    // MARK: Follow graph

    pub fn follow(&mut self, follower_id: &str, followed_id: &str) -> Result<()> {
        follow::follow(&mut self.users, follower_id, followed_id)?;
        tracing::info!("User {} followed {}", follower_id, followed_id);
        Ok(())
    }

    pub fn unfollow(&mut self, follower_id: &str, unfollowed_id: &str) -> Result<()> {
        follow::unfollow(&mut self.users, follower_id, unfollowed_id)?;
        tracing::info!("User {} unfollowed {}", follower_id, unfollowed_id);
        Ok(())
    }

    pub fn following(&self, follower_id: &str) -> Result<&[String]> {
        follow::following(&self.users, follower_id)
    }

    // MARK: Wall

    pub fn wall(&self, user_id: &str) -> Vec<Tweet> {
        wall::build_wall(&self.users, &self.tweets, user_id)
    }
}
