use crate::model::Tweet;

/// Every tweet ever posted, in arrival order. Entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct TweetStore {
    tweets: Vec<Tweet>,
}

impl TweetStore {
    pub fn new() -> Self {
        Self { tweets: Vec::new() }
    }

    pub fn append(&mut self, tweet: Tweet) {
        self.tweets.push(tweet);
    }

    pub fn all(&self) -> &[Tweet] {
        &self.tweets
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}
