// Follow edges live in each follower's `following` list.

use crate::error::{Error, Result};
use crate::user::UserStore;

/// Add `followed_id` to the follower's `following` list.
/// Both users must exist. Self-follows and repeated follows are recorded as given.
pub fn follow(users: &mut UserStore, follower_id: &str, followed_id: &str) -> Result<()> {
    if !users.contains(follower_id) {
        return Err(Error::ObjectNotFound(format!("Follower {}", follower_id)));
    }
    if !users.contains(followed_id) {
        return Err(Error::ObjectNotFound(format!("Followed user {}", followed_id)));
    }
    users.get_mut(follower_id)?.following.push(followed_id.to_string());
    Ok(())
}

/// Remove every occurrence of `unfollowed_id` from the follower's `following` list.
/// Only the follower has to exist.
pub fn unfollow(users: &mut UserStore, follower_id: &str, unfollowed_id: &str) -> Result<()> {
    let follower = users
        .get_mut(follower_id)
        .map_err(|_| Error::ObjectNotFound(format!("Follower {}", follower_id)))?;
    follower.following.retain(|id| id != unfollowed_id);
    Ok(())
}

pub fn following<'a>(users: &'a UserStore, follower_id: &str) -> Result<&'a [String]> {
    Ok(&users.get(follower_id)?.following)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::User;

    fn users() -> UserStore {
        let mut users = UserStore::new();
        users.create(User::new("a", "alice")).unwrap();
        users.create(User::new("b", "bob")).unwrap();
        users
    }

    #[test]
    fn test_follow() {
        let mut users = users();
        follow(&mut users, "a", "b").unwrap();
        assert_eq!(following(&users, "a").unwrap(), &["b".to_string()]);
        assert!(following(&users, "b").unwrap().is_empty());
    }

    #[test]
    fn test_follow_twice_keeps_duplicate() {
        let mut users = users();
        follow(&mut users, "a", "b").unwrap();
        follow(&mut users, "a", "b").unwrap();
        assert_eq!(following(&users, "a").unwrap(), &["b".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_follow_self() {
        let mut users = users();
        follow(&mut users, "a", "a").unwrap();
        assert_eq!(following(&users, "a").unwrap(), &["a".to_string()]);
    }

    #[test]
    fn test_follow_missing_user() {
        let mut users = users();
        assert!(matches!(follow(&mut users, "x", "b"), Err(Error::ObjectNotFound(_))));
        assert!(matches!(follow(&mut users, "a", "x"), Err(Error::ObjectNotFound(_))));
        assert!(following(&users, "a").unwrap().is_empty());
    }

    #[test]
    fn test_unfollow_removes_all() {
        let mut users = users();
        users.create(User::new("c", "carol")).unwrap();
        follow(&mut users, "a", "b").unwrap();
        follow(&mut users, "a", "c").unwrap();
        follow(&mut users, "a", "b").unwrap();

        unfollow(&mut users, "a", "b").unwrap();
        assert_eq!(following(&users, "a").unwrap(), &["c".to_string()]);
    }

    #[test]
    fn test_unfollow_unknown_target() {
        let mut users = users();
        follow(&mut users, "a", "b").unwrap();
        unfollow(&mut users, "a", "nobody").unwrap();
        assert_eq!(following(&users, "a").unwrap(), &["b".to_string()]);
        assert!(matches!(unfollow(&mut users, "x", "b"), Err(Error::ObjectNotFound(_))));
    }
}
