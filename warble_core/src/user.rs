use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::User;

/// All registered users, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self { users: HashMap::new() }
    }

    /// Insert a new user. Fails if the id is taken.
    pub fn create(&mut self, user: User) -> Result<()> {
        if self.users.contains_key(&user.id) {
            return Err(Error::ObjectAlreadyExists(format!("User {}", user.id)));
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&User> {
        self.users.get(id).ok_or_else(|| not_found(id))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut User> {
        self.users.get_mut(id).ok_or_else(|| not_found(id))
    }

    /// Overwrite the whole record stored under `id`.
    /// Nothing is carried over from the old record, including `following` and `tweets`,
    /// and the new record is stored under `id` even if its own `id` field differs.
    pub fn replace(&mut self, id: &str, user: User) -> Result<()> {
        let stored = self.get_mut(id)?;
        *stored = user;
        Ok(())
    }

    /// Remove a user. References to it in other users' `following` and in posted tweets are kept.
    pub fn delete(&mut self, id: &str) -> Result<User> {
        self.users.remove(id).ok_or_else(|| not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn not_found(id: &str) -> Error {
    Error::ObjectNotFound(format!("User {}", id))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut store = UserStore::new();
        store.create(User::new("u1", "alice")).unwrap();
        assert_eq!(store.get("u1").unwrap().username, "alice");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_duplicate() {
        let mut store = UserStore::new();
        store.create(User::new("u1", "alice")).unwrap();
        let result = store.create(User::new("u1", "bob"));
        assert!(matches!(result, Err(Error::ObjectAlreadyExists(_))));
        assert_eq!(store.get("u1").unwrap().username, "alice");
    }

    #[test]
    fn test_get_missing() {
        let store = UserStore::new();
        assert!(matches!(store.get("nobody"), Err(Error::ObjectNotFound(_))));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut store = UserStore::new();
        let mut alice = User::new("u1", "alice");
        alice.following.push("u2".to_string());
        store.create(alice).unwrap();

        store.replace("u1", User::new("u1", "alice2")).unwrap();
        let stored = store.get("u1").unwrap();
        assert_eq!(stored.username, "alice2");
        assert!(stored.following.is_empty());
    }

    #[test]
    fn test_replace_missing() {
        let mut store = UserStore::new();
        let result = store.replace("u1", User::new("u1", "alice"));
        assert!(matches!(result, Err(Error::ObjectNotFound(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete() {
        let mut store = UserStore::new();
        store.create(User::new("u1", "alice")).unwrap();
        store.delete("u1").unwrap();
        assert!(matches!(store.get("u1"), Err(Error::ObjectNotFound(_))));
        assert!(matches!(store.delete("u1"), Err(Error::ObjectNotFound(_))));
    }
}
