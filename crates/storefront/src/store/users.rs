//! User operations.

use mark_store_core::{NewUser, User, UserId};

use super::CatalogStore;

impl CatalogStore {
    /// Get a user by ID.
    #[must_use]
    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.read().users.get(id)
    }

    /// Get the first user (in id order) whose phone number matches exactly.
    ///
    /// Phone numbers are not unique; later registrations with the same
    /// number are shadowed by the earliest one.
    #[must_use]
    pub fn get_user_by_phone(&self, phone_number: &str) -> Option<User> {
        self.read()
            .users
            .find(|user| user.phone_number == phone_number)
    }

    /// Create a user. `is_admin` defaults to `false` when not given.
    pub fn create_user(&self, input: NewUser) -> User {
        self.write()
            .users
            .insert_with(|id| input.into_user(id))
    }

    /// List all users in creation order.
    #[must_use]
    pub fn get_all_users(&self) -> Vec<User> {
        self.read().users.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, phone: &str) -> NewUser {
        NewUser {
            full_name: name.to_string(),
            phone_number: phone.to_string(),
            is_admin: None,
        }
    }

    #[test]
    fn test_create_user_assigns_sequential_ids() {
        let store = CatalogStore::new();
        let a = store.create_user(new_user("Ali Hassan Kareem", "0770111"));
        let b = store.create_user(new_user("Sara Ahmed Ali", "0770222"));

        assert_eq!(a.id, UserId::new(1));
        assert_eq!(b.id, UserId::new(2));
        assert!(!a.is_admin);
        assert_eq!(store.get_user(b.id), Some(b));
        assert_eq!(store.get_user(UserId::new(3)), None);
    }

    #[test]
    fn test_create_user_keeps_explicit_admin_flag() {
        let store = CatalogStore::new();
        let admin = store.create_user(NewUser {
            is_admin: Some(true),
            ..new_user("Store Owner Admin", "0501234567")
        });
        assert!(admin.is_admin);
    }

    #[test]
    fn test_get_user_by_phone_returns_first_match() {
        let store = CatalogStore::new();
        let first = store.create_user(new_user("First Person Here", "0770"));
        store.create_user(new_user("Second Person Here", "0770"));

        assert_eq!(store.get_user_by_phone("0770"), Some(first));
        assert_eq!(store.get_user_by_phone("0999"), None);
        assert_eq!(store.get_all_users().len(), 2);
    }
}
