//! Nullable role store — thread-safe in-memory storage for testing.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use warden_store::{MetaStore, RoleStore, StoreError};
use warden_types::{Address, RoleId};

/// An in-memory role + meta store for testing.
///
/// Roles with no explicit admin mapping are administered by
/// [`RoleId::ADMIN`], matching the conventional hierarchy root.
pub struct NullRoleStore {
    members: Mutex<HashMap<RoleId, HashSet<Address>>>,
    admins: Mutex<HashMap<RoleId, RoleId>>,
    meta: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullRoleStore {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
            admins: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }

    /// Declare which role administers `role`.
    pub fn set_role_admin(&self, role: &RoleId, admin_role: &RoleId) {
        self.admins.lock().unwrap().insert(*role, *admin_role);
    }

    /// Number of accounts currently holding `role`.
    pub fn member_count(&self, role: &RoleId) -> usize {
        self.members
            .lock()
            .unwrap()
            .get(role)
            .map(|s| s.len())
            .unwrap_or(0)
    }
}

impl Default for NullRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleStore for NullRoleStore {
    fn has_role(&self, role: &RoleId, account: &Address) -> Result<bool, StoreError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .get(role)
            .is_some_and(|s| s.contains(account)))
    }

    fn get_role_admin(&self, role: &RoleId) -> Result<RoleId, StoreError> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .get(role)
            .copied()
            .unwrap_or(RoleId::ADMIN))
    }

    fn grant_role(&self, role: &RoleId, account: &Address) -> Result<(), StoreError> {
        self.members
            .lock()
            .unwrap()
            .entry(*role)
            .or_default()
            .insert(*account);
        Ok(())
    }

    fn revoke_role(&self, role: &RoleId, account: &Address) -> Result<(), StoreError> {
        if let Some(set) = self.members.lock().unwrap().get_mut(role) {
            set.remove(account);
        }
        Ok(())
    }
}

impl MetaStore for NullRoleStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.meta
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn delete_meta(&self, key: &str) -> Result<(), StoreError> {
        self.meta.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(seed: u8) -> Address {
        Address::new([seed; 32])
    }

    #[test]
    fn test_grant_and_query_role() {
        let store = NullRoleStore::new();
        let role = RoleId::from_label("OPERATOR");
        let addr = test_address(1);
        assert!(!store.has_role(&role, &addr).unwrap());
        store.grant_role(&role, &addr).unwrap();
        assert!(store.has_role(&role, &addr).unwrap());
        assert_eq!(store.member_count(&role), 1);
    }

    #[test]
    fn test_grant_is_idempotent() {
        let store = NullRoleStore::new();
        let role = RoleId::from_label("OPERATOR");
        let addr = test_address(1);
        store.grant_role(&role, &addr).unwrap();
        store.grant_role(&role, &addr).unwrap();
        assert_eq!(store.member_count(&role), 1);
    }

    #[test]
    fn test_revoke_role() {
        let store = NullRoleStore::new();
        let role = RoleId::from_label("OPERATOR");
        let addr = test_address(1);
        store.grant_role(&role, &addr).unwrap();
        store.revoke_role(&role, &addr).unwrap();
        assert!(!store.has_role(&role, &addr).unwrap());
        // Revoking a role the account does not hold is a no-op.
        store.revoke_role(&role, &addr).unwrap();
    }

    #[test]
    fn test_default_admin_hierarchy() {
        let store = NullRoleStore::new();
        let role = RoleId::from_label("OPERATOR");
        assert_eq!(store.get_role_admin(&role).unwrap(), RoleId::ADMIN);

        let manager = RoleId::from_label("MANAGER");
        store.set_role_admin(&role, &manager);
        assert_eq!(store.get_role_admin(&role).unwrap(), manager);
    }

    #[test]
    fn test_meta_roundtrip() {
        let store = NullRoleStore::new();
        store.put_meta("snapshot", b"bytes").unwrap();
        assert_eq!(store.get_meta("snapshot").unwrap(), b"bytes");
        store.delete_meta("snapshot").unwrap();
        assert!(store.get_meta("snapshot").is_err());
    }
}
