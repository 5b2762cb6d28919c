//! Role storage trait.

use crate::StoreError;
use warden_types::{Address, RoleId};

/// The access-control capability interface consumed by the governance core.
///
/// Implementations own role membership and the role-admin hierarchy. The
/// mutators are primitives: they apply the change unconditionally, with no
/// voting or authorization logic of their own. Granting a role an account
/// already holds, or revoking one it does not, is a no-op.
pub trait RoleStore {
    /// Whether `account` currently holds `role`.
    fn has_role(&self, role: &RoleId, account: &Address) -> Result<bool, StoreError>;

    /// The role whose holders administer `role`.
    ///
    /// Roles with no explicit admin are administered by [`RoleId::ADMIN`].
    fn get_role_admin(&self, role: &RoleId) -> Result<RoleId, StoreError>;

    /// Add `account` to the members of `role`.
    fn grant_role(&self, role: &RoleId, account: &Address) -> Result<(), StoreError>;

    /// Remove `account` from the members of `role`.
    fn revoke_role(&self, role: &RoleId, account: &Address) -> Result<(), StoreError>;
}
