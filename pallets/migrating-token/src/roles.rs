//! Capability checks for owner and admin operations.

use sp_std::marker::PhantomData;

use crate::{Admins, Config, Owner};

/// Capabilities a signed caller can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// May hand over ownership and appoint or remove admins.
    Owner,
    /// May pause and unpause self-transfers. The owner always holds this role too.
    Admin,
}

pub trait HasRole<AccountId> {
    fn has_role(who: &AccountId, role: Role) -> bool;
}

/// Roles read from this pallet's `Owner` and `Admins` storage.
pub struct StoredRoles<T>(PhantomData<T>);

impl<T: Config> HasRole<T::AccountId> for StoredRoles<T> {
    fn has_role(who: &T::AccountId, role: Role) -> bool {
        let is_owner = Owner::<T>::get().as_ref() == Some(who);
        match role {
            Role::Owner => is_owner,
            Role::Admin => is_owner || Admins::<T>::get(who),
        }
    }
}
