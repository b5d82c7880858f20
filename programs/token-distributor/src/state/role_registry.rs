//! # Role Registry
//!
//! Two roles, `Admin` and `Operator`, each a set of principals. `Admin`
//! governs membership of both sets, including its own.
//!
//! ## Security Model:
//! ```text
//! Instruction: "Add operator X"
//!       ↓
//! RoleRegistry::require_role(caller, role_admin(Operator))
//!       ↓
//! Caller is an admin      → membership changes, RoleChanged returned
//! Caller is NOT an admin  → Unauthorized, nothing changes
//! ```
//!
//! ## Invariant:
//! Once bootstrapped the admin set is never empty. Revoking or renouncing
//! the last admin fails with `LastAdmin`.

use anchor_lang::prelude::*;

use crate::errors::DistributorError;
use crate::events::RoleChanged;

/// # Role
///
/// The permission sets known to the distributor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    /// Manages both role sets
    Admin,
    /// Withdraws and distributes vault tokens
    Operator,
}

/// # RoleRegistry
///
/// Membership of both roles, stored inside the `Distributor` account.
///
/// Both sets are kept as `Vec<Pubkey>` without duplicates; insertion order
/// is preserved so the serialized form is deterministic.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct RoleRegistry {
    /// Principals holding `Admin`
    pub admins: Vec<Pubkey>,
    /// Principals holding `Operator`
    pub operators: Vec<Pubkey>,
}

impl RoleRegistry {
    /// Maximum number of admins.
    pub const MAX_ADMINS: usize = 5;

    /// Maximum number of operators.
    pub const MAX_OPERATORS: usize = 20;

    /// Serialized size of a full registry.
    ///
    /// ## Calculation:
    /// - 4 bytes: admins Vec length prefix
    /// - 160 bytes: admins (5 × 32 bytes max)
    /// - 4 bytes: operators Vec length prefix
    /// - 640 bytes: operators (20 × 32 bytes max)
    pub const LEN: usize = 4 + (32 * Self::MAX_ADMINS) + 4 + (32 * Self::MAX_OPERATORS);

    /// Registry right after deployment: the deployer is the only admin and
    /// there are no operators.
    pub fn bootstrap(deployer: Pubkey) -> Self {
        Self {
            admins: vec![deployer],
            operators: Vec::new(),
        }
    }

    /// The role that governs membership changes of `role`.
    pub fn role_admin(_role: Role) -> Role {
        Role::Admin
    }

    /// Check whether `principal` holds `role`. Pure read.
    pub fn has_role(&self, role: Role, principal: &Pubkey) -> bool {
        self.members(role).contains(principal)
    }

    /// The authorization function every mutating instruction goes through.
    pub fn is_authorized(&self, caller: &Pubkey, required: Role) -> bool {
        self.has_role(required, caller)
    }

    /// Fail with `Unauthorized` unless `caller` holds `required`.
    pub fn require_role(&self, caller: &Pubkey, required: Role) -> Result<()> {
        require!(
            self.is_authorized(caller, required),
            DistributorError::Unauthorized
        );
        Ok(())
    }

    /// Add `principal` to `role`. Caller must hold the role's admin role.
    ///
    /// ## Returns
    /// * `Ok(Some(event))` if membership changed
    /// * `Ok(None)` if `principal` already held `role`
    pub fn grant_role(
        &mut self,
        caller: &Pubkey,
        role: Role,
        principal: Pubkey,
    ) -> Result<Option<RoleChanged>> {
        self.require_role(caller, Self::role_admin(role))?;

        if self.has_role(role, &principal) {
            return Ok(None);
        }

        require!(
            self.members(role).len() < Self::capacity(role),
            DistributorError::RoleCapacityReached
        );

        self.members_mut(role).push(principal);
        Ok(Some(RoleChanged {
            role,
            principal,
            granted: true,
            sender: *caller,
        }))
    }

    /// Remove `principal` from `role`. Caller must hold the role's admin role.
    ///
    /// ## Returns
    /// * `Ok(Some(event))` if membership changed
    /// * `Ok(None)` if `principal` did not hold `role`
    /// * `Err(LastAdmin)` if this would empty the admin set
    pub fn revoke_role(
        &mut self,
        caller: &Pubkey,
        role: Role,
        principal: &Pubkey,
    ) -> Result<Option<RoleChanged>> {
        self.require_role(caller, Self::role_admin(role))?;
        self.remove_member(role, principal, caller)
    }

    /// `caller` gives up its own membership of `role`.
    pub fn renounce_role(&mut self, caller: &Pubkey, role: Role) -> Result<Option<RoleChanged>> {
        self.remove_member(role, caller, caller)
    }

    /// Shorthand for `grant_role(caller, Role::Operator, principal)`.
    pub fn add_operator(&mut self, caller: &Pubkey, principal: Pubkey) -> Result<Option<RoleChanged>> {
        self.grant_role(caller, Role::Operator, principal)
    }

    /// Shorthand for `revoke_role(caller, Role::Operator, principal)`.
    pub fn revoke_operator(
        &mut self,
        caller: &Pubkey,
        principal: &Pubkey,
    ) -> Result<Option<RoleChanged>> {
        self.revoke_role(caller, Role::Operator, principal)
    }

    fn remove_member(
        &mut self,
        role: Role,
        principal: &Pubkey,
        sender: &Pubkey,
    ) -> Result<Option<RoleChanged>> {
        if !self.has_role(role, principal) {
            return Ok(None);
        }

        if role == Role::Admin {
            require!(self.admins.len() > 1, DistributorError::LastAdmin);
        }

        self.members_mut(role).retain(|p| p != principal);
        Ok(Some(RoleChanged {
            role,
            principal: *principal,
            granted: false,
            sender: *sender,
        }))
    }

    fn capacity(role: Role) -> usize {
        match role {
            Role::Admin => Self::MAX_ADMINS,
            Role::Operator => Self::MAX_OPERATORS,
        }
    }

    fn members(&self, role: Role) -> &Vec<Pubkey> {
        match role {
            Role::Admin => &self.admins,
            Role::Operator => &self.operators,
        }
    }

    fn members_mut(&mut self, role: Role) -> &mut Vec<Pubkey> {
        match role {
            Role::Admin => &mut self.admins,
            Role::Operator => &mut self.operators,
        }
    }
}
