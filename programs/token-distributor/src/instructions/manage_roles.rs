//! # Role Management Instructions
//!
//! Admin-only changes to the operator and admin sets, plus `renounce_role`
//! which any member may call for itself.
//!
//! | Instruction | Who Can Call | Effect |
//! |-------------|--------------|--------|
//! | `add_operator` | Admin | Grant `Operator` |
//! | `revoke_operator` | Admin | Revoke `Operator` |
//! | `grant_admin` | Admin | Grant `Admin` |
//! | `revoke_admin` | Admin | Revoke `Admin` (never the last one) |
//! | `renounce_role` | Any member | Drop own membership |
//!
//! Authorization is decided by `RoleRegistry`, not by account constraints,
//! so a rejected caller always sees `Unauthorized`.

use anchor_lang::prelude::*;

use crate::events::RoleChanged;
use crate::state::{Distributor, Role};

/// # add_operator
///
/// ## Returns
///
/// * `Ok(())` - Operator added, or already present (no event)
/// * `Err(DistributorError::Unauthorized)` - Signer is not an admin
/// * `Err(DistributorError::RoleCapacityReached)` - Operator set is full
pub fn add_operator(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let change = ctx.accounts.distributor.roles.add_operator(&caller, principal)?;
    record(&mut ctx.accounts.distributor, change)
}

/// # revoke_operator
///
/// Idempotent: revoking a non-operator succeeds without an event.
pub fn revoke_operator(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let change = ctx
        .accounts
        .distributor
        .roles
        .revoke_operator(&caller, &principal)?;
    record(&mut ctx.accounts.distributor, change)
}

/// # grant_admin
pub fn grant_admin(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let change = ctx
        .accounts
        .distributor
        .roles
        .grant_role(&caller, Role::Admin, principal)?;
    record(&mut ctx.accounts.distributor, change)
}

/// # revoke_admin
///
/// * `Err(DistributorError::LastAdmin)` - `principal` is the only admin
pub fn revoke_admin(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let change = ctx
        .accounts
        .distributor
        .roles
        .revoke_role(&caller, Role::Admin, &principal)?;
    record(&mut ctx.accounts.distributor, change)
}

/// # renounce_role
///
/// The signer gives up its own `role`. Together with `grant_admin` this is
/// how admin duties are handed over.
pub fn renounce_role(ctx: Context<ManageRoles>, role: Role) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let change = ctx.accounts.distributor.roles.renounce_role(&caller, role)?;
    record(&mut ctx.accounts.distributor, change)
}

fn record(distributor: &mut Distributor, change: Option<RoleChanged>) -> Result<()> {
    let Some(event) = change else {
        msg!("Role membership unchanged");
        return Ok(());
    };

    distributor.last_updated = Clock::get()?.unix_timestamp;

    emit!(event);

    msg!(
        "{:?} {} {} by {}",
        event.role,
        if event.granted { "granted to" } else { "revoked from" },
        event.principal,
        event.sender
    );

    Ok(())
}

/// # ManageRoles Accounts
#[derive(Accounts)]
pub struct ManageRoles<'info> {
    /// The admin making the change (or the member renouncing).
    pub authority: Signer<'info>,

    /// The Distributor whose role sets change.
    #[account(
        mut,
        seeds = [Distributor::SEED_PREFIX],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,
}
