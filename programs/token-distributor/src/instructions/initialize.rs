//! # Initialize Instruction
//!
//! Creates the singleton `Distributor` account. Called ONCE right after the
//! program is deployed.
//!
//! ## Deployment Sequence:
//!
//! 1. Deploy the program
//! 2. Call `initialize` (the signer becomes the sole admin)
//! 3. Call `add_operator` for each operator
//! 4. Call `open_vault_account` for each mint the vault should hold
//! 5. Fund the vault (`deposit` or a plain SPL transfer to the vault ATA)

use anchor_lang::prelude::*;

use crate::events::RoleChanged;
use crate::state::{Distributor, Role, RoleRegistry};

/// # initialize
///
/// ## Security:
///
/// - The PDA seeds have no variable part, so a second call fails at `init`
/// - The signer becomes the only admin; there are no operators yet
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let clock = Clock::get()?;
    let deployer = ctx.accounts.admin.key();
    let distributor = &mut ctx.accounts.distributor;

    distributor.roles = RoleRegistry::bootstrap(deployer);
    distributor.bump = ctx.bumps.distributor;
    distributor.last_updated = clock.unix_timestamp;

    emit!(RoleChanged {
        role: Role::Admin,
        principal: deployer,
        granted: true,
        sender: deployer,
    });

    msg!("Distributor initialized with admin: {}", deployer);

    Ok(())
}

/// # Initialize Accounts
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The deployer; becomes the first admin and pays for the account.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The Distributor PDA.
    ///
    /// ## Seeds:
    /// Just ["distributor"] - global, so only ONE can exist.
    #[account(
        init,
        seeds = [Distributor::SEED_PREFIX],
        bump,
        payer = admin,
        space = Distributor::LEN
    )]
    pub distributor: Account<'info, Distributor>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}
