// Suppress warnings from Anchor/Solana version mismatches
#![allow(unexpected_cfgs)]
#![allow(ambiguous_glob_reexports)]

//! # Token Distributor
//!
//! A Solana smart contract (Anchor program) holding a vault of SPL tokens
//! and paying them out to many recipients in one atomic instruction.
//!
//! ## Overview
//!
//! - **Roles**: an `Admin` set manages an `Operator` set (and itself)
//! - **Deposits**: anyone funds the vault, per mint
//! - **Withdrawals**: operators send vault tokens to a recipient
//! - **Distributions**: operators send vault tokens (`distribute`) or a
//!   holder's approved tokens (`distribute_from`) to up to 25 recipients,
//!   all or nothing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    TOKEN DISTRIBUTOR PROGRAM                     │
//! │                                                                  │
//! │  instructions/  ── load accounts, emit events                    │
//! │        │                                                         │
//! │        ▼                                                         │
//! │  ┌──────────────────┐      ┌─────────────────────────────────┐   │
//! │  │  RoleRegistry    │◄─────│  ledger (withdraw, distribute,  │   │
//! │  │  Admin/Operator  │ auth │  distribute_from)               │   │
//! │  └──────────────────┘      └─────────────────────────────────┘   │
//! │                                        │ TokenLedger             │
//! │                                        ▼                         │
//! │                            ledger::spl::SplTokenLedger           │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              │ CPI (signed by Distributor PDA)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      SPL TOKEN PROGRAM                           │
//! │              (Holds every balance, vault included)               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Model
//!
//! 1. **Role checks first**: every mutation is authorized before any
//!    account is written
//! 2. **PDA custody**: vault token accounts are owned by the Distributor
//!    PDA, which has no private key
//! 3. **Atomic batches**: a batch is checked as a whole before the first
//!    transfer, and a failed instruction commits nothing
//! 4. **Overflow Protection**: batch totals use checked arithmetic
//!
//! ## Instructions Summary
//!
//! | Instruction | Who Can Call | Description |
//! |-------------|--------------|-------------|
//! | `initialize` | Deployer (once) | Create the Distributor |
//! | `add_operator` / `revoke_operator` | Admin | Manage operators |
//! | `grant_admin` / `revoke_admin` | Admin | Manage admins |
//! | `renounce_role` | Any member | Leave a role |
//! | `open_vault_account` | Anyone | Create a vault ATA |
//! | `deposit` | Anyone | Fund the vault |
//! | `withdraw` | Operator | Vault → recipient |
//! | `distribute` | Operator | Vault → recipients |
//! | `distribute_from` | Operator | Holder → recipients |

use anchor_lang::prelude::*;

// Module declarations
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export for easier access
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

// Declare the program ID
// This is a placeholder - replace with actual program ID after deployment
declare_id!("Dstr1bXq8Y8cT1gH2v6wS3bqYjGv3pZ8nR4fK2mLxQ7e");

/// # Token Distributor Program
///
/// Each function is a thin entry point; the logic lives in `instructions`.
#[program]
pub mod token_distributor {
    use super::*;

    // ========================================
    // SETUP
    // ========================================

    /// Create the Distributor account. The signer becomes the only admin.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Create the vault's associated token account for a mint.
    pub fn open_vault_account(ctx: Context<OpenVaultAccount>) -> Result<()> {
        instructions::open_vault_account(ctx)
    }

    // ========================================
    // ROLE MANAGEMENT (Admin)
    // ========================================

    /// Grant `Operator` to `principal`.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not an admin
    /// - `RoleCapacityReached`: operator set is full
    pub fn add_operator(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
        instructions::add_operator(ctx, principal)
    }

    /// Revoke `Operator` from `principal`.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not an admin
    pub fn revoke_operator(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
        instructions::revoke_operator(ctx, principal)
    }

    /// Grant `Admin` to `principal`.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not an admin
    /// - `RoleCapacityReached`: admin set is full
    pub fn grant_admin(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
        instructions::grant_admin(ctx, principal)
    }

    /// Revoke `Admin` from `principal`.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not an admin
    /// - `LastAdmin`: `principal` is the only admin
    pub fn revoke_admin(ctx: Context<ManageRoles>, principal: Pubkey) -> Result<()> {
        instructions::revoke_admin(ctx, principal)
    }

    /// Drop the signer's own membership of `role`.
    ///
    /// ## Errors:
    /// - `LastAdmin`: signer is the only admin and `role` is `Admin`
    pub fn renounce_role(ctx: Context<ManageRoles>, role: Role) -> Result<()> {
        instructions::renounce_role(ctx, role)
    }

    // ========================================
    // VAULT OPERATIONS
    // ========================================

    /// Move `amount` from the signer's token account into the vault.
    ///
    /// ## Errors:
    /// - `InvalidAmount`: amount is 0
    pub fn deposit(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Send `amount` from the vault to the recipient token account.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not an operator
    /// - `InsufficientBalance`: vault holds less than `amount`
    pub fn withdraw(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Send `amounts[i]` from the vault to `recipients[i]` for every `i`,
    /// all or nothing. Recipient token accounts go in remaining accounts.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not an operator
    /// - `InvalidInput`: empty or mismatched lists
    /// - `InsufficientBalance`: vault holds less than the sum
    pub fn distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::distribute(ctx, recipients, amounts)
    }

    /// Send `amounts[i]` from `holder` to `recipients[i]` for every `i`,
    /// all or nothing, using the holder's approval to the Distributor PDA.
    ///
    /// ## Errors:
    /// - `Unauthorized`: signer is not an operator
    /// - `InvalidInput`: empty or mismatched lists
    /// - `InsufficientAllowance`: holder approved less than the sum
    /// - `InsufficientBalance`: holder holds less than the sum
    pub fn distribute_from<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeFrom<'info>>,
        holder: Pubkey,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::distribute_from(ctx, holder, recipients, amounts)
    }
}
