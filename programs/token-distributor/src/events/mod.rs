//! # Events Module
//!
//! Events are the only externally observable side channel of the Token
//! Distributor besides account state. Indexers subscribe to them to follow
//! role changes, deposits, withdrawals and distributions.
//!
//! ## How to Listen for Events:
//!
//! ```javascript
//! program.addEventListener("TokenDistribution", (event) => {
//!     console.log(`${event.totalAmount} of ${event.token} sent from ${event.source}`);
//! });
//! ```
//!
//! The ledger core returns these structs; instruction handlers `emit!` them
//! once every transfer of the call has succeeded.

use anchor_lang::prelude::*;

use crate::state::Role;

/// # RoleChanged
///
/// Emitted when a principal gains or loses a role. Idempotent calls that do
/// not change membership emit nothing.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChanged {
    /// The role whose membership changed
    pub role: Role,
    /// The principal added to or removed from the role
    pub principal: Pubkey,
    /// `true` when granted, `false` when revoked or renounced
    pub granted: bool,
    /// The admin (or renouncing member) who made the change
    pub sender: Pubkey,
}

/// # Withdrawal
///
/// Emitted when an operator moves tokens out of the vault to a recipient.
///
/// ## Example Log:
/// ```text
/// Withdrawal {
///     token: "Mint1111...",
///     recipient: "7xKt9Fj2...",
///     amount: 1_000_000_000,
/// }
/// ```
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    /// Mint of the withdrawn token
    pub token: Pubkey,
    /// Wallet that received the tokens
    pub recipient: Pubkey,
    /// Amount withdrawn (base units)
    pub amount: u64,
}

/// # TokenDistribution
///
/// Emitted once per successful `distribute` / `distribute_from` call,
/// aggregating the whole batch.
///
/// ## Fields:
/// - `source`: the vault (Distributor PDA) for `distribute`, the holder for
///   `distribute_from`
/// - `total_amount`: sum of all amounts of the batch
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDistribution {
    /// Mint of the distributed token
    pub token: Pubkey,
    /// Whose balance funded the batch
    pub source: Pubkey,
    /// Sum of every amount in the batch
    pub total_amount: u64,
    /// Number of (recipient, amount) pairs processed
    pub recipient_count: u32,
}

/// # Deposit
///
/// Emitted when tokens are deposited through the `deposit` instruction.
/// Plain SPL transfers into a vault token account also fund the vault but
/// emit nothing from this program.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    /// Mint of the deposited token
    pub token: Pubkey,
    /// Wallet the tokens came from
    pub depositor: Pubkey,
    /// Amount deposited (base units)
    pub amount: u64,
}

/// # VaultAccountOpened
///
/// Emitted when the vault's token account for a new mint is created.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultAccountOpened {
    /// Mint the account holds
    pub token: Pubkey,
    /// Associated token account owned by the Distributor PDA
    pub token_account: Pubkey,
}
