//! # Instructions Module
//!
//! Every instruction the Token Distributor exposes. Handlers load accounts,
//! hand the work to `RoleRegistry` or the `ledger` core, and emit the
//! resulting event.
//!
//! ## Available Instructions:
//!
//! | Instruction | Who Can Call | Description |
//! |-------------|--------------|-------------|
//! | `initialize` | Deployer (once) | Create the Distributor, signer becomes admin |
//! | `add_operator` / `revoke_operator` | Admin | Manage operators |
//! | `grant_admin` / `revoke_admin` | Admin | Manage admins |
//! | `renounce_role` | Any member | Leave a role |
//! | `open_vault_account` | Anyone | Create the vault ATA for a mint |
//! | `deposit` | Anyone | Fund the vault from own tokens |
//! | `withdraw` | Operator | Vault → one recipient |
//! | `distribute` | Operator | Vault → many recipients, atomically |
//! | `distribute_from` | Operator | Holder → many recipients, atomically |
//!
//! ## Instruction Flow:
//!
//! ```text
//! 1. Admin sets up:       initialize → add_operator
//!                                   ↓
//! 2. Vault gets a mint:   open_vault_account
//!                                   ↓
//! 3. Vault is funded:     deposit (or plain SPL transfer)
//!                                   ↓
//! 4. Operator pays out:   distribute / withdraw
//!
//!    Holder-funded:       holder approves PDA → distribute_from
//! ```

pub mod deposit;
pub mod distribute;
pub mod distribute_from;
pub mod initialize;
pub mod manage_roles;
pub mod open_vault_account;
pub mod withdraw;

pub use deposit::*;
pub use distribute::*;
pub use distribute_from::*;
pub use initialize::*;
pub use manage_roles::*;
pub use open_vault_account::*;
pub use withdraw::*;
