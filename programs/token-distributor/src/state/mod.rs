//! # State Module
//!
//! Account structures stored on-chain by the Token Distributor.
//!
//! Token balances are deliberately absent: the SPL Token program is the only
//! source of truth for what the vault holds.

pub mod distributor;
pub mod role_registry;

pub use distributor::*;
pub use role_registry::*;
