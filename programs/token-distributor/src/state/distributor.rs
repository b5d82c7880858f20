//! # Distributor Account Structure
//!
//! The singleton account of the program. It stores who may manage roles and
//! who may move tokens, and its PDA is the vault itself: every vault token
//! account is owned by this address, and holders approve this address as
//! delegate for `distribute_from`.
//!
//! ## Real-World Analogy:
//! Think of it as the strong room of a payroll office:
//! - The roster on the door says who may open it (roles)
//! - The drawers inside are the token accounts, one per currency (mint)
//! - Nothing about the drawer contents is written on the door; you count
//!   the drawer (query the token program) to know the balance

use anchor_lang::prelude::*;

use super::RoleRegistry;

/// # Distributor
///
/// ## Fields:
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | roles | RoleRegistry | Admin and Operator membership |
/// | bump | u8 | PDA bump seed |
/// | last_updated | i64 | Unix timestamp of the last role change |
///
/// ## Security Notes:
/// - There is exactly one Distributor per deployment (seeds have no
///   variable part)
/// - The PDA signs every outgoing token transfer; no private key exists
#[account]
pub struct Distributor {
    /// Role membership.
    ///
    /// Size: `RoleRegistry::LEN` bytes at capacity
    pub roles: RoleRegistry,

    /// The bump seed for PDA derivation.
    ///
    /// Size: 1 byte
    pub bump: u8,

    /// Unix timestamp of the last change to `roles`.
    /// Used for auditing and security monitoring.
    ///
    /// Size: 8 bytes
    pub last_updated: i64,
}

impl Distributor {
    /// The total space (in bytes) required to store this account.
    ///
    /// ## Calculation:
    /// - 8 bytes: Anchor discriminator
    /// - `RoleRegistry::LEN` bytes: roles at capacity
    /// - 1 byte: bump (u8)
    /// - 8 bytes: last_updated (i64)
    pub const LEN: usize = 8 + RoleRegistry::LEN + 1 + 8;

    /// Seed prefix for deriving the Distributor PDA.
    pub const SEED_PREFIX: &'static [u8] = b"distributor";
}
