//! # Error Handling Module
//!
//! Every failure the Token Distributor can report. Errors are terminal for the
//! instruction that raised them: nothing is retried internally, and the Solana
//! runtime discards all account writes of a failed instruction.
//!
//! ## How Errors Work in Anchor:
//!
//! ```rust,ignore
//! require!(!recipients.is_empty(), DistributorError::InvalidInput);
//! ```
//!
//! Anchor assigns error codes starting from 6000 (0x1770), one per variant
//! in declaration order.

use anchor_lang::prelude::*;

/// # DistributorError
///
/// | Category | Variants |
/// |----------|----------|
/// | Authorization | `Unauthorized`, `LastAdmin`, `RoleCapacityReached` |
/// | Input Validation | `InvalidInput`, `BatchTooLarge`, `InvalidAmount` |
/// | Balance | `InsufficientBalance`, `InsufficientAllowance` |
/// | Token Accounts | `InvalidTokenAccount`, `TokenAccountMissing` |
/// | Math | `Overflow` |
#[error_code]
pub enum DistributorError {
    // ============================================
    // AUTHORIZATION ERRORS
    // ============================================

    /// Caller does not hold the role the instruction requires.
    ///
    /// ## When this occurs:
    /// - A non-admin tries to add/revoke an operator or an admin
    /// - A non-operator calls `withdraw`, `distribute` or `distribute_from`
    #[msg("Caller is missing the role required for this action")]
    Unauthorized, // 6000

    /// The change would leave the distributor without any admin.
    #[msg("The last admin cannot be removed")]
    LastAdmin, // 6001

    /// The role set is full (account space is fixed at initialization).
    #[msg("Maximum number of members for this role reached")]
    RoleCapacityReached, // 6002

    // ============================================
    // INPUT VALIDATION ERRORS
    // ============================================

    /// Recipients and amounts differ in length, or are empty.
    ///
    /// ## When this occurs:
    /// - `distribute(token, [A, B], [1])`
    /// - `distribute(token, [], [])`
    ///
    /// Raised before any balance is touched.
    #[msg("Recipients and amounts must be non-empty and of equal length")]
    InvalidInput, // 6003

    /// More recipients than fit in one transaction.
    #[msg("Batch size too large")]
    BatchTooLarge, // 6004

    /// The amount provided is zero.
    #[msg("Amount must be greater than zero")]
    InvalidAmount, // 6005

    // ============================================
    // BALANCE ERRORS
    // ============================================

    /// The source (vault or holder) holds fewer tokens than requested.
    ///
    /// ## Example:
    /// ```text
    /// vault balance: 2
    /// distribute [1, 2] → total 3 → ERROR, nobody receives anything
    /// ```
    #[msg("Source balance is too low for this transfer")]
    InsufficientBalance, // 6006

    /// The holder has not approved the vault for the full batch total.
    ///
    /// Only raised by `distribute_from`.
    #[msg("Holder allowance to the vault is too low for this transfer")]
    InsufficientAllowance, // 6007

    // ============================================
    // TOKEN ACCOUNT ERRORS
    // ============================================

    /// A token account is not an SPL token account of the expected mint.
    #[msg("Token account is not owned by the token program or has the wrong mint")]
    InvalidTokenAccount, // 6008

    /// No token account was supplied for a principal taking part in the call.
    ///
    /// ## How to fix:
    /// Pass every recipient's token account in `remaining_accounts`.
    #[msg("No token account supplied for a recipient or source")]
    TokenAccountMissing, // 6009

    // ============================================
    // OVERFLOW/MATH ERRORS
    // ============================================

    /// Arithmetic overflow occurred.
    ///
    /// ## When this occurs:
    /// - The amounts of a batch sum past `u64::MAX`
    #[msg("Arithmetic overflow")]
    Overflow, // 6010
}
