//! # Withdraw Instruction
//!
//! An operator moves tokens out of the vault to any recipient.
//!
//! ## What Happens During a Withdrawal:
//!
//! ```text
//! BEFORE:                              AFTER:
//!
//! Vault Token Account                  Vault Token Account
//! └── balance: 1000                    └── balance: 999 (-1)
//!
//! Recipient Token Account              Recipient Token Account
//! └── balance: 0                       └── balance: 1 (+1)
//! ```
//!
//! ## PDA Signing:
//!
//! The vault token account is owned by the Distributor PDA, so the program
//! signs the transfer with the PDA seeds `["distributor", bump]`.
//!
//! ## Security:
//!
//! - Only operators can withdraw (admins are not implicitly operators)
//! - The vault balance is checked before the transfer; a shortfall fails
//!   with `InsufficientBalance` and emits nothing

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::ledger::{self, spl::SplTokenLedger};
use crate::state::Distributor;

/// # withdraw
///
/// ## Arguments
///
/// * `ctx` - Context containing all required accounts
/// * `amount` - Amount to withdraw (base units of the mint)
///
/// ## Returns
///
/// * `Ok(())` - Withdrawal successful
/// * `Err(DistributorError::Unauthorized)` - Signer is not an operator
/// * `Err(DistributorError::InsufficientBalance)` - Vault holds less than `amount`
///
/// ## Example (TypeScript client):
///
/// ```typescript
/// await program.methods
///     .withdraw(new BN(1_000_000))
///     .accounts({
///         operator: operator.publicKey,
///         distributor: distributorPda,
///         mint: mint,
///         vaultTokenAccount: vaultAta,
///         recipientTokenAccount: recipientAta,
///         tokenProgram: TOKEN_PROGRAM_ID,
///     })
///     .signers([operator])
///     .rpc();
/// ```
pub fn withdraw(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let bump = [ctx.accounts.distributor.bump];
    let seeds: &[&[u8]] = &[Distributor::SEED_PREFIX, &bump];
    let signer_seeds = &[seeds];

    let recipient = ctx.accounts.recipient_token_account.owner;

    let mut token_ledger = SplTokenLedger::new(
        ctx.accounts.mint.key(),
        ctx.accounts.distributor.to_account_info(),
        signer_seeds,
        ctx.accounts.token_program.to_account_info(),
    )
    .with_vault_account(ctx.accounts.vault_token_account.to_account_info())?
    .with_participants([ctx.accounts.recipient_token_account.to_account_info()]);

    let event = ledger::withdraw(
        &ctx.accounts.distributor.roles,
        &ctx.accounts.operator.key(),
        &mut token_ledger,
        recipient,
        amount,
    )?;

    emit!(event);

    msg!(
        "Withdrew {} of {} to {}",
        event.amount,
        event.token,
        event.recipient
    );

    Ok(())
}

/// # WithdrawTokens Accounts
#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    /// The operator requesting the withdrawal.
    pub operator: Signer<'info>,

    #[account(
        seeds = [Distributor::SEED_PREFIX],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    pub mint: Account<'info, Mint>,

    /// Vault's token account (source of withdrawal).
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = distributor
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    /// Destination; its owner is the recipient reported in `Withdrawal`.
    #[account(
        mut,
        token::mint = mint
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    /// SPL Token Program.
    pub token_program: Program<'info, Token>,
}
