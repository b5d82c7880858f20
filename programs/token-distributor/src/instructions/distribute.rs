//! # Distribute Instruction
//!
//! Push model: tokens already sitting in the vault are sent to many
//! recipients at once.
//!
//! ```text
//! Vault Token Account (3)
//!        │
//!        ├──1──> R1 token account
//!        └──2──> R2 token account
//!
//! TokenDistribution { token, source: distributor PDA, total_amount: 3 }
//! ```
//!
//! ## Remaining Accounts:
//!
//! One writable token account of `mint` per distinct recipient, owned by that
//! recipient. Order does not matter; a recipient listed twice needs its
//! account only once.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::ledger::{self, spl::SplTokenLedger};
use crate::state::Distributor;

/// # distribute
///
/// ## Arguments
///
/// * `recipients` - Wallets to pay, in order
/// * `amounts` - Amount for each wallet, same length as `recipients`
///
/// ## Returns
///
/// * `Ok(())` - Every transfer succeeded
/// * `Err(DistributorError::Unauthorized)` - Signer is not an operator
/// * `Err(DistributorError::InvalidInput)` - Empty or mismatched lists
/// * `Err(DistributorError::InsufficientBalance)` - Vault holds less than the sum
/// * `Err(DistributorError::TokenAccountMissing)` - A recipient has no account in `remaining_accounts`
///
/// Any error leaves every balance untouched.
pub fn distribute<'info>(
    ctx: Context<'_, '_, 'info, 'info, Distribute<'info>>,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let bump = [ctx.accounts.distributor.bump];
    let seeds: &[&[u8]] = &[Distributor::SEED_PREFIX, &bump];
    let signer_seeds = &[seeds];

    let mut token_ledger = SplTokenLedger::new(
        ctx.accounts.mint.key(),
        ctx.accounts.distributor.to_account_info(),
        signer_seeds,
        ctx.accounts.token_program.to_account_info(),
    )
    .with_vault_account(ctx.accounts.vault_token_account.to_account_info())?
    .with_participants(ctx.remaining_accounts.iter().cloned());

    let event = ledger::distribute(
        &ctx.accounts.distributor.roles,
        &ctx.accounts.operator.key(),
        &mut token_ledger,
        recipients,
        amounts,
    )?;

    emit!(event);

    msg!(
        "Distributed {} of {} from vault to {} recipients",
        event.total_amount,
        event.token,
        event.recipient_count
    );

    Ok(())
}

/// # Distribute Accounts
#[derive(Accounts)]
pub struct Distribute<'info> {
    /// The operator running the batch.
    pub operator: Signer<'info>,

    #[account(
        seeds = [Distributor::SEED_PREFIX],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    pub mint: Account<'info, Mint>,

    /// Vault's token account (source of every transfer).
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = distributor
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
