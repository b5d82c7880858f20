//! # Distribute From Instruction
//!
//! Pull model: tokens stay in the holder's own account until the moment they
//! are distributed. The holder first approves the Distributor PDA as
//! delegate (SPL `approve`) for at least the batch total.
//!
//! ```text
//! holder: approve(delegate = distributor PDA, 6)
//!        ↓
//! operator: distribute_from(holder, [R1, R2, R3], [1, 2, 3])
//!        ↓
//! Holder Token Account (-6) ──1──> R1, ──2──> R2, ──3──> R3
//! delegated_amount: 6 → 0
//! ```
//!
//! The allowance is checked against the whole batch before any transfer.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::DistributorError;
use crate::ledger::{self, spl::SplTokenLedger};
use crate::state::Distributor;

/// # distribute_from
///
/// ## Arguments
///
/// * `holder` - Wallet whose tokens are distributed
/// * `recipients` - Wallets to pay, in order
/// * `amounts` - Amount for each wallet, same length as `recipients`
///
/// ## Returns
///
/// * `Ok(())` - Every transfer succeeded
/// * `Err(DistributorError::Unauthorized)` - Signer is not an operator
/// * `Err(DistributorError::InvalidInput)` - Empty or mismatched lists
/// * `Err(DistributorError::InsufficientAllowance)` - Holder approved less than the sum
/// * `Err(DistributorError::InsufficientBalance)` - Holder holds less than the sum
pub fn distribute_from<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeFrom<'info>>,
    holder: Pubkey,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let bump = [ctx.accounts.distributor.bump];
    let seeds: &[&[u8]] = &[Distributor::SEED_PREFIX, &bump];
    let signer_seeds = &[seeds];

    let participants = std::iter::once(ctx.accounts.holder_token_account.to_account_info())
        .chain(ctx.remaining_accounts.iter().cloned());

    let mut token_ledger = SplTokenLedger::new(
        ctx.accounts.mint.key(),
        ctx.accounts.distributor.to_account_info(),
        signer_seeds,
        ctx.accounts.token_program.to_account_info(),
    )
    .with_participants(participants);

    let event = ledger::distribute_from(
        &ctx.accounts.distributor.roles,
        &ctx.accounts.operator.key(),
        &mut token_ledger,
        holder,
        recipients,
        amounts,
    )?;

    emit!(event);

    msg!(
        "Distributed {} of {} from {} to {} recipients",
        event.total_amount,
        event.token,
        event.source,
        event.recipient_count
    );

    Ok(())
}

/// # DistributeFrom Accounts
#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct DistributeFrom<'info> {
    /// The operator running the batch.
    pub operator: Signer<'info>,

    #[account(
        seeds = [Distributor::SEED_PREFIX],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    pub mint: Account<'info, Mint>,

    /// Holder's token account (source of every transfer).
    #[account(
        mut,
        token::mint = mint,
        constraint = holder_token_account.owner == holder @ DistributorError::InvalidTokenAccount
    )]
    pub holder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
