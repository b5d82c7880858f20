//! # Deposit Instruction
//!
//! Moves tokens from the signer's own token account into the vault.
//!
//! A plain SPL transfer to the vault ATA funds the vault just as well; this
//! instruction exists so deposits show up as `Deposit` events for indexers.
//!
//! ## What Happens During a Deposit:
//!
//! ```text
//! BEFORE:                              AFTER:
//!
//! Depositor Token Account              Depositor Token Account
//! └── balance: 1000                    └── balance: 900 (-100)
//!
//! Vault Token Account                  Vault Token Account
//! └── balance: 500                     └── balance: 600 (+100)
//! ```
//!
//! The depositor signs the transaction, so no PDA signature is involved.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::errors::DistributorError;
use crate::events::Deposit;
use crate::state::Distributor;

/// # deposit
///
/// ## Arguments
///
/// * `ctx` - Context containing all required accounts
/// * `amount` - Amount to deposit (base units of the mint)
///
/// ## Returns
///
/// * `Ok(())` - Deposit successful
/// * `Err(DistributorError::InvalidAmount)` - Amount is zero
/// * `Err(DistributorError::InsufficientBalance)` - Depositor holds less than `amount`
pub fn deposit(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    // ===================================
    // STEP 1: Validate Input
    // ===================================

    require!(amount > 0, DistributorError::InvalidAmount);
    require!(
        ctx.accounts.depositor_token_account.amount >= amount,
        DistributorError::InsufficientBalance
    );

    // ===================================
    // STEP 2: Perform Token Transfer (CPI)
    // ===================================

    let cpi_context = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        },
    );

    token::transfer(cpi_context, amount)?;

    // ===================================
    // STEP 3: Emit Event
    // ===================================

    let token = ctx.accounts.mint.key();
    let depositor = ctx.accounts.depositor.key();

    emit!(Deposit {
        token,
        depositor,
        amount,
    });

    msg!("Deposited {} of {} from {}", amount, token, depositor);

    Ok(())
}

/// # DepositTokens Accounts
///
/// ```text
/// depositor (Signer)
///   │
///   └── owns ──> depositor_token_account ──tokens──> vault_token_account
///                                                         │
///                               owned by ── distributor (PDA)
/// ```
#[derive(Accounts)]
pub struct DepositTokens<'info> {
    /// The wallet funding the vault. Signs the token transfer.
    pub depositor: Signer<'info>,

    #[account(
        seeds = [Distributor::SEED_PREFIX],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    pub mint: Account<'info, Mint>,

    /// Source of the deposit; must belong to the depositor.
    #[account(
        mut,
        token::mint = mint,
        token::authority = depositor
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    /// The vault's ATA for `mint`.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = distributor
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
