//! # Open Vault Account Instruction
//!
//! Creates the vault's token account for one mint. The vault can hold any
//! number of mints; each needs its own Associated Token Account owned by the
//! Distributor PDA:
//!
//! ```text
//! Vault ATA Address = derive(distributor_pda, token_mint)
//! ```
//!
//! Anyone may pay for it. Opening it grants nobody any rights.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::events::VaultAccountOpened;
use crate::state::Distributor;

/// # open_vault_account
///
/// ## Errors:
/// - Account already exists (the ATA for this mint was opened before)
pub fn open_vault_account(ctx: Context<OpenVaultAccount>) -> Result<()> {
    let token = ctx.accounts.mint.key();
    let token_account = ctx.accounts.vault_token_account.key();

    emit!(VaultAccountOpened {
        token,
        token_account,
    });

    msg!("Vault token account {} opened for mint {}", token_account, token);

    Ok(())
}

/// # OpenVaultAccount Accounts
#[derive(Accounts)]
pub struct OpenVaultAccount<'info> {
    /// Pays the rent of the new token account.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Distributor PDA, future owner of the token account.
    #[account(
        seeds = [Distributor::SEED_PREFIX],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// The token the vault should be able to hold.
    pub mint: Account<'info, Mint>,

    /// The vault's ATA for `mint`.
    ///
    /// ### `associated_token::authority = distributor`
    /// The Distributor PDA (not the payer) controls the tokens.
    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = distributor
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
