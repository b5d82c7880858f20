//! # SPL Token Ledger
//!
//! [`TokenLedger`] backed by SPL token accounts. Each call moves tokens with a
//! `transfer` CPI into the token program, signed by the Distributor PDA:
//!
//! ```text
//! Distributor program                     SPL Token program
//!        │                                       │
//!        │  CPI: transfer(amount)                │
//!        │  from: vault / holder token account   │
//!        │  to: recipient token account          │
//!        │  authority: Distributor PDA (seeds)   │
//!        │──────────────────────────────────────>│
//! ```
//!
//! ## Mapping onto SPL:
//!
//! | Ledger concept | SPL |
//! |----------------|-----|
//! | principal | token account `owner` |
//! | vault balance | vault ATA owned by the Distributor PDA |
//! | allowance(holder, vault) | `delegated_amount` when `delegate` is the PDA |
//! | rollback | the runtime discards every write of a failed instruction |

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, TokenAccount, Transfer};

use super::TokenLedger;
use crate::errors::DistributorError;

/// Token accounts of one mint taking part in an instruction.
pub struct SplTokenLedger<'a, 'info> {
    mint: Pubkey,
    /// Distributor PDA; owner of the vault account and approved delegate.
    authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
    token_program: AccountInfo<'info>,
    vault_account: Option<AccountInfo<'info>>,
    /// Holder and recipient token accounts, keyed by token account owner.
    participants: BTreeMap<Pubkey, AccountInfo<'info>>,
    /// Attached accounts that are not token accounts of `mint`.
    rejected: usize,
}

impl<'a, 'info> SplTokenLedger<'a, 'info> {
    pub fn new(
        mint: Pubkey,
        authority: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
        token_program: AccountInfo<'info>,
    ) -> Self {
        Self {
            mint,
            authority,
            signer_seeds,
            token_program,
            vault_account: None,
            participants: BTreeMap::new(),
            rejected: 0,
        }
    }

    /// Attach the vault's token account for `mint`.
    pub fn with_vault_account(mut self, account: AccountInfo<'info>) -> Result<Self> {
        let vault = self.unpack(&account)?;
        require_keys_eq!(
            vault.owner,
            self.authority.key(),
            DistributorError::InvalidTokenAccount
        );
        self.vault_account = Some(account);
        Ok(self)
    }

    /// Attach holder and recipient token accounts, indexed by owner.
    ///
    /// Each account is unpacked once here. Accounts of another mint or
    /// program are set aside and only surface as `InvalidTokenAccount` when
    /// a lookup misses, which is after the caller has been authorized. If an
    /// owner appears twice, the first account wins.
    pub fn with_participants<I>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = AccountInfo<'info>>,
    {
        for info in accounts {
            match self.unpack(&info) {
                Ok(account) => {
                    self.participants.entry(account.owner).or_insert(info);
                }
                Err(_) => self.rejected += 1,
            }
        }
        self
    }

    fn unpack(&self, info: &AccountInfo<'info>) -> Result<TokenAccount> {
        require_keys_eq!(*info.owner, token::ID, DistributorError::InvalidTokenAccount);

        let data = info.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        let account = TokenAccount::try_deserialize(&mut slice)?;

        require_keys_eq!(account.mint, self.mint, DistributorError::InvalidTokenAccount);
        Ok(account)
    }

    /// Token account held by `owner`. The vault resolves to its own account.
    fn account_of(&self, owner: &Pubkey) -> Result<AccountInfo<'info>> {
        if *owner == self.authority.key() {
            if let Some(vault) = &self.vault_account {
                return Ok(vault.clone());
            }
        }

        if let Some(info) = self.participants.get(owner) {
            return Ok(info.clone());
        }

        if self.rejected > 0 {
            return err!(DistributorError::InvalidTokenAccount);
        }
        err!(DistributorError::TokenAccountMissing)
    }

    fn cpi_transfer(
        &self,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let cpi_context = CpiContext::new_with_signer(
            self.token_program.clone(),
            Transfer {
                from,
                to,
                authority: self.authority.clone(),
            },
            self.signer_seeds,
        );

        token::transfer(cpi_context, amount)
    }
}

impl<'a, 'info> TokenLedger for SplTokenLedger<'a, 'info> {
    type Checkpoint = ();

    fn token(&self) -> Pubkey {
        self.mint
    }

    fn vault(&self) -> Pubkey {
        self.authority.key()
    }

    fn balance_of(&self, owner: &Pubkey) -> Result<u64> {
        let info = self.account_of(owner)?;
        Ok(self.unpack(&info)?.amount)
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u64> {
        let info = self.account_of(owner)?;
        let account = self.unpack(&info)?;

        Ok(match account.delegate {
            COption::Some(delegate) if delegate == *spender => account.delegated_amount,
            _ => 0,
        })
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let from = self.account_of(&self.vault())?;
        require!(
            self.unpack(&from)?.amount >= amount,
            DistributorError::InsufficientBalance
        );

        let to = self.account_of(to)?;
        self.cpi_transfer(from, to, amount)
    }

    fn transfer_from(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let source = self.account_of(from)?;
        require!(
            self.allowance(from, &self.vault())? >= amount,
            DistributorError::InsufficientAllowance
        );
        require!(
            self.unpack(&source)?.amount >= amount,
            DistributorError::InsufficientBalance
        );

        let to = self.account_of(to)?;
        self.cpi_transfer(source, to, amount)
    }

    fn ensure_recipient(&self, to: &Pubkey) -> Result<()> {
        self.account_of(to).map(|_| ())
    }

    fn checkpoint(&self) {}

    // A failed instruction never commits, so there is nothing to undo here.
    fn rollback(&mut self, _checkpoint: ()) {}
}
