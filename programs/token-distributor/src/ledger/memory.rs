//! In-memory [`TokenLedger`] with standard fungible-token semantics, used as
//! the deterministic token service in unit tests.

use std::collections::{BTreeMap, BTreeSet};

use anchor_lang::prelude::*;

use super::TokenLedger;
use crate::errors::DistributorError;

#[derive(Clone, Debug, Default)]
pub struct Books {
    balances: BTreeMap<Pubkey, u64>,
    allowances: BTreeMap<(Pubkey, Pubkey), u64>,
}

#[derive(Clone, Debug)]
pub struct MemoryTokenLedger {
    token: Pubkey,
    vault: Pubkey,
    books: Books,
    // accounts refusing incoming transfers, like frozen SPL accounts
    frozen: BTreeSet<Pubkey>,
}

impl MemoryTokenLedger {
    pub fn new(token: Pubkey, vault: Pubkey) -> Self {
        Self {
            token,
            vault,
            books: Books::default(),
            frozen: BTreeSet::new(),
        }
    }

    pub fn mint(&mut self, to: &Pubkey, amount: u64) {
        *self.books.balances.entry(*to).or_default() += amount;
    }

    pub fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u64) {
        self.books.allowances.insert((*owner, *spender), amount);
    }

    pub fn freeze(&mut self, account: &Pubkey) {
        self.frozen.insert(*account);
    }

    pub fn balance(&self, owner: &Pubkey) -> u64 {
        self.books.balances.get(owner).copied().unwrap_or(0)
    }

    /// Owner-signed transfer, e.g. a deposit into the vault.
    pub fn move_balance(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.frozen.contains(to), DistributorError::InvalidTokenAccount);
        require!(
            self.balance(from) >= amount,
            DistributorError::InsufficientBalance
        );

        *self.books.balances.entry(*from).or_default() -= amount;
        let credited = self
            .balance(to)
            .checked_add(amount)
            .ok_or(DistributorError::Overflow)?;
        self.books.balances.insert(*to, credited);
        Ok(())
    }
}

impl TokenLedger for MemoryTokenLedger {
    type Checkpoint = Books;

    fn token(&self) -> Pubkey {
        self.token
    }

    fn vault(&self) -> Pubkey {
        self.vault
    }

    fn balance_of(&self, owner: &Pubkey) -> Result<u64> {
        Ok(self.balance(owner))
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u64> {
        Ok(self
            .books
            .allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0))
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let vault = self.vault;
        self.move_balance(&vault, to, amount)
    }

    fn transfer_from(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let spender = self.vault;
        let allowance = self.allowance(from, &spender)?;
        require!(
            allowance >= amount,
            DistributorError::InsufficientAllowance
        );

        self.move_balance(from, to, amount)?;
        self.books
            .allowances
            .insert((*from, spender), allowance - amount);
        Ok(())
    }

    fn checkpoint(&self) -> Books {
        self.books.clone()
    }

    fn rollback(&mut self, checkpoint: Books) {
        self.books = checkpoint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error;

    #[test]
    fn transfer_from_consumes_allowance() {
        let vault = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        let mut ledger = MemoryTokenLedger::new(Pubkey::new_unique(), vault);
        ledger.mint(&holder, 10);
        ledger.approve(&holder, &vault, 4);

        ledger.transfer_from(&holder, &to, 3).unwrap();
        assert_eq!(ledger.allowance(&holder, &vault).unwrap(), 1);
        assert_eq!(ledger.balance(&to), 3);

        assert_error(
            ledger.transfer_from(&holder, &to, 2),
            DistributorError::InsufficientAllowance,
        );
        assert_eq!(ledger.balance(&holder), 7);
    }

    #[test]
    fn rollback_restores_balances() {
        let vault = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        let mut ledger = MemoryTokenLedger::new(Pubkey::new_unique(), vault);
        ledger.mint(&vault, 5);

        let checkpoint = ledger.checkpoint();
        ledger.transfer(&to, 5).unwrap();
        ledger.rollback(checkpoint);

        assert_eq!(ledger.balance(&vault), 5);
        assert_eq!(ledger.balance(&to), 0);
    }
}
