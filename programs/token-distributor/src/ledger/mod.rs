//! # Distribution Ledger
//!
//! The core of the program: withdrawals and batch distributions, written
//! against the [`TokenLedger`] interface instead of the SPL Token program
//! directly. The instruction handlers plug in [`spl::SplTokenLedger`]; tests
//! plug in an in-memory ledger.
//!
//! ## Call Flow:
//!
//! ```text
//! distribute(token, [R1, R2], [1, 2])
//!        ↓
//! 1. RoleRegistry::require_role(caller, Operator)   → Unauthorized
//!        ↓
//! 2. DistributionRequest::new(recipients, amounts)   → InvalidInput
//!        ↓
//! 3. Preflight against the batch total              → InsufficientBalance
//!        ↓
//! 4. Apply transfers in order under a checkpoint    → rollback on failure
//!        ↓
//! 5. TokenDistribution { token, source, total: 3 }
//! ```
//!
//! ## Atomicity:
//!
//! A batch either lands completely or not at all. The preflight rejects
//! everything a standards-compliant token would reject, before the first
//! transfer. Anything failing later (a frozen recipient account, say) rolls
//! the ledger back to the checkpoint taken before the first transfer.

use anchor_lang::prelude::*;

use crate::errors::DistributorError;
use crate::events::{TokenDistribution, Withdrawal};
use crate::state::{Role, RoleRegistry};

#[cfg(test)]
pub mod memory;
pub mod spl;

/// # TokenLedger
///
/// One fungible token (mint) as seen from the vault.
///
/// `transfer` moves tokens out of the vault's own balance; `transfer_from`
/// moves a third party's tokens with the vault acting as approved spender.
/// Implementations report shortfalls as `InsufficientBalance` /
/// `InsufficientAllowance`.
pub trait TokenLedger {
    /// State captured by [`TokenLedger::checkpoint`].
    type Checkpoint;

    /// The mint this ledger moves.
    fn token(&self) -> Pubkey;

    /// The vault principal (the Distributor PDA on-chain).
    fn vault(&self) -> Pubkey;

    /// Balance held by `owner`.
    fn balance_of(&self, owner: &Pubkey) -> Result<u64>;

    /// How much `spender` may still move out of `owner`'s balance.
    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u64>;

    /// Move `amount` from the vault to `to`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;

    /// Move `amount` from `from` to `to`, consuming the vault's allowance.
    fn transfer_from(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;

    /// Fail if `to` cannot receive this token.
    fn ensure_recipient(&self, _to: &Pubkey) -> Result<()> {
        Ok(())
    }

    /// Capture the current balances.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Return to a previously captured state.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}

/// One (recipient, amount) pair of a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// # DistributionRequest
///
/// A validated batch: non-empty, recipients and amounts paired up in the
/// order they were supplied, total known not to overflow.
///
/// Recipients are neither deduplicated nor reordered. A recipient listed
/// twice receives both amounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionRequest {
    allocations: Vec<Allocation>,
    total: u64,
}

impl DistributionRequest {
    /// Maximum number of recipients per batch (one transaction's worth of
    /// transfer CPIs and accounts).
    pub const MAX_RECIPIENTS: usize = 25;

    /// Pair up `recipients` and `amounts`.
    ///
    /// ## Returns
    /// * `Err(InvalidInput)` - lengths differ or both are empty
    /// * `Err(BatchTooLarge)` - more than `MAX_RECIPIENTS` pairs
    /// * `Err(Overflow)` - amounts sum past `u64::MAX`
    pub fn new(recipients: Vec<Pubkey>, amounts: Vec<u64>) -> Result<Self> {
        require!(
            !recipients.is_empty() && recipients.len() == amounts.len(),
            DistributorError::InvalidInput
        );
        require!(
            recipients.len() <= Self::MAX_RECIPIENTS,
            DistributorError::BatchTooLarge
        );

        let total = amounts
            .iter()
            .try_fold(0u64, |sum, amount| sum.checked_add(*amount))
            .ok_or(DistributorError::Overflow)?;

        let allocations = recipients
            .into_iter()
            .zip(amounts)
            .map(|(recipient, amount)| Allocation { recipient, amount })
            .collect();

        Ok(Self { allocations, total })
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Sum of all amounts.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}

/// Whose balance funds a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FundingSource {
    /// The vault's own holdings (`distribute`)
    Vault,
    /// A holder who approved the vault as spender (`distribute_from`)
    Holder(Pubkey),
}

/// # withdraw
///
/// Move `amount` of the ledger's token from the vault to `recipient`.
///
/// ## Returns
/// * `Err(Unauthorized)` - caller is not an operator
/// * `Err(InsufficientBalance)` - raised by the token ledger, unchanged
pub fn withdraw<L: TokenLedger>(
    roles: &RoleRegistry,
    caller: &Pubkey,
    ledger: &mut L,
    recipient: Pubkey,
    amount: u64,
) -> Result<Withdrawal> {
    roles.require_role(caller, Role::Operator)?;

    ledger.transfer(&recipient, amount)?;

    Ok(Withdrawal {
        token: ledger.token(),
        recipient,
        amount,
    })
}

/// # distribute
///
/// Push tokens from the vault to every recipient, as one unit.
pub fn distribute<L: TokenLedger>(
    roles: &RoleRegistry,
    caller: &Pubkey,
    ledger: &mut L,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<TokenDistribution> {
    roles.require_role(caller, Role::Operator)?;
    let request = DistributionRequest::new(recipients, amounts)?;

    execute(ledger, FundingSource::Vault, &request)
}

/// # distribute_from
///
/// Pull tokens from `holder` and push them to every recipient, as one unit.
/// The holder must have approved the vault for at least the batch total.
pub fn distribute_from<L: TokenLedger>(
    roles: &RoleRegistry,
    caller: &Pubkey,
    ledger: &mut L,
    holder: Pubkey,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<TokenDistribution> {
    roles.require_role(caller, Role::Operator)?;
    let request = DistributionRequest::new(recipients, amounts)?;

    execute(ledger, FundingSource::Holder(holder), &request)
}

fn execute<L: TokenLedger>(
    ledger: &mut L,
    source: FundingSource,
    request: &DistributionRequest,
) -> Result<TokenDistribution> {
    preflight(ledger, source, request)?;
    apply(ledger, source, request)?;

    let source = match source {
        FundingSource::Vault => ledger.vault(),
        FundingSource::Holder(holder) => holder,
    };

    Ok(TokenDistribution {
        token: ledger.token(),
        source,
        total_amount: request.total(),
        recipient_count: request.len() as u32,
    })
}

/// Check the whole batch before the first transfer.
fn preflight<L: TokenLedger>(
    ledger: &L,
    source: FundingSource,
    request: &DistributionRequest,
) -> Result<()> {
    let total = request.total();
    let vault = ledger.vault();

    match source {
        FundingSource::Vault => {
            require!(
                ledger.balance_of(&vault)? >= total,
                DistributorError::InsufficientBalance
            );
        }
        FundingSource::Holder(holder) => {
            require!(
                ledger.allowance(&holder, &vault)? >= total,
                DistributorError::InsufficientAllowance
            );
            require!(
                ledger.balance_of(&holder)? >= total,
                DistributorError::InsufficientBalance
            );
        }
    }

    for allocation in request.allocations() {
        ledger.ensure_recipient(&allocation.recipient)?;
    }

    Ok(())
}

fn apply<L: TokenLedger>(
    ledger: &mut L,
    source: FundingSource,
    request: &DistributionRequest,
) -> Result<()> {
    let checkpoint = ledger.checkpoint();

    for allocation in request.allocations() {
        let outcome = match source {
            FundingSource::Vault => ledger.transfer(&allocation.recipient, allocation.amount),
            FundingSource::Holder(holder) => {
                ledger.transfer_from(&holder, &allocation.recipient, allocation.amount)
            }
        };

        if let Err(err) = outcome {
            ledger.rollback(checkpoint);
            return Err(err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::memory::MemoryTokenLedger;
    use super::*;
    use crate::test_utils::assert_error;

    struct Fixture {
        roles: RoleRegistry,
        admin: Pubkey,
        operator: Pubkey,
        ledger: MemoryTokenLedger,
    }

    impl Fixture {
        fn new() -> Self {
            let admin = Pubkey::new_unique();
            let operator = Pubkey::new_unique();
            let mut roles = RoleRegistry::bootstrap(admin);
            roles.add_operator(&admin, operator).unwrap();

            Self {
                roles,
                admin,
                operator,
                ledger: MemoryTokenLedger::new(Pubkey::new_unique(), Pubkey::new_unique()),
            }
        }

        fn vault(&self) -> Pubkey {
            self.ledger.vault()
        }

        fn fund_vault(&mut self, amount: u64) {
            let vault = self.vault();
            self.ledger.mint(&vault, amount);
        }

        /// A holder owning `balance` who approved the vault for `allowance`.
        fn holder(&mut self, balance: u64, allowance: u64) -> Pubkey {
            let holder = Pubkey::new_unique();
            let vault = self.vault();
            self.ledger.mint(&holder, balance);
            self.ledger.approve(&holder, &vault, allowance);
            holder
        }
    }

    fn recipients(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    #[test]
    fn request_rejects_mismatched_or_empty_input() {
        let two = recipients(2);
        assert_error(
            DistributionRequest::new(two.clone(), vec![1]),
            DistributorError::InvalidInput,
        );
        assert_error(
            DistributionRequest::new(two, vec![1, 2, 3]),
            DistributorError::InvalidInput,
        );
        assert_error(
            DistributionRequest::new(vec![], vec![]),
            DistributorError::InvalidInput,
        );
    }

    #[test]
    fn request_limits() {
        let max = DistributionRequest::MAX_RECIPIENTS;
        assert!(DistributionRequest::new(recipients(max), vec![1; max]).is_ok());
        assert_error(
            DistributionRequest::new(recipients(max + 1), vec![1; max + 1]),
            DistributorError::BatchTooLarge,
        );
        assert_error(
            DistributionRequest::new(recipients(2), vec![u64::MAX, 1]),
            DistributorError::Overflow,
        );
    }

    #[test]
    fn request_keeps_order_and_duplicates() {
        let r = recipients(2);
        let request = DistributionRequest::new(vec![r[1], r[0], r[1]], vec![5, 6, 7]).unwrap();
        assert_eq!(request.total(), 18);
        assert_eq!(
            request.allocations(),
            &[
                Allocation { recipient: r[1], amount: 5 },
                Allocation { recipient: r[0], amount: 6 },
                Allocation { recipient: r[1], amount: 7 },
            ]
        );
    }

    // ========================================
    // WITHDRAW
    // ========================================

    #[test]
    fn withdraw_moves_tokens_and_reports() {
        let mut fx = Fixture::new();
        fx.fund_vault(1_000);

        let event = withdraw(&fx.roles, &fx.operator, &mut fx.ledger, fx.operator, 1).unwrap();

        assert_eq!(
            event,
            Withdrawal {
                token: fx.ledger.token(),
                recipient: fx.operator,
                amount: 1,
            }
        );
        assert_eq!(fx.ledger.balance(&fx.operator), 1);
        assert_eq!(fx.ledger.balance(&fx.vault()), 999);
    }

    #[test]
    fn withdraw_without_funds_fails() {
        let mut fx = Fixture::new();

        assert_error(
            withdraw(&fx.roles, &fx.operator, &mut fx.ledger, fx.operator, 1),
            DistributorError::InsufficientBalance,
        );
        assert_eq!(fx.ledger.balance(&fx.operator), 0);
    }

    #[test]
    fn withdraw_requires_operator() {
        let mut fx = Fixture::new();
        fx.fund_vault(1_000);
        let outsider = Pubkey::new_unique();

        assert_error(
            withdraw(&fx.roles, &outsider, &mut fx.ledger, outsider, 1),
            DistributorError::Unauthorized,
        );
        // admin alone is not enough either
        assert_error(
            withdraw(&fx.roles, &fx.admin, &mut fx.ledger, fx.admin, 1),
            DistributorError::Unauthorized,
        );
        assert_eq!(fx.ledger.balance(&fx.vault()), 1_000);
        assert_eq!(fx.ledger.balance(&outsider), 0);
    }

    #[test]
    fn deposit_then_withdraw_round_trip() {
        let mut fx = Fixture::new();
        fx.fund_vault(40);
        let depositor = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        fx.ledger.mint(&depositor, 25);

        let vault = fx.vault();
        fx.ledger.move_balance(&depositor, &vault, 25).unwrap();
        withdraw(&fx.roles, &fx.operator, &mut fx.ledger, recipient, 25).unwrap();

        assert_eq!(fx.ledger.balance(&vault), 40);
        assert_eq!(fx.ledger.balance(&recipient), 25);
    }

    // ========================================
    // DISTRIBUTE
    // ========================================

    #[test]
    fn distribute_from_vault() {
        let mut fx = Fixture::new();
        fx.fund_vault(3);
        let r = recipients(2);

        let event =
            distribute(&fx.roles, &fx.operator, &mut fx.ledger, r.clone(), vec![1, 2]).unwrap();

        assert_eq!(
            event,
            TokenDistribution {
                token: fx.ledger.token(),
                source: fx.vault(),
                total_amount: 3,
                recipient_count: 2,
            }
        );
        assert_eq!(fx.ledger.balance(&fx.vault()), 0);
        assert_eq!(fx.ledger.balance(&r[0]), 1);
        assert_eq!(fx.ledger.balance(&r[1]), 2);
    }

    #[test]
    fn distribute_several_tokens_from_one_vault() {
        let admin = Pubkey::new_unique();
        let operator = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let mut roles = RoleRegistry::bootstrap(admin);
        roles.add_operator(&admin, operator).unwrap();

        let mut first = MemoryTokenLedger::new(Pubkey::new_unique(), vault);
        let mut second = MemoryTokenLedger::new(Pubkey::new_unique(), vault);
        first.mint(&vault, 1_000);
        second.mint(&vault, 1_000);

        let r = recipients(3);
        let amounts = vec![1, 2, 3];
        distribute(&roles, &operator, &mut first, r.clone(), amounts.clone()).unwrap();
        distribute(&roles, &operator, &mut second, r.clone(), amounts.clone()).unwrap();

        for (recipient, amount) in r.iter().zip(&amounts) {
            assert_eq!(first.balance(recipient), *amount);
            assert_eq!(second.balance(recipient), *amount);
        }
    }

    #[test]
    fn distribute_duplicate_recipient_receives_sum() {
        let mut fx = Fixture::new();
        fx.fund_vault(10);
        let r = Pubkey::new_unique();

        distribute(&fx.roles, &fx.operator, &mut fx.ledger, vec![r, r], vec![3, 4]).unwrap();

        assert_eq!(fx.ledger.balance(&r), 7);
        assert_eq!(fx.ledger.balance(&fx.vault()), 3);
    }

    #[test]
    fn distribute_short_vault_moves_nothing() {
        let mut fx = Fixture::new();
        fx.fund_vault(2);
        let r = recipients(2);

        assert_error(
            distribute(&fx.roles, &fx.operator, &mut fx.ledger, r.clone(), vec![1, 2]),
            DistributorError::InsufficientBalance,
        );
        assert_eq!(fx.ledger.balance(&fx.vault()), 2);
        assert_eq!(fx.ledger.balance(&r[0]), 0);
        assert_eq!(fx.ledger.balance(&r[1]), 0);
    }

    #[test]
    fn distribute_rolls_back_on_midway_failure() {
        let mut fx = Fixture::new();
        fx.fund_vault(100);
        let r = recipients(3);
        fx.ledger.freeze(&r[2]);

        assert_error(
            distribute(&fx.roles, &fx.operator, &mut fx.ledger, r.clone(), vec![10, 20, 30]),
            DistributorError::InvalidTokenAccount,
        );
        assert_eq!(fx.ledger.balance(&fx.vault()), 100);
        assert!(r.iter().all(|recipient| fx.ledger.balance(recipient) == 0));
    }

    #[test]
    fn distribute_checks_role_before_input() {
        let mut fx = Fixture::new();
        let outsider = Pubkey::new_unique();

        assert_error(
            distribute(&fx.roles, &outsider, &mut fx.ledger, vec![], vec![1]),
            DistributorError::Unauthorized,
        );
        assert_error(
            distribute(&fx.roles, &fx.operator, &mut fx.ledger, vec![], vec![1]),
            DistributorError::InvalidInput,
        );
    }

    #[test]
    fn revoked_operator_loses_access() {
        let mut fx = Fixture::new();
        fx.fund_vault(5);
        fx.roles.revoke_operator(&fx.admin, &fx.operator).unwrap();

        assert_error(
            distribute(&fx.roles, &fx.operator, &mut fx.ledger, recipients(1), vec![1]),
            DistributorError::Unauthorized,
        );
        assert_eq!(fx.ledger.balance(&fx.vault()), 5);
    }

    // ========================================
    // DISTRIBUTE FROM
    // ========================================

    #[test]
    fn distribute_from_holder() {
        let mut fx = Fixture::new();
        let holder = Pubkey::new_unique();
        let vault = fx.vault();
        fx.ledger.mint(&holder, 10);
        fx.ledger.approve(&holder, &vault, 6);
        let r = recipients(3);

        let event = distribute_from(
            &fx.roles,
            &fx.operator,
            &mut fx.ledger,
            holder,
            r.clone(),
            vec![1, 2, 3],
        )
        .unwrap();

        assert_eq!(event.source, holder);
        assert_eq!(event.total_amount, 6);
        assert_eq!(fx.ledger.balance(&holder), 4);
        assert_eq!(fx.ledger.balance(&r[0]), 1);
        assert_eq!(fx.ledger.balance(&r[1]), 2);
        assert_eq!(fx.ledger.balance(&r[2]), 3);
        assert_eq!(fx.ledger.allowance(&holder, &vault).unwrap(), 0);
        assert_eq!(fx.ledger.balance(&vault), 0);
    }

    #[test]
    fn distribute_from_needs_allowance_for_whole_batch() {
        let mut fx = Fixture::new();
        let holder = Pubkey::new_unique();
        let vault = fx.vault();
        fx.ledger.mint(&holder, 10);
        fx.ledger.approve(&holder, &vault, 5);
        let r = recipients(3);

        assert_error(
            distribute_from(&fx.roles, &fx.operator, &mut fx.ledger, holder, r.clone(), vec![1, 2, 3]),
            DistributorError::InsufficientAllowance,
        );
        assert_eq!(fx.ledger.balance(&holder), 10);
        assert_eq!(fx.ledger.allowance(&holder, &vault).unwrap(), 5);
        assert!(r.iter().all(|recipient| fx.ledger.balance(recipient) == 0));
    }

    #[test]
    fn distribute_from_short_holder_balance() {
        let mut fx = Fixture::new();
        let holder = Pubkey::new_unique();
        let vault = fx.vault();
        fx.ledger.mint(&holder, 5);
        fx.ledger.approve(&holder, &vault, 100);
        let r = recipients(3);

        assert_error(
            distribute_from(&fx.roles, &fx.operator, &mut fx.ledger, holder, r.clone(), vec![1, 2, 3]),
            DistributorError::InsufficientBalance,
        );
        assert_eq!(fx.ledger.balance(&holder), 5);
        assert_eq!(fx.ledger.allowance(&holder, &vault).unwrap(), 100);
    }

    #[test]
    fn distribute_from_does_not_touch_vault() {
        let mut fx = Fixture::new();
        fx.fund_vault(50);
        let holder = Pubkey::new_unique();

        assert_error(
            distribute_from(&fx.roles, &fx.operator, &mut fx.ledger, holder, recipients(1), vec![1]),
            DistributorError::InsufficientAllowance,
        );
        assert_eq!(fx.ledger.balance(&fx.vault()), 50);
    }

    #[test]
    fn distribute_from_rejects_bad_lists() {
        let mut fx = Fixture::new();
        let holder = fx.holder(10, 10);
        let r = recipients(2);

        assert_error(
            distribute_from(&fx.roles, &fx.operator, &mut fx.ledger, holder, r.clone(), vec![]),
            DistributorError::InvalidInput,
        );
        assert_error(
            distribute_from(&fx.roles, &fx.operator, &mut fx.ledger, holder, vec![], vec![]),
            DistributorError::InvalidInput,
        );
        assert_eq!(fx.ledger.balance(&holder), 10);
        assert_eq!(fx.ledger.allowance(&holder, &fx.vault()).unwrap(), 10);
    }

    #[test]
    fn distribute_from_requires_operator() {
        let mut fx = Fixture::new();
        let holder = fx.holder(10, 10);
        let outsider = Pubkey::new_unique();
        let r = recipients(1);

        assert_error(
            distribute_from(&fx.roles, &outsider, &mut fx.ledger, holder, r.clone(), vec![1]),
            DistributorError::Unauthorized,
        );
        assert_error(
            distribute_from(&fx.roles, &fx.admin, &mut fx.ledger, holder, r.clone(), vec![1]),
            DistributorError::Unauthorized,
        );
        assert_eq!(fx.ledger.balance(&holder), 10);
        assert_eq!(fx.ledger.balance(&r[0]), 0);
        assert_eq!(fx.ledger.allowance(&holder, &fx.vault()).unwrap(), 10);
    }

    #[test]
    fn distribute_from_rolls_back_on_midway_failure() {
        let mut fx = Fixture::new();
        let holder = fx.holder(10, 10);
        let r = recipients(2);
        fx.ledger.freeze(&r[1]);

        assert_error(
            distribute_from(&fx.roles, &fx.operator, &mut fx.ledger, holder, r.clone(), vec![3, 4]),
            DistributorError::InvalidTokenAccount,
        );
        assert_eq!(fx.ledger.balance(&holder), 10);
        assert_eq!(fx.ledger.balance(&r[0]), 0);
        assert_eq!(fx.ledger.balance(&r[1]), 0);
        // the first transfer's allowance is restored too
        assert_eq!(fx.ledger.allowance(&holder, &fx.vault()).unwrap(), 10);
    }

    proptest! {
        #[test]
        fn invalid_shapes_change_nothing(
            n_recipients in 0usize..6,
            n_amounts in 0usize..6,
            from_holder in any::<bool>(),
        ) {
            prop_assume!(n_recipients != n_amounts || n_recipients == 0);
            let mut fx = Fixture::new();
            fx.fund_vault(1_000);
            let holder = fx.holder(1_000, 1_000);
            let vault = fx.vault();
            let r = recipients(n_recipients);
            let amounts = vec![1; n_amounts];

            let outcome = if from_holder {
                distribute_from(&fx.roles, &fx.operator, &mut fx.ledger, holder, r.clone(), amounts)
            } else {
                distribute(&fx.roles, &fx.operator, &mut fx.ledger, r.clone(), amounts)
            };

            assert_error(outcome, DistributorError::InvalidInput);
            prop_assert_eq!(fx.ledger.balance(&vault), 1_000);
            prop_assert_eq!(fx.ledger.balance(&holder), 1_000);
            prop_assert_eq!(fx.ledger.allowance(&holder, &vault).unwrap(), 1_000);
            prop_assert!(r.iter().all(|recipient| fx.ledger.balance(recipient) == 0));
        }

        #[test]
        fn batches_apply_fully_or_not_at_all(
            funding in 0u64..200,
            amounts in prop::collection::vec(0u64..50, 1..DistributionRequest::MAX_RECIPIENTS),
        ) {
            let mut fx = Fixture::new();
            fx.fund_vault(funding);
            let r = recipients(amounts.len());
            let total: u64 = amounts.iter().sum();

            let outcome = distribute(&fx.roles, &fx.operator, &mut fx.ledger, r.clone(), amounts.clone());

            if total <= funding {
                prop_assert!(outcome.is_ok());
                prop_assert_eq!(fx.ledger.balance(&fx.vault()), funding - total);
                for (recipient, amount) in r.iter().zip(&amounts) {
                    prop_assert_eq!(fx.ledger.balance(recipient), *amount);
                }
            } else {
                prop_assert!(outcome.is_err());
                prop_assert_eq!(fx.ledger.balance(&fx.vault()), funding);
                prop_assert!(r.iter().all(|recipient| fx.ledger.balance(recipient) == 0));
            }
        }
    }
}
