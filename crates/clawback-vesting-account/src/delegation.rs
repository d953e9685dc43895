//! Tracking of the delegated amounts.
//!
//! The account keeps two accumulators: how much of the currently delegated balance
//! was drawn from the coins that were still vesting at delegation time, and how much
//! from the coins that were already free. Bookkeeping errors here can only come from
//! a broken caller, so they are reported as [`InvariantViolation`]s rather than
//! ordinary failures.

use primitives_coins::{Balance, Coin, Coins, CoinsError, Denom};

use crate::{types::ClawbackVestingAccount, Timestamp};

/// A delegation bookkeeping invariant was broken.
///
/// This is never expected in correct operation: it means the layer above let through
/// an impossible delegation or undelegation. The caller must abort the whole operation.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Delegating more than the account balance.
    #[error("delegation of {requested}{denom} exceeds the balance of {balance}{denom}")]
    DelegationExceedsBalance {
        /// The denomination.
        denom: Denom,
        /// The account balance.
        balance: Balance,
        /// The amount requested to be delegated.
        requested: Balance,
    },
    /// Undelegating more than is tracked as delegated.
    #[error("undelegation of {requested}{denom} exceeds the delegated {delegated}{denom}")]
    UndelegationExceedsDelegated {
        /// The denomination.
        denom: Denom,
        /// The amount tracked as delegated.
        delegated: Balance,
        /// The amount requested to be undelegated.
        requested: Balance,
    },
    /// A tracked amount does not fit the balance type.
    #[error("delegation tracking overflow in {denom}")]
    Overflow {
        /// The denomination.
        denom: Denom,
    },
}

/// Add `amount` of `denom` to the pool, skipping zero amounts.
fn credit(pool: &Coins, denom: &Denom, amount: Balance) -> Result<Coins, InvariantViolation> {
    if amount == 0 {
        return Ok(pool.clone());
    }
    pool.checked_add(&Coin::new(denom.clone(), amount).into())
        .map_err(|_| InvariantViolation::Overflow {
            denom: denom.clone(),
        })
}

/// Take `amount` of `denom` from the pool, skipping zero amounts.
fn debit(pool: &Coins, denom: &Denom, amount: Balance) -> Result<Coins, InvariantViolation> {
    if amount == 0 {
        return Ok(pool.clone());
    }
    pool.checked_sub(&Coin::new(denom.clone(), amount).into())
        .map_err(|err| match err {
            CoinsError::Underflow {
                available,
                requested,
                ..
            } => InvariantViolation::UndelegationExceedsDelegated {
                denom: denom.clone(),
                delegated: available,
                requested,
            },
            CoinsError::Overflow { .. } | CoinsError::DuplicateDenom { .. } => {
                InvariantViolation::Overflow {
                    denom: denom.clone(),
                }
            }
        })
}

impl ClawbackVestingAccount {
    /// Track a delegation of `amount` made at `block_time` out of the given `balance`.
    ///
    /// In every denomination the part still vesting and not yet delegated is
    /// attributed to the delegated vesting pool first, the rest to the delegated free
    /// pool. The caller must make sure the balance covers the amount; the account is
    /// left untouched if it does not.
    pub fn track_delegation(
        &mut self,
        block_time: Timestamp,
        balance: &Coins,
        amount: &Coins,
    ) -> Result<(), InvariantViolation> {
        let vesting = self.vesting_coins(block_time);

        let mut delegated_vesting = self.delegated_vesting.clone();
        let mut delegated_free = self.delegated_free.clone();

        for (denom, requested) in amount.iter() {
            let available = balance.amount_of(denom.as_str());
            if available < requested {
                return Err(InvariantViolation::DelegationExceedsBalance {
                    denom: denom.clone(),
                    balance: available,
                    requested,
                });
            }

            let vesting_amount = vesting.amount_of(denom.as_str());
            let already_delegated = delegated_vesting.amount_of(denom.as_str());

            let from_vesting = vesting_amount
                .saturating_sub(already_delegated)
                .min(requested);
            let from_free = requested - from_vesting;

            delegated_vesting = credit(&delegated_vesting, denom, from_vesting)?;
            delegated_free = credit(&delegated_free, denom, from_free)?;
        }

        self.delegated_vesting = delegated_vesting;
        self.delegated_free = delegated_free;
        Ok(())
    }

    /// Track an undelegation of `amount`.
    ///
    /// In every denomination the delegated free pool is drawn down first, then the
    /// delegated vesting pool. The account is left untouched if more is undelegated
    /// than is tracked.
    pub fn track_undelegation(&mut self, amount: &Coins) -> Result<(), InvariantViolation> {
        let mut delegated_vesting = self.delegated_vesting.clone();
        let mut delegated_free = self.delegated_free.clone();

        for (denom, requested) in amount.iter() {
            let free = delegated_free.amount_of(denom.as_str());
            let vesting = delegated_vesting.amount_of(denom.as_str());
            let delegated = free.saturating_add(vesting);
            if delegated < requested {
                return Err(InvariantViolation::UndelegationExceedsDelegated {
                    denom: denom.clone(),
                    delegated,
                    requested,
                });
            }

            let from_free = free.min(requested);
            let from_vesting = requested - from_free;

            delegated_free = debit(&delegated_free, denom, from_free)?;
            delegated_vesting = debit(&delegated_vesting, denom, from_vesting)?;
        }

        self.delegated_vesting = delegated_vesting;
        self.delegated_free = delegated_free;
        Ok(())
    }
}
