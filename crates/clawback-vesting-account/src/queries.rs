//! Coin queries over the two schedules.
//!
//! Every query is recomputed from the full schedules at the given moment.

use primitives_coins::Coins;

use crate::{types::ClawbackVestingAccount, Timestamp};

impl ClawbackVestingAccount {
    /// The coins vested by the `moment`.
    pub fn vested_coins(&self, moment: Timestamp) -> Coins {
        self.vesting_periods.cumulative_amount(self.start_time, moment)
    }

    /// The coins not yet vested at the `moment`.
    pub fn vesting_coins(&self, moment: Timestamp) -> Coins {
        self.original_vesting.saturating_sub(&self.vested_coins(moment))
    }

    /// The coins unlocked by the `moment`.
    pub fn unlocked_coins(&self, moment: Timestamp) -> Coins {
        self.lockup_periods.cumulative_amount(self.start_time, moment)
    }

    /// The coins still locked up at the `moment`.
    pub fn locked_up_coins(&self, moment: Timestamp) -> Coins {
        self.original_vesting.saturating_sub(&self.unlocked_coins(moment))
    }

    /// The coins vested but still locked up at the `moment`.
    pub fn locked_up_vested_coins(&self, moment: Timestamp) -> Coins {
        self.vested_coins(moment).min(&self.locked_up_coins(moment))
    }

    /// The coins vested and unlocked at the `moment`.
    pub fn unlocked_vested_coins(&self, moment: Timestamp) -> Coins {
        let vested = self.vested_coins(moment);
        let locked_up_vested = vested.min(&self.locked_up_coins(moment));
        vested.saturating_sub(&locked_up_vested)
    }

    /// The coins that can not be spent at the `moment`.
    ///
    /// A coin is not spendable while it is either still vesting or still locked up;
    /// both restrictions count against the same original amount, so the tighter one
    /// wins in every denomination.
    pub fn locked_coins(&self, moment: Timestamp) -> Coins {
        self.vesting_coins(moment).max(&self.locked_up_coins(moment))
    }

    /// The part of the `balance` that can be spent at the `moment`.
    pub fn spendable_coins(&self, balance: &Coins, moment: Timestamp) -> Coins {
        balance.saturating_sub(&self.locked_coins(moment))
    }

    /// Whether anything is still not spendable at the `moment`.
    pub fn has_locked_coins(&self, moment: Timestamp) -> bool {
        !self.locked_coins(moment).is_empty()
    }

    /// The number of vesting periods that have ended by the `moment`.
    pub fn passed_vesting_period_count(&self, moment: Timestamp) -> usize {
        self.vesting_periods.passed_period_count(self.start_time, moment)
    }
}
