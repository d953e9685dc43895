//! Custom types we use.

use codec::{Decode, Encode};
use primitives_address::AccountAddress;
use primitives_coins::Coins;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::{account::BaseAccount, validate::ValidationError, Periods, Timestamp};

/// The grant a funder supplies when creating a clawback vesting account.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grant {
    /// The address allowed to reclaim the unvested coins.
    pub funder: AccountAddress,
    /// The total amount granted.
    pub original_vesting: Coins,
    /// The moment both schedules start at.
    pub start_time: Timestamp,
    /// The final maturity moment.
    ///
    /// When not given, the end of the longer of the two schedules is used.
    #[serde(default)]
    pub end_time: Option<Timestamp>,
    /// The schedule by which the granted coins become transferable.
    pub lockup_periods: Periods,
    /// The schedule by which the granted coins become owned.
    pub vesting_periods: Periods,
}

/// A vesting account whose unvested coins can be clawed back by the funder.
///
/// The fields are only reachable through accessors: the schedules are checked against
/// the original vesting amount and the end time at construction and the account is
/// kept consistent by the operations defined on it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, TypeInfo, Serialize)]
pub struct ClawbackVestingAccount {
    pub(crate) base: BaseAccount,
    pub(crate) funder: AccountAddress,
    pub(crate) original_vesting: Coins,
    pub(crate) start_time: Timestamp,
    pub(crate) end_time: Timestamp,
    pub(crate) lockup_periods: Periods,
    pub(crate) vesting_periods: Periods,
    pub(crate) delegated_vesting: Coins,
    pub(crate) delegated_free: Coins,
}

impl ClawbackVestingAccount {
    /// Create a new clawback vesting account from the grant, validating it.
    pub fn new(base: BaseAccount, grant: Grant) -> Result<Self, ValidationError> {
        let Grant {
            funder,
            original_vesting,
            start_time,
            end_time,
            lockup_periods,
            vesting_periods,
        } = grant;

        let end_time = match end_time {
            Some(end_time) => end_time,
            None => {
                let lockup_end = lockup_periods
                    .end(start_time)
                    .ok_or(ValidationError::LockupExtendsBeyondEnd)?;
                let vesting_end = vesting_periods
                    .end(start_time)
                    .ok_or(ValidationError::VestingExtendsBeyondEnd)?;
                lockup_end.max(vesting_end)
            }
        };

        let account = Self {
            base,
            funder,
            original_vesting,
            start_time,
            end_time,
            lockup_periods,
            vesting_periods,
            delegated_vesting: Coins::new(),
            delegated_free: Coins::new(),
        };
        account.validate()?;
        Ok(account)
    }

    /// The underlying base account.
    pub fn base(&self) -> &BaseAccount {
        &self.base
    }

    /// The account address.
    pub fn address(&self) -> &AccountAddress {
        &self.base.address
    }

    /// The funder address.
    pub fn funder(&self) -> &AccountAddress {
        &self.funder
    }

    /// The total amount under the schedules.
    pub fn original_vesting(&self) -> &Coins {
        &self.original_vesting
    }

    /// The moment both schedules start at.
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// The final maturity moment.
    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }

    /// The lockup schedule.
    pub fn lockup_periods(&self) -> &Periods {
        &self.lockup_periods
    }

    /// The vesting schedule.
    pub fn vesting_periods(&self) -> &Periods {
        &self.vesting_periods
    }

    /// The delegated amount that was drawn from the vesting coins.
    pub fn delegated_vesting(&self) -> &Coins {
        &self.delegated_vesting
    }

    /// The delegated amount that was drawn from the free coins.
    pub fn delegated_free(&self) -> &Coins {
        &self.delegated_free
    }
}

impl Decode for ClawbackVestingAccount {
    fn decode<I: codec::Input>(input: &mut I) -> Result<Self, codec::Error> {
        let account = Self {
            base: Decode::decode(input)?,
            funder: Decode::decode(input)?,
            original_vesting: Decode::decode(input)?,
            start_time: Decode::decode(input)?,
            end_time: Decode::decode(input)?,
            lockup_periods: Decode::decode(input)?,
            vesting_periods: Decode::decode(input)?,
            delegated_vesting: Decode::decode(input)?,
            delegated_free: Decode::decode(input)?,
        };
        account
            .validate()
            .map_err(|_| "invalid clawback vesting account")?;
        Ok(account)
    }
}
