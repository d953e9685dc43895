//! The generic account and the vesting capability.

use codec::{Decode, Encode};
use primitives_address::AccountAddress;
use primitives_coins::Coins;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::{types::ClawbackVestingAccount, Timestamp};

/// An account without any balance restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseAccount {
    /// The account address.
    pub address: AccountAddress,
}

impl BaseAccount {
    /// Create a base account at the given address.
    pub fn new(address: AccountAddress) -> Self {
        Self { address }
    }
}

/// The capability of an account to restrict its balance by a vesting schedule.
pub trait VestingAccount {
    /// The coins vested by the `moment`.
    fn vested_coins(&self, moment: Timestamp) -> Coins;

    /// The coins still vesting at the `moment`.
    fn vesting_coins(&self, moment: Timestamp) -> Coins;
}

/// Any account known to the account store.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize)]
pub enum Account {
    /// An ordinary account.
    Base(BaseAccount),
    /// A clawback vesting account.
    ClawbackVesting(ClawbackVestingAccount),
}

impl Account {
    /// The account address.
    pub fn address(&self) -> &AccountAddress {
        match self {
            Self::Base(base) => &base.address,
            Self::ClawbackVesting(account) => account.address(),
        }
    }

    /// The vesting capability of the account, if it has one.
    pub fn as_vesting(&self) -> Option<&dyn VestingAccount> {
        match self {
            Self::Base(_) => None,
            Self::ClawbackVesting(account) => Some(account as &dyn VestingAccount),
        }
    }

    /// The clawback vesting account, if this is one.
    pub fn as_clawback_vesting(&self) -> Option<&ClawbackVestingAccount> {
        match self {
            Self::Base(_) => None,
            Self::ClawbackVesting(account) => Some(account),
        }
    }

    /// Take the clawback vesting account out, if this is one.
    pub fn into_clawback_vesting(self) -> Option<ClawbackVestingAccount> {
        match self {
            Self::Base(_) => None,
            Self::ClawbackVesting(account) => Some(account),
        }
    }
}

impl From<BaseAccount> for Account {
    fn from(account: BaseAccount) -> Self {
        Self::Base(account)
    }
}

impl From<ClawbackVestingAccount> for Account {
    fn from(account: ClawbackVestingAccount) -> Self {
        Self::ClawbackVesting(account)
    }
}

impl VestingAccount for ClawbackVestingAccount {
    fn vested_coins(&self, moment: Timestamp) -> Coins {
        ClawbackVestingAccount::vested_coins(self, moment)
    }

    fn vesting_coins(&self, moment: Timestamp) -> Coins {
        ClawbackVestingAccount::vesting_coins(self, moment)
    }
}
