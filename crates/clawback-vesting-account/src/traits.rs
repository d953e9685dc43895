//! Traits we use and expose.
//!
//! These are the contracts of the host components the vesting logic relies on.

use primitives_address::AccountAddress;
use primitives_coins::{Balance, Coins, Denom};

use crate::account::Account;

/// The account storage.
pub trait AccountStore {
    /// Get the account stored at the `address`, if any.
    fn get(&self, address: &AccountAddress) -> Option<Account>;

    /// Store the `account` at the `address`, replacing whatever was there.
    fn set(&mut self, address: &AccountAddress, account: Account);
}

/// The balance storage.
pub trait BalanceStore {
    /// The balance of the given `denom` held at the `address`.
    fn balance(&self, address: &AccountAddress, denom: &Denom) -> Balance;
}

/// The staking configuration.
pub trait StakingInfo {
    /// The single denomination accepted for bonding.
    fn bond_denom(&self) -> Denom;
}

/// The funds movement.
pub trait FundsTransfer {
    /// An error that can occur while sending the funds.
    type Error;

    /// Move the `coins` from one account to another.
    fn send(
        &mut self,
        from: &AccountAddress,
        to: &AccountAddress,
        coins: &Coins,
    ) -> Result<(), Self::Error>;
}
