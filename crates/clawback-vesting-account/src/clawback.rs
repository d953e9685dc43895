//! The clawback computation and its execution.

use primitives_address::AccountAddress;
use primitives_coins::Coins;

use crate::{
    account::Account,
    traits::{AccountStore, FundsTransfer},
    types::ClawbackVestingAccount,
    Timestamp,
};

/// The result of a clawback computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clawback {
    /// The account state to replace the original one with.
    pub account: ClawbackVestingAccount,
    /// The coins going back to the funder.
    pub clawed_back: Coins,
}

impl ClawbackVestingAccount {
    /// Compute the outcome of a clawback at the `clawback_time`.
    ///
    /// The beneficiary keeps exactly what has vested by then. The vesting schedule is
    /// cut down to the periods that have already ended, and the lockup schedule is
    /// capped at the kept amount without moving any unlock instant. Start and end
    /// times are unchanged. The delegation pools are not touched: reconciling them
    /// with the reduced grant is up to the caller.
    ///
    /// Once everything has vested the account is returned as is.
    pub fn compute_clawback(&self, clawback_time: Timestamp) -> Clawback {
        let new_total = self.vested_coins(clawback_time);
        if new_total == self.original_vesting {
            return Clawback {
                account: self.clone(),
                clawed_back: Coins::new(),
            };
        }

        let vesting_periods = self
            .vesting_periods
            .matured_prefix(self.start_time, clawback_time);
        let lockup_periods = self.lockup_periods.capped(&new_total);
        let clawed_back = self.original_vesting.saturating_sub(&new_total);

        let account = Self {
            original_vesting: new_total,
            lockup_periods,
            vesting_periods,
            ..self.clone()
        };

        Clawback {
            account,
            clawed_back,
        }
    }
}

/// An error that can happen at [`execute_clawback`].
#[derive(Debug, thiserror::Error)]
pub enum ClawbackError<TransferError> {
    /// There is no account at the address.
    #[error("account {address} does not exist")]
    AccountNotFound {
        /// The address.
        address: AccountAddress,
    },
    /// The account at the address is not a clawback vesting account.
    #[error("account {address} is not a clawback vesting account")]
    NotClawbackAccount {
        /// The address.
        address: AccountAddress,
    },
    /// Moving the clawed back coins failed.
    #[error("unable to transfer clawed back coins: {0:?}")]
    Transfer(TransferError),
}

/// Claw back the unvested coins of the account at `address` as of `clawback_time`.
///
/// The clawed back coins are sent to the `destination`, or to the funder if there is
/// none, and the account is replaced with its reduced state. Nothing is sent if
/// everything has vested already. Returns the clawed back coins.
///
/// The host is expected to discard all the changes if this fails midway.
pub fn execute_clawback<AS, FT>(
    accounts: &mut AS,
    funds: &mut FT,
    address: &AccountAddress,
    destination: Option<&AccountAddress>,
    clawback_time: Timestamp,
) -> Result<Coins, ClawbackError<FT::Error>>
where
    AS: AccountStore,
    FT: FundsTransfer,
{
    let account = accounts
        .get(address)
        .ok_or(ClawbackError::AccountNotFound { address: *address })?
        .into_clawback_vesting()
        .ok_or(ClawbackError::NotClawbackAccount { address: *address })?;

    let Clawback {
        account,
        clawed_back,
    } = account.compute_clawback(clawback_time);

    let destination = destination.unwrap_or(account.funder());
    if !clawed_back.is_empty() {
        funds
            .send(address, destination, &clawed_back)
            .map_err(ClawbackError::Transfer)?;
    }

    tracing::info!(
        message = "Clawed back unvested coins",
        %address,
        %destination,
        %clawed_back,
        %clawback_time,
    );

    accounts.set(address, Account::ClawbackVesting(account));

    Ok(clawed_back)
}
