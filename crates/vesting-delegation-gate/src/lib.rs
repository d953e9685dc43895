//! The gate that keeps vesting accounts from bonding unvested coins.
//!
//! [`VestingDelegationDecorator`] runs as one step of the transaction validation
//! chain. Every delegating message of a transaction, including the ones wrapped into
//! an authorization envelope, is checked against the vesting state of its signers
//! before the rest of the chain gets to see the transaction.

use clawback_vesting_account::{
    traits::{AccountStore, BalanceStore, StakingInfo},
    AccountAddress, Balance,
};

mod messages;

#[cfg(test)]
mod mock;

pub use messages::{Context, Msg, Transaction};

/// The delegation rejection reasons.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The signer account does not exist.
    #[error("account {address} does not exist")]
    UnknownAddress {
        /// The signer address.
        address: AccountAddress,
    },
    /// Nothing has vested yet.
    #[error("account has no vested coins")]
    NoVestedCoins {
        /// The signer address.
        address: AccountAddress,
    },
    /// The delegation would bond unvested coins.
    #[error(
        "cannot delegate unvested coins. delegatable coins < delegation amount ({available} < {requested})"
    )]
    InsufficientVestedCoins {
        /// The signer address.
        address: AccountAddress,
        /// The amount that can be bonded.
        available: Balance,
        /// The amount the message bonds.
        requested: Balance,
    },
}

/// The transaction validation step checking the delegations of vesting accounts.
pub struct VestingDelegationDecorator<AS, BS, SI> {
    /// The account storage.
    accounts: AS,
    /// The balance storage.
    balances: BS,
    /// The staking configuration.
    staking: SI,
}

impl<AS, BS, SI> VestingDelegationDecorator<AS, BS, SI>
where
    AS: AccountStore,
    BS: BalanceStore,
    SI: StakingInfo,
{
    /// Create a new decorator.
    pub fn new(accounts: AS, balances: BS, staking: SI) -> Self {
        Self {
            accounts,
            balances,
            staking,
        }
    }

    /// Check the transaction and pass it on to `next`.
    ///
    /// `next` is called once, and its result returned as is, only if every message
    /// passes the check. Authorization envelopes are opened one level deep.
    pub fn ante_handle<R, E, N>(
        &self,
        ctx: &Context,
        tx: &Transaction,
        simulate: bool,
        next: N,
    ) -> Result<R, E>
    where
        E: From<Error>,
        N: FnOnce(&Context, &Transaction, bool) -> Result<R, E>,
    {
        for msg in &tx.msgs {
            let result = match msg {
                Msg::Exec { msgs, .. } => msgs
                    .iter()
                    .try_for_each(|inner| self.validate_msg(ctx, inner)),
                msg => self.validate_msg(ctx, msg),
            };

            if let Err(error) = result {
                tracing::warn!(message = "Rejecting the transaction", ?error);
                return Err(error.into());
            }
        }

        next(ctx, tx, simulate)
    }

    /// Check that the bonding message only uses vested coins of its signers.
    fn validate_msg(&self, ctx: &Context, msg: &Msg) -> Result<(), Error> {
        let requested = match msg.bond_amount() {
            Some(coin) => coin.amount,
            None => return Ok(()),
        };

        for address in msg.signers() {
            let account = self
                .accounts
                .get(&address)
                .ok_or(Error::UnknownAddress { address })?;

            let vesting_account = match account.as_vesting() {
                Some(vesting_account) => vesting_account,
                // Not restricted by any schedule.
                None => continue,
            };

            tracing::debug!(
                message = "Checking the delegation of a vesting account",
                %address,
                %requested,
                block_time = ctx.block_time,
            );

            if vesting_account.vested_coins(ctx.block_time).is_empty() {
                return Err(Error::NoVestedCoins { address });
            }

            let bond_denom = self.staking.bond_denom();
            let balance = self.balances.balance(&address, &bond_denom);
            let unvested = vesting_account
                .vesting_coins(ctx.block_time)
                .amount_of(bond_denom.as_str());

            // Vested coins are bondable even while locked up.
            let available = balance.saturating_sub(unvested);
            if available < requested {
                return Err(Error::InsufficientVestedCoins {
                    address,
                    available,
                    requested,
                });
            }
        }

        Ok(())
    }
}
