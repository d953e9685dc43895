//! The transaction messages the gate knows about.

use codec::{Decode, Encode};
use primitives_address::AccountAddress;
use primitives_coins::{Coin, Coins};
use scale_info::TypeInfo;

use clawback_vesting_account::Timestamp;

/// A transaction message.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub enum Msg {
    /// Move coins between accounts.
    Send {
        /// The sender.
        from_address: AccountAddress,
        /// The recipient.
        to_address: AccountAddress,
        /// The coins to move.
        amount: Coins,
    },
    /// Bond coins to a validator.
    Delegate {
        /// The account the coins are bonded from.
        delegator_address: AccountAddress,
        /// The validator the coins are bonded to.
        validator_address: AccountAddress,
        /// The coins to bond.
        amount: Coin,
    },
    /// Create a validator with a self-delegation.
    CreateValidator {
        /// The account the self-delegation is bonded from.
        delegator_address: AccountAddress,
        /// The operator of the new validator.
        validator_address: AccountAddress,
        /// The self-delegation.
        value: Coin,
    },
    /// Execute the inner messages on behalf of their signers.
    Exec {
        /// The account executing the messages.
        grantee: AccountAddress,
        /// The wrapped messages.
        msgs: Vec<Msg>,
    },
}

impl Msg {
    /// The addresses that must sign the message.
    pub fn signers(&self) -> Vec<AccountAddress> {
        match self {
            Self::Send { from_address, .. } => vec![*from_address],
            Self::Delegate {
                delegator_address, ..
            } => vec![*delegator_address],
            Self::CreateValidator {
                delegator_address,
                validator_address,
                ..
            } => {
                if delegator_address == validator_address {
                    vec![*delegator_address]
                } else {
                    vec![*delegator_address, *validator_address]
                }
            }
            Self::Exec { grantee, .. } => vec![*grantee],
        }
    }

    /// The coin the message commits to bonding, if it bonds anything.
    pub fn bond_amount(&self) -> Option<&Coin> {
        match self {
            Self::Delegate { amount, .. } => Some(amount),
            Self::CreateValidator { value, .. } => Some(value),
            Self::Send { .. } | Self::Exec { .. } => None,
        }
    }
}

/// A transaction: an ordered batch of messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode, TypeInfo)]
pub struct Transaction {
    /// The messages.
    pub msgs: Vec<Msg>,
}

impl Transaction {
    /// Create a transaction from the messages.
    pub fn new(msgs: Vec<Msg>) -> Self {
        Self { msgs }
    }
}

/// The block the transaction is processed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// The block time.
    pub block_time: Timestamp,
}
