//! The clawback vesting account.
//!
//! An account holding a grant that both vests and unlocks over time on two
//! independent periodic schedules, and whose unvested part can be reclaimed by
//! the funder. The account logic is a deterministic computation over the account
//! state and the given block time; the host storage is only reached through
//! [`traits`].

pub mod account;
pub mod clawback;
pub mod delegation;
pub mod genesis;
pub mod proposal;
pub mod queries;
pub mod traits;
pub mod types;
pub mod validate;

#[cfg(test)]
mod mock;

pub use account::{Account, BaseAccount, VestingAccount};
pub use clawback::{execute_clawback, Clawback, ClawbackError};
pub use delegation::InvariantViolation;
pub use genesis::{GenesisAccount, GenesisConfig, GenesisError};
pub use primitives_address::AccountAddress;
pub use primitives_coins::{Balance, Coin, Coins, Denom};
pub use proposal::{ClawbackProposal, ProposalError};
pub use types::{ClawbackVestingAccount, Grant};
pub use validate::ValidationError;
pub use vesting_schedule_periodic::Period;

/// The block time representation: seconds since the unix epoch.
pub type Timestamp = u64;

/// The schedule type used by the account, for both the lockup and the vesting.
pub type Periods = vesting_schedule_periodic::Periods<Timestamp>;
