//! Common test fixtures for the vesting accounts.
//!
//! The reference grant is 1000fee,100stake unlocked all at once after 16 hours and
//! vested 50% at 12 hours, then 25% at 18 hours and 25% at 24 hours.

use primitives_address::AccountAddress;
pub use primitives_coins::{Balance, Coins};
use vesting_schedule_periodic::{Period, Periods};

/// An hour in seconds.
pub const HOUR: u64 = 60 * 60;

/// The bonding denomination.
pub const STAKE_DENOM: &str = "stake";

/// The fee denomination.
pub const FEE_DENOM: &str = "fee";

/// Build coins from `(denom, amount)` pairs.
pub fn coins(pairs: &[(&str, Balance)]) -> Coins {
    Coins::try_from_pairs(pairs.iter().copied()).unwrap()
}

/// Build a schedule from `(length, amount)` pairs.
pub fn periods(items: &[(u64, Coins)]) -> Periods<u64> {
    let periods = items
        .iter()
        .map(|(length, amount)| Period {
            length: *length,
            amount: amount.clone(),
        })
        .collect();
    Periods::new(periods).unwrap()
}

/// The reference grant amount.
pub fn orig_coins() -> Coins {
    coins(&[(FEE_DENOM, 1000), (STAKE_DENOM, 100)])
}

/// The reference lockup schedule: everything unlocks after 16 hours.
pub fn lockup_periods() -> Periods<u64> {
    periods(&[(16 * HOUR, orig_coins())])
}

/// The reference vesting schedule: 50% after 12 hours, then 25% every 6 hours.
pub fn vesting_periods() -> Periods<u64> {
    periods(&[
        (12 * HOUR, percent_of(&orig_coins(), 50)),
        (6 * HOUR, percent_of(&orig_coins(), 25)),
        (6 * HOUR, percent_of(&orig_coins(), 25)),
    ])
}

/// The given percentage of every denomination, rounded down.
pub fn percent_of(coins: &Coins, percent: Balance) -> Coins {
    let pairs: Vec<_> = coins
        .iter()
        .map(|(denom, amount)| (denom.clone(), amount * percent / 100))
        .collect();
    Coins::try_from_pairs(pairs).unwrap()
}

/// A deterministic address filled with the `seed` byte.
pub fn address(seed: u8) -> AccountAddress {
    AccountAddress([seed; 20])
}
