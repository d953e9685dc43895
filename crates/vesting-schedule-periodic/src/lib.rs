//! The periodic schedule for vesting and lockup.
//!
//! A schedule is an ordered list of periods. Each period has a length, counted from
//! the end of the previous period (or from the schedule start for the first one),
//! and an amount of coins that matures once that period ends. The amount matured
//! at any instant is the sum of the amounts of all periods that have ended by then,
//! the end itself included.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;

use codec::{Decode, Encode};
use num_traits::{CheckedAdd, CheckedSub, Saturating, Zero};
use primitives_coins::{Coins, CoinsError, Denom};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// The requirements for the time representation used by the schedules.
///
/// The same type expresses both instants and durations.
pub trait Moment: Copy + Ord + Zero + CheckedAdd + CheckedSub + Saturating {}

impl<T> Moment for T where T: Copy + Ord + Zero + CheckedAdd + CheckedSub + Saturating {}

/// A single period of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Period<Duration> {
    /// The length of the period, counting from the end of the previous one.
    pub length: Duration,
    /// The coins that mature when the period ends.
    pub amount: Coins,
}

/// An error that can happen when building [`Periods`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The total length of the periods does not fit the time type.
    #[error("schedule length overflow")]
    LengthOverflow,
    /// The total amount of the periods overflows in some denomination.
    #[error("schedule amount overflow in {denom}")]
    AmountOverflow {
        /// The denomination that overflowed.
        denom: Denom,
    },
}

/// The ordered periods of a schedule.
///
/// The total length and the total amount are checked to fit their types at
/// construction, so every partial sum over the periods fits as well.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, TypeInfo, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Period<Duration>>",
    into = "Vec<Period<Duration>>",
    bound(
        serialize = "Duration: Serialize + Clone",
        deserialize = "Duration: Deserialize<'de> + Moment"
    )
)]
pub struct Periods<Duration>(Vec<Period<Duration>>);

impl<Duration: Moment> Periods<Duration> {
    /// Build the schedule from the given periods.
    pub fn new(periods: Vec<Period<Duration>>) -> Result<Self, ScheduleError> {
        periods
            .iter()
            .try_fold(Duration::zero(), |acc, period| acc.checked_add(&period.length))
            .ok_or(ScheduleError::LengthOverflow)?;

        periods
            .iter()
            .try_fold(Coins::new(), |acc, period| acc.checked_add(&period.amount))
            .map_err(|err| match err {
                CoinsError::Overflow { denom } => ScheduleError::AmountOverflow { denom },
                // Adding canonical coins can only overflow.
                CoinsError::Underflow { denom, .. } | CoinsError::DuplicateDenom { denom } => {
                    ScheduleError::AmountOverflow { denom }
                }
            })?;

        Ok(Self(periods))
    }

    /// The sum of all period lengths.
    pub fn total_length(&self) -> Duration {
        self.0
            .iter()
            .fold(Duration::zero(), |acc, period| acc.saturating_add(period.length))
    }

    /// The sum of all period amounts.
    pub fn total_amount(&self) -> Coins {
        self.0
            .iter()
            .fold(Coins::new(), |acc, period| acc.saturating_add(&period.amount))
    }

    /// The instant the last period ends at, when the schedule starts at `start`.
    ///
    /// Returns `None` if the instant does not fit the time type.
    pub fn end(&self, start: Duration) -> Option<Duration> {
        start.checked_add(&self.total_length())
    }

    /// Iterate over the periods along with the instant (relative to the schedule start)
    /// each one ends at.
    fn ends(&self) -> impl Iterator<Item = (Duration, &Period<Duration>)> + '_ {
        self.0.iter().scan(Duration::zero(), |elapsed, period| {
            *elapsed = elapsed.saturating_add(period.length);
            Some((*elapsed, period))
        })
    }

    /// How much time has passed since `start` at `moment`, `None` before `start`.
    fn elapsed(start: Duration, moment: Duration) -> Option<Duration> {
        moment.checked_sub(&start)
    }

    /// Compute the amount of coins matured by the `moment` for a schedule started at `start`.
    ///
    /// A period counts as matured when the elapsed time equals its cumulative end.
    pub fn cumulative_amount(&self, start: Duration, moment: Duration) -> Coins {
        let elapsed = match Self::elapsed(start, moment) {
            // We are before the schedule start, nothing matured yet.
            None => return Coins::new(),
            Some(v) => v,
        };

        self.ends()
            .take_while(|(end, _)| *end <= elapsed)
            .fold(Coins::new(), |acc, (_, period)| {
                acc.saturating_add(&period.amount)
            })
    }

    /// The number of periods that have ended by the `moment`.
    pub fn passed_period_count(&self, start: Duration, moment: Duration) -> usize {
        match Self::elapsed(start, moment) {
            None => 0,
            Some(elapsed) => self.ends().take_while(|(end, _)| *end <= elapsed).count(),
        }
    }

    /// The longest prefix of periods that have all ended by the `moment`.
    ///
    /// The retained periods are kept as is, all the later ones are dropped.
    pub fn matured_prefix(&self, start: Duration, moment: Duration) -> Self {
        let count = self.passed_period_count(start, moment);
        Self(self.0[..count].to_vec())
    }

    /// Cap the schedule at the given total.
    ///
    /// Walks the periods in order, letting through at most what is left of `cap` in
    /// every denomination. Every period keeps its length, so whatever is let through
    /// matures at its original instant. A period that fits, an empty one included, is
    /// kept unchanged and a period that does not fit is cut down to the remainder.
    /// The periods after the one that exhausts the cap are dropped.
    pub fn capped(&self, cap: &Coins) -> Self {
        let mut remaining = cap.clone();
        let mut periods = Vec::new();

        for period in &self.0 {
            if remaining.is_empty() {
                break;
            }

            let amount = period.amount.min(&remaining);
            remaining = remaining.saturating_sub(&amount);
            periods.push(Period {
                length: period.length,
                amount,
            });
        }

        Self(periods)
    }
}

impl<Duration> Periods<Duration> {
    /// An empty schedule.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The periods as a slice.
    pub fn as_slice(&self) -> &[Period<Duration>] {
        &self.0
    }

    /// Iterate over the periods.
    pub fn iter(&self) -> core::slice::Iter<'_, Period<Duration>> {
        self.0.iter()
    }

    /// The number of periods.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no periods.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the periods out.
    pub fn into_inner(self) -> Vec<Period<Duration>> {
        self.0
    }
}

impl<Duration: Moment> TryFrom<Vec<Period<Duration>>> for Periods<Duration> {
    type Error = ScheduleError;

    fn try_from(periods: Vec<Period<Duration>>) -> Result<Self, Self::Error> {
        Self::new(periods)
    }
}

impl<Duration> From<Periods<Duration>> for Vec<Period<Duration>> {
    fn from(periods: Periods<Duration>) -> Self {
        periods.0
    }
}

impl<Duration: Decode + Moment> Decode for Periods<Duration> {
    fn decode<I: codec::Input>(input: &mut I) -> Result<Self, codec::Error> {
        let periods = Vec::<Period<Duration>>::decode(input)?;
        Self::new(periods).map_err(|_| "schedule totals overflow".into())
    }
}
