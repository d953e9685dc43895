//! Multi-denomination coin amounts.
//!
//! [`Coins`] is kept canonical at all times: denominations are sorted, unique and
//! never carry a zero amount. Every operation here is integer-only and
//! order-deterministic.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::{borrow::Borrow, fmt};

use codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};


/// The amount of a single denomination.
pub type Balance = u128;

/// A coin denomination.
#[derive(
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Denom(String);

impl Denom {
    /// Create a new denomination.
    pub fn new(denom: impl Into<String>) -> Self {
        Self(denom.into())
    }

    /// The denomination as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Denom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Denom {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Denom {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// A single-denomination amount.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coin {
    /// The denomination.
    pub denom: Denom,
    /// The amount.
    pub amount: Balance,
}

impl Coin {
    /// Create a new coin.
    pub fn new(denom: impl Into<Denom>, amount: Balance) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// An error that can happen at [`Coins`] arithmetic or construction.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CoinsError {
    /// An addition overflowed.
    #[error("overflow in {denom} amount")]
    Overflow {
        /// The denomination that overflowed.
        denom: Denom,
    },
    /// A subtraction went below zero.
    #[error("insufficient {denom} amount: {available} < {requested}")]
    Underflow {
        /// The denomination that underflowed.
        denom: Denom,
        /// The amount present.
        available: Balance,
        /// The amount requested to be subtracted.
        requested: Balance,
    },
    /// The same denomination was listed twice.
    #[error("duplicate denomination {denom}")]
    DuplicateDenom {
        /// The repeated denomination.
        denom: Denom,
    },
}

/// A canonical set of coins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, TypeInfo, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coin>", into = "Vec<Coin>")]
pub struct Coins(BTreeMap<Denom, Balance>);

impl Coins {
    /// An empty coin set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a coin set from `(denom, amount)` pairs.
    ///
    /// Zero amounts are dropped, duplicate denominations are rejected.
    pub fn try_from_pairs<D, I>(pairs: I) -> Result<Self, CoinsError>
    where
        D: Into<Denom>,
        I: IntoIterator<Item = (D, Balance)>,
    {
        let mut map = BTreeMap::new();
        for (denom, amount) in pairs {
            let denom = denom.into();
            if map.insert(denom.clone(), amount).is_some() {
                return Err(CoinsError::DuplicateDenom { denom });
            }
        }
        map.retain(|_, amount| *amount != 0);
        Ok(Self(map))
    }

    /// A coin set with a single coin in it.
    pub fn from_coin(coin: Coin) -> Self {
        let mut map = BTreeMap::new();
        if coin.amount != 0 {
            map.insert(coin.denom, coin.amount);
        }
        Self(map)
    }

    /// The amount of the given denomination, zero if absent.
    pub fn amount_of(&self, denom: &str) -> Balance {
        self.0.get(denom).copied().unwrap_or(0)
    }

    /// Whether there are no coins at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of denominations present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the denominations and amounts in denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (&Denom, Balance)> + '_ {
        self.0.iter().map(|(denom, amount)| (denom, *amount))
    }

    /// The denominations present, in order.
    pub fn denoms(&self) -> impl Iterator<Item = &Denom> + '_ {
        self.0.keys()
    }

    /// Per-denomination sum.
    pub fn checked_add(&self, other: &Self) -> Result<Self, CoinsError> {
        let mut map = self.0.clone();
        for (denom, amount) in other.iter() {
            let slot = map.entry(denom.clone()).or_insert(0);
            *slot = slot.checked_add(amount).ok_or_else(|| CoinsError::Overflow {
                denom: denom.clone(),
            })?;
        }
        Ok(Self(map))
    }

    /// Per-denomination sum clamped at [`Balance::MAX`].
    ///
    /// Only meant for sums already known to fit, like partial sums of a checked total.
    pub fn saturating_add(&self, other: &Self) -> Self {
        let mut map = self.0.clone();
        for (denom, amount) in other.iter() {
            let slot = map.entry(denom.clone()).or_insert(0);
            *slot = slot.saturating_add(amount);
        }
        Self(map)
    }

    /// Per-denomination difference; fails if any denomination would go negative.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, CoinsError> {
        let mut map = self.0.clone();
        for (denom, requested) in other.iter() {
            let available = map.get(denom.as_str()).copied().unwrap_or(0);
            let left = available
                .checked_sub(requested)
                .ok_or_else(|| CoinsError::Underflow {
                    denom: denom.clone(),
                    available,
                    requested,
                })?;
            if left == 0 {
                map.remove(denom.as_str());
            } else {
                map.insert(denom.clone(), left);
            }
        }
        Ok(Self(map))
    }

    /// Per-denomination difference floored at zero.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        let map = self
            .iter()
            .map(|(denom, amount)| {
                let subtrahend = other.amount_of(denom.as_str());
                (denom.clone(), amount.saturating_sub(subtrahend))
            })
            .filter(|(_, amount)| *amount != 0)
            .collect();
        Self(map)
    }

    /// Per-denomination minimum; denominations missing on either side drop out.
    pub fn min(&self, other: &Self) -> Self {
        let map = self
            .iter()
            .map(|(denom, amount)| {
                let bound = other.amount_of(denom.as_str());
                (denom.clone(), amount.min(bound))
            })
            .filter(|(_, amount)| *amount != 0)
            .collect();
        Self(map)
    }

    /// Per-denomination maximum over the union of denominations.
    pub fn max(&self, other: &Self) -> Self {
        let mut map = self.0.clone();
        for (denom, amount) in other.iter() {
            let slot = map.entry(denom.clone()).or_insert(0);
            *slot = (*slot).max(amount);
        }
        Self(map)
    }

    /// Whether every denomination of `self` is covered by `other`.
    pub fn is_all_lte(&self, other: &Self) -> bool {
        self.iter()
            .all(|(denom, amount)| amount <= other.amount_of(denom.as_str()))
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self::from_coin(coin)
    }
}

impl TryFrom<Vec<Coin>> for Coins {
    type Error = CoinsError;

    fn try_from(coins: Vec<Coin>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(coins.into_iter().map(|coin| (coin.denom, coin.amount)))
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(coins: Coins) -> Self {
        coins
            .0
            .into_iter()
            .map(|(denom, amount)| Coin { denom, amount })
            .collect()
    }
}

impl IntoIterator for Coins {
    type Item = Coin;
    type IntoIter = alloc::vec::IntoIter<Coin>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::<Coin>::from(self).into_iter()
    }
}

impl Decode for Coins {
    fn decode<I: codec::Input>(input: &mut I) -> Result<Self, codec::Error> {
        let coins = Vec::<Coin>::decode(input)?;
        // A canonical encoding never carries zero amounts.
        if coins.iter().any(|coin| coin.amount == 0) {
            return Err("zero amount in coins".into());
        }
        Self::try_from(coins).map_err(|_| "duplicate denomination in coins".into())
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        for (idx, (denom, amount)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{amount}{denom}")?;
        }
        Ok(())
    }
}
