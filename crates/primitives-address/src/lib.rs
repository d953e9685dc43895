//! Account address.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::String;
use core::{fmt, str::FromStr};

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The length of the address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// An account address (i.e. 20 bytes identifying an account).
///
/// The text form is the 0x-prefixed lowercase hex representation; parsing accepts
/// the prefix as optional and any hex case.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Encode,
    Decode,
    TypeInfo,
    MaxEncodedLen,
)]
pub struct AccountAddress(pub [u8; ADDRESS_LEN]);

/// An error that can occur while parsing an [`AccountAddress`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseAddressError {
    /// The input is empty.
    #[error("empty address string is not allowed")]
    Empty,
    /// The input has the wrong length.
    #[error("bad length of account address: expected {expected} hex chars, got {actual}")]
    BadLength {
        /// The expected amount of hex chars.
        expected: usize,
        /// The actual amount of hex chars.
        actual: usize,
    },
    /// The input contains a non-hex char.
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidCharacter {
        /// The offending char.
        character: char,
        /// The position of the char after the prefix.
        index: usize,
    },
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for AccountAddress {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAddressError::Empty);
        }

        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != ADDRESS_LEN * 2 {
            return Err(ParseAddressError::BadLength {
                expected: ADDRESS_LEN * 2,
                actual: s.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                ParseAddressError::InvalidCharacter {
                    character: c,
                    index,
                }
            }
            // The length is checked above.
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                ParseAddressError::BadLength {
                    expected: ADDRESS_LEN * 2,
                    actual: s.len(),
                }
            }
        })?;

        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LEN]> for AccountAddress {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for AccountAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for AccountAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let base_string = String::deserialize(deserializer)?;
        base_string.parse().map_err(serde::de::Error::custom)
    }
}
