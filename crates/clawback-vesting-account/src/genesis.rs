//! The genesis configuration of the clawback vesting accounts.

use std::collections::BTreeSet;

use primitives_address::AccountAddress;
use serde::{Deserialize, Serialize};

use crate::{
    account::{Account, BaseAccount},
    traits::AccountStore,
    types::{ClawbackVestingAccount, Grant},
    validate::ValidationError,
};

/// A clawback vesting account to create at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisAccount {
    /// The account address.
    pub address: AccountAddress,
    /// The grant of the account.
    pub grant: Grant,
}

/// The genesis config.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisConfig {
    /// The accounts to create.
    pub accounts: Vec<GenesisAccount>,
}

/// An error that can happen at genesis build.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GenesisError {
    /// The grant of an account is invalid.
    #[error("invalid grant for account {address}: {source}")]
    InvalidGrant {
        /// The account address.
        address: AccountAddress,
        /// The validation failure.
        source: ValidationError,
    },
    /// The same address is configured more than once.
    #[error("duplicate genesis account {address}")]
    DuplicateAccount {
        /// The account address.
        address: AccountAddress,
    },
    /// An account already exists at the address.
    #[error("account {address} already exists")]
    AccountExists {
        /// The account address.
        address: AccountAddress,
    },
}

impl GenesisConfig {
    /// Create all the configured accounts in the store.
    ///
    /// All the entries are checked before anything is stored, so the store is not
    /// touched if any of them is invalid.
    pub fn build<AS: AccountStore>(&self, accounts: &mut AS) -> Result<(), GenesisError> {
        let mut seen = BTreeSet::new();
        let mut built = Vec::with_capacity(self.accounts.len());

        for GenesisAccount { address, grant } in &self.accounts {
            if !seen.insert(*address) {
                return Err(GenesisError::DuplicateAccount { address: *address });
            }
            if accounts.get(address).is_some() {
                return Err(GenesisError::AccountExists { address: *address });
            }

            let account = ClawbackVestingAccount::new(BaseAccount::new(*address), grant.clone())
                .map_err(|source| GenesisError::InvalidGrant {
                    address: *address,
                    source,
                })?;
            built.push(account);
        }

        for account in built {
            let address = *account.address();
            tracing::debug!(
                message = "Creating genesis clawback vesting account",
                %address,
                original_vesting = %account.original_vesting(),
            );
            accounts.set(&address, Account::ClawbackVesting(account));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assert_matches::assert_matches;
    use vesting_test_utils::{coins, FEE_DENOM, STAKE_DENOM};

    use super::*;

    #[derive(Default)]
    struct MemoryAccounts(BTreeMap<AccountAddress, Account>);

    impl AccountStore for MemoryAccounts {
        fn get(&self, address: &AccountAddress) -> Option<Account> {
            self.0.get(address).cloned()
        }

        fn set(&mut self, address: &AccountAddress, account: Account) {
            self.0.insert(*address, account);
        }
    }

    const FUNDER: &str = "0x1000000000000000000000000000000000000001";
    const ALICE: &str = "0x2000000000000000000000000000000000000002";
    const BOB: &str = "0x3000000000000000000000000000000000000003";

    fn config_json(alice: &str, bob: &str) -> String {
        format!(
            r#"{{
                "accounts": [
                    {{
                        "address": "{alice}",
                        "grant": {{
                            "funder": "{FUNDER}",
                            "original_vesting": [{{ "denom": "stake", "amount": 100 }}],
                            "start_time": 1000,
                            "lockup_periods": [
                                {{ "length": 3600, "amount": [{{ "denom": "stake", "amount": 100 }}] }}
                            ],
                            "vesting_periods": [
                                {{ "length": 1800, "amount": [{{ "denom": "stake", "amount": 40 }}] }},
                                {{ "length": 3600, "amount": [{{ "denom": "stake", "amount": 60 }}] }}
                            ]
                        }}
                    }},
                    {{
                        "address": "{bob}",
                        "grant": {{
                            "funder": "{FUNDER}",
                            "original_vesting": [{{ "denom": "fee", "amount": 10 }}],
                            "start_time": 1000,
                            "end_time": 9000,
                            "lockup_periods": [
                                {{ "length": 1, "amount": [{{ "denom": "fee", "amount": 10 }}] }}
                            ],
                            "vesting_periods": [
                                {{ "length": 1, "amount": [{{ "denom": "fee", "amount": 10 }}] }}
                            ]
                        }}
                    }}
                ]
            }}"#
        )
    }

    #[test]
    fn serde_parse() {
        let config: GenesisConfig = serde_json::from_str(&config_json(ALICE, BOB)).unwrap();

        assert_eq!(config.accounts.len(), 2);
        assert_eq!(config.accounts[0].address, ALICE.parse::<AccountAddress>().unwrap());
        assert_eq!(config.accounts[0].grant.end_time, None);
        assert_eq!(
            config.accounts[0].grant.original_vesting,
            coins(&[(STAKE_DENOM, 100)])
        );
        assert_eq!(config.accounts[1].grant.end_time, Some(9000));
        assert_eq!(
            config.accounts[1].grant.original_vesting,
            coins(&[(FEE_DENOM, 10)])
        );
    }

    #[test]
    #[should_panic = "unknown field `unknown_field`"]
    fn serde_parse_does_not_allow_unknown_fields() {
        let _: GenesisConfig =
            serde_json::from_str(r#"{ "accounts": [], "unknown_field": 1 }"#).unwrap();
    }

    #[test]
    fn build_stores_accounts() {
        let config: GenesisConfig = serde_json::from_str(&config_json(ALICE, BOB)).unwrap();
        let mut accounts = MemoryAccounts::default();

        config.build(&mut accounts).unwrap();

        let alice = accounts
            .get(&ALICE.parse::<AccountAddress>().unwrap())
            .and_then(Account::into_clawback_vesting)
            .unwrap();
        assert_eq!(alice.start_time(), 1000);
        assert_eq!(alice.end_time(), 1000 + 5400);
        assert_eq!(alice.funder(), &FUNDER.parse::<AccountAddress>().unwrap());

        let bob = accounts
            .get(&BOB.parse::<AccountAddress>().unwrap())
            .and_then(Account::into_clawback_vesting)
            .unwrap();
        assert_eq!(bob.end_time(), 9000);
    }

    #[test]
    fn build_rejects_duplicates() {
        let config: GenesisConfig = serde_json::from_str(&config_json(ALICE, ALICE)).unwrap();
        let mut accounts = MemoryAccounts::default();

        assert_matches!(
            config.build(&mut accounts),
            Err(GenesisError::DuplicateAccount { address }) if address == ALICE.parse::<AccountAddress>().unwrap()
        );
        assert!(accounts.0.is_empty());
    }

    #[test]
    fn build_rejects_existing_accounts() {
        let config: GenesisConfig = serde_json::from_str(&config_json(ALICE, BOB)).unwrap();
        let mut accounts = MemoryAccounts::default();
        let bob: AccountAddress = BOB.parse::<AccountAddress>().unwrap();
        accounts.set(&bob, Account::Base(BaseAccount::new(bob)));

        assert_matches!(
            config.build(&mut accounts),
            Err(GenesisError::AccountExists { address }) if address == bob
        );
        assert_eq!(accounts.0.len(), 1);
    }

    #[test]
    fn build_rejects_invalid_grants() {
        let mut config: GenesisConfig = serde_json::from_str(&config_json(ALICE, BOB)).unwrap();
        config.accounts[1].grant.end_time = Some(1000);
        let mut accounts = MemoryAccounts::default();

        assert_matches!(
            config.build(&mut accounts),
            Err(GenesisError::InvalidGrant {
                source: ValidationError::StartNotBeforeEnd,
                ..
            })
        );
        assert!(accounts.0.is_empty());
    }
}
