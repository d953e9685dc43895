use clawback_vesting_account::{traits, Account, AccountAddress, Balance, Denom};
use mockall::mock;

mock! {
    pub AccountStore {}

    impl traits::AccountStore for AccountStore {
        fn get(&self, address: &AccountAddress) -> Option<Account>;
        fn set(&mut self, address: &AccountAddress, account: Account);
    }
}

mock! {
    pub BalanceStore {}

    impl traits::BalanceStore for BalanceStore {
        fn balance(&self, address: &AccountAddress, denom: &Denom) -> Balance;
    }
}

mock! {
    pub StakingInfo {}

    impl traits::StakingInfo for StakingInfo {
        fn bond_denom(&self) -> Denom;
    }
}
