//! The mocks for the host components.

use mockall::mock;
use primitives_address::AccountAddress;
use primitives_coins::Coins;

use crate::{account::Account, traits};

mock! {
    pub AccountStore {}

    impl traits::AccountStore for AccountStore {
        fn get(&self, address: &AccountAddress) -> Option<Account>;
        fn set(&mut self, address: &AccountAddress, account: Account);
    }
}

/// The transfer error the mocked funds transfer fails with.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MockTransferError {
    /// The sender lacks the funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

mock! {
    pub FundsTransfer {}

    impl traits::FundsTransfer for FundsTransfer {
        type Error = MockTransferError;

        fn send(
            &mut self,
            from: &AccountAddress,
            to: &AccountAddress,
            coins: &Coins,
        ) -> Result<(), MockTransferError>;
    }
}
